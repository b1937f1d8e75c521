//! 图核心模块
//!
//! 定义泛型无向图和边的核心数据结构

mod edge;
mod graph;

pub use edge::Edge;
pub use graph::{Graph, Neighbors};
