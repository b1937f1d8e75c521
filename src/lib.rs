//! WordLadder - 单编辑词梯图
//!
//! 把词典中的词建成无向无权图，只差一次替换、插入或删除的词之间连边，
//! 预计算全源最短路径后回答词梯查询：
//! - 单编辑邻接判定
//! - 泛型无向图
//! - 全源最短路径索引
//! - 词典导入与命令行工具

pub mod algorithm;
pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod import;
pub mod processor;

// 重导出常用类型
pub use algorithm::{is_adjacent, PathMap, ShortestPathIndex};
pub use config::{CaseFolding, LadderConfig};
pub use error::{Error, Result};
pub use graph::{Edge, Graph};
pub use import::{ImportStats, WordLoader};
pub use processor::GraphProcessor;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
