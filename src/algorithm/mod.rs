//! 图算法模块
//!
//! 包含单编辑邻接判定和全源最短路径预计算

mod adjacency;
mod shortest_path;

pub use adjacency::{is_adjacent, is_adjacent_opt};
pub use shortest_path::{PathMap, ShortestPathIndex};
