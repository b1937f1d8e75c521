//! 命令行界面模块
//!
//! 命令解析、执行和结果打印

pub mod commands;
pub mod printer;

pub use commands::{execute, Command, CommandResult};
pub use printer::{PrintMode, Printer};
