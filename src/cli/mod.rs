//! 命令行辅助模块
//!
//! 供 `mstgraph-cli` 使用的输出格式化

mod printer;

pub use printer::{PrintMode, Printer};
