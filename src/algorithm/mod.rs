//! 图算法模块
//!
//! 包含 Prim 最小生成树、路径搜索和最小生成树增量维护

mod config;
mod mst_update;
mod path;
mod prim;

pub use config::{MstConfig, PrimStrategy};
pub use mst_update::{MstUpdate, MstUpdater};
pub use path::{PathFinder, PathResult};
pub use prim::Prim;
