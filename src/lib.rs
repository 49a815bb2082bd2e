//! MstGraph - 带权无向图与最小生成树维护
//!
//! 提供：
//! - 内存中的带权无向图（顶点、邻接表、增删原语）
//! - Prim 最小生成树构建（惰性二叉堆或可降键优先队列）
//! - 加入单条新边后的最小生成树增量维护
//! - 演示用的样例数据与可复现的随机图生成器

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod generator;
pub mod graph;
pub mod types;

// 重导出常用类型
pub use algorithm::{MstConfig, MstUpdate, PathFinder, PathResult, Prim, PrimStrategy};
pub use error::{Error, Result};
pub use generator::{sample_edges, GeneratorConfig, RandomGraphGenerator};
pub use graph::{Edge, Graph, Vertex};
pub use types::{EdgeWeight, VertexId, VertexKey, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
