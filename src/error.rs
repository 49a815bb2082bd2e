//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("边不存在: {0}")]
    EdgeNotFound(String),

    #[error("图不连通: 从根出发仅到达 {reached}/{total} 个顶点")]
    DisconnectedGraph { reached: usize, total: usize },

    #[error("前置条件不满足: {0}")]
    InvalidPrecondition(String),

    #[error("无效配置: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// 构造顶点不存在错误
    pub(crate) fn vertex_not_found<K: std::fmt::Debug>(id: &K) -> Self {
        Error::VertexNotFound(format!("{:?}", id))
    }

    /// 构造边不存在错误
    pub(crate) fn edge_not_found<K: std::fmt::Debug>(from: &K, to: &K) -> Self {
        Error::EdgeNotFound(format!("({:?}, {:?})", from, to))
    }
}
