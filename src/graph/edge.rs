//! 边定义
//!
//! 边是临时的三元组 (from, to, weight)，总可以从邻接表推导出来

use crate::types::{EdgeWeight, VertexKey};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 无向带权边
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<K: VertexKey, W: EdgeWeight> {
    /// 起点
    pub from: K,
    /// 终点
    pub to: K,
    /// 权重
    pub weight: W,
}

impl<K: VertexKey, W: EdgeWeight> Edge<K, W> {
    /// 创建新边
    pub fn new(from: K, to: K, weight: W) -> Self {
        Self { from, to, weight }
    }

    /// 是否为自环
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// 端点按顺序排列后的副本，便于比较边集
    pub fn normalized(&self) -> Self {
        if self.from <= self.to {
            self.clone()
        } else {
            Self::new(self.to.clone(), self.from.clone(), self.weight)
        }
    }
}

impl<K: VertexKey, W: EdgeWeight> From<(K, K, W)> for Edge<K, W> {
    fn from((from, to, weight): (K, K, W)) -> Self {
        Self::new(from, to, weight)
    }
}

impl<K, W> fmt::Display for Edge<K, W>
where
    K: VertexKey + fmt::Display,
    W: EdgeWeight + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, weight={})", self.from, self.to, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_endpoints() {
        let e: Edge<u64, i64> = (2, 1, 5).into();
        assert_eq!(e.normalized(), Edge::new(1, 2, 5));
        assert!(!e.is_self_loop());
        assert!(Edge::new(8u64, 8, 98i64).is_self_loop());
    }

    #[test]
    fn test_edge_serialization() {
        let e = Edge::new(1u64, 2u64, 3i64);
        let json = serde_json::to_string(&e).unwrap();
        let restored: Edge<u64, i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(e, restored);
        assert_eq!(e.to_string(), "(1, 2, weight=3)");
    }
}
