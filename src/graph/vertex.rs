//! 顶点定义
//!
//! 顶点持有自身 ID 以及“邻居 -> 权重”的邻接表

use crate::types::{EdgeWeight, VertexKey};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// 顶点
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vertex<K: VertexKey, W: EdgeWeight> {
    /// 顶点 ID
    id: K,
    /// 邻接表（按插入顺序保存）
    adjacent: IndexMap<K, W>,
}

impl<K: VertexKey, W: EdgeWeight> Vertex<K, W> {
    /// 创建新顶点
    pub fn new(id: K) -> Self {
        Self {
            id,
            adjacent: IndexMap::new(),
        }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> &K {
        &self.id
    }

    /// 获取所有邻居 ID
    pub fn neighbors(&self) -> impl Iterator<Item = &K> + '_ {
        self.adjacent.keys()
    }

    /// 获取 (邻居, 权重) 序列
    pub fn connections(&self) -> impl Iterator<Item = (&K, W)> + '_ {
        self.adjacent.iter().map(|(k, w)| (k, *w))
    }

    /// 获取到某个邻居的边权重
    pub fn weight(&self, neighbor: &K) -> Option<W> {
        self.adjacent.get(neighbor).copied()
    }

    /// 是否与某顶点相邻
    pub fn is_adjacent(&self, neighbor: &K) -> bool {
        self.adjacent.contains_key(neighbor)
    }

    /// 度数（自环计一次）
    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }

    /// 按邻接表顺序取第 index 个邻居
    pub(crate) fn neighbor_at(&self, index: usize) -> Option<(&K, W)> {
        self.adjacent.get_index(index).map(|(k, w)| (k, *w))
    }

    pub(crate) fn add_neighbor(&mut self, neighbor: K, weight: W) {
        self.adjacent.insert(neighbor, weight);
    }

    pub(crate) fn remove_neighbor(&mut self, neighbor: &K) -> Option<W> {
        self.adjacent.shift_remove(neighbor)
    }
}

impl<K, W> fmt::Display for Vertex<K, W>
where
    K: VertexKey + fmt::Display,
    W: EdgeWeight + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "VERTEX [{}]", self.id)?;
        for (neighbor, weight) in &self.adjacent {
            writeln!(f, "adjacent [{}]  weight= {}", neighbor, weight)?;
        }
        Ok(())
    }
}
