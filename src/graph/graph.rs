//! 图数据结构
//!
//! 内存中的带权无向图：顶点表、邻接查询与增删原语，
//! 以及挂在图上的最小生成树操作

use super::edge::Edge;
use super::vertex::Vertex;
use crate::algorithm::{MstConfig, MstUpdate, MstUpdater, PathFinder, Prim};
use crate::error::{Error, Result};
use crate::types::{sum_weights, EdgeWeight, VertexKey};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// 带权无向图
///
/// 每条边在两个端点的邻接表中对称出现且权重相同；
/// 自环只在该顶点的邻接表中出现一次，计为一条边。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Graph<K: VertexKey, W: EdgeWeight> {
    /// 顶点表（按插入顺序保存）
    vertices: IndexMap<K, Vertex<K, W>>,
    /// 边数量
    edge_count: usize,
}

impl<K: VertexKey, W: EdgeWeight> Default for Graph<K, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: VertexKey, W: EdgeWeight> Graph<K, W> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertices: IndexMap::new(),
            edge_count: 0,
        }
    }

    /// 从边列表构建图
    pub fn from_edges<E, I>(edges: I) -> Self
    where
        E: Into<Edge<K, W>>,
        I: IntoIterator<Item = E>,
    {
        let mut graph = Self::new();
        graph.add_edges_from(edges);
        graph
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点，已存在时返回 false
    pub fn add_vertex(&mut self, id: K) -> bool {
        if self.vertices.contains_key(&id) {
            return false;
        }
        self.vertices.insert(id.clone(), Vertex::new(id));
        true
    }

    /// 获取顶点
    pub fn get_vertex(&self, id: &K) -> Option<&Vertex<K, W>> {
        self.vertices.get(id)
    }

    /// 是否包含顶点
    pub fn contains_vertex(&self, id: &K) -> bool {
        self.vertices.contains_key(id)
    }

    /// 删除顶点及其所有关联边
    pub fn remove_vertex(&mut self, id: &K) -> Result<Vertex<K, W>> {
        let vertex = self
            .vertices
            .shift_remove(id)
            .ok_or_else(|| Error::vertex_not_found(id))?;

        for neighbor in vertex.neighbors() {
            if neighbor != id {
                if let Some(n) = self.vertices.get_mut(neighbor) {
                    n.remove_neighbor(id);
                }
            }
        }
        self.edge_count -= vertex.degree();

        Ok(vertex)
    }

    /// 获取所有顶点
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<K, W>> + '_ {
        self.vertices.values()
    }

    /// 获取所有顶点 ID
    pub fn vertex_ids(&self) -> impl Iterator<Item = &K> + '_ {
        self.vertices.keys()
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // ==================== 边操作 ====================

    /// 添加边，缺失的端点会自动创建
    ///
    /// 两端已相邻时什么都不做（权重也不会更新），返回 false。
    pub fn add_edge(&mut self, from: K, to: K, weight: W) -> bool {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());

        if self.is_adjacent(&from, &to) {
            return false;
        }

        if let Some(v) = self.vertices.get_mut(&to) {
            v.add_neighbor(from.clone(), weight);
        }
        if let Some(v) = self.vertices.get_mut(&from) {
            v.add_neighbor(to, weight);
        }
        self.edge_count += 1;

        true
    }

    /// 依次添加多条边，返回实际插入的边数
    pub fn add_edges_from<E, I>(&mut self, edges: I) -> usize
    where
        E: Into<Edge<K, W>>,
        I: IntoIterator<Item = E>,
    {
        let mut inserted = 0;
        for edge in edges {
            let Edge { from, to, weight } = edge.into();
            if self.add_edge(from, to, weight) {
                inserted += 1;
            }
        }
        inserted
    }

    /// 删除边，返回被删除边的权重
    pub fn remove_edge(&mut self, from: &K, to: &K) -> Result<W> {
        let weight = self.weight(from, to)?;

        if let Some(v) = self.vertices.get_mut(to) {
            v.remove_neighbor(from);
        }
        if let Some(v) = self.vertices.get_mut(from) {
            v.remove_neighbor(to);
        }
        self.edge_count -= 1;

        Ok(weight)
    }

    /// 获取边权重
    pub fn weight(&self, from: &K, to: &K) -> Result<W> {
        let vertex = self
            .vertices
            .get(from)
            .ok_or_else(|| Error::vertex_not_found(from))?;
        if !self.vertices.contains_key(to) {
            return Err(Error::vertex_not_found(to));
        }
        vertex
            .weight(to)
            .ok_or_else(|| Error::edge_not_found(from, to))
    }

    /// 两顶点是否相邻
    pub fn is_adjacent(&self, from: &K, to: &K) -> bool {
        self.vertices
            .get(from)
            .map(|v| v.is_adjacent(to))
            .unwrap_or(false)
    }

    /// 是否包含边（忽略权重）
    pub fn contains_edge(&self, edge: &Edge<K, W>) -> bool {
        self.is_adjacent(&edge.from, &edge.to)
    }

    /// 获取所有边，每对顶点只出现一次
    pub fn edges(&self) -> Vec<Edge<K, W>> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (index, vertex) in self.vertices.values().enumerate() {
            for (neighbor, weight) in vertex.connections() {
                if let Some(other) = self.vertices.get_index_of(neighbor) {
                    if other >= index {
                        edges.push(Edge::new(vertex.id().clone(), neighbor.clone(), weight));
                    }
                }
            }
        }
        edges
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// 所有边的权重之和
    pub fn total_weight(&self) -> W {
        sum_weights(self.edges().into_iter().map(|e| e.weight))
    }

    // ==================== 结构判定 ====================

    /// 是否连通（空图视为连通）
    pub fn is_connected(&self) -> bool {
        match self.vertices.keys().next() {
            Some(first) => {
                PathFinder::new(self).reachable_from(first).len() == self.vertex_count()
            }
            None => true,
        }
    }

    /// 是否为树：非空、连通且边数为顶点数减一
    pub fn is_tree(&self) -> bool {
        !self.vertices.is_empty()
            && self.edge_count + 1 == self.vertex_count()
            && self.is_connected()
    }

    // ==================== 最小生成树 ====================

    /// 用 Prim 算法计算最小生成树，并用结果替换当前图
    pub fn mst_prim(&mut self, root: &K) -> Result<()> {
        self.mst_prim_with(root, &MstConfig::default())
    }

    /// 按指定配置计算最小生成树，并用结果替换当前图
    ///
    /// 失败时当前图保持不变。
    pub fn mst_prim_with(&mut self, root: &K, config: &MstConfig) -> Result<()> {
        let tree = self.minimum_spanning_tree(root, config)?;
        *self = tree;
        Ok(())
    }

    /// 计算最小生成树但不修改当前图
    pub fn minimum_spanning_tree(&self, root: &K, config: &MstConfig) -> Result<Self> {
        Prim::new(self).with_strategy(config.strategy).build(root)
    }

    /// 向当前最小生成树加入一条新边并维护最小性
    ///
    /// 当前图必须是一棵树（通常是 `mst_prim` 的结果）。
    pub fn mst_add_edge<E: Into<Edge<K, W>>>(&mut self, edge: E) -> Result<MstUpdate<K, W>> {
        MstUpdater::new(self).add_edge(edge.into())
    }
}

impl<K, W> fmt::Display for Graph<K, W>
where
    K: VertexKey + fmt::Display,
    W: EdgeWeight + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Graph total: vertices: {} edges: {}",
            self.vertex_count(),
            self.edge_count
        )?;
        for vertex in self.vertices.values() {
            writeln!(f, "{}", vertex)?;
        }
        Ok(())
    }
}
