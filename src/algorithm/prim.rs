//! Prim 最小生成树算法
//!
//! 从根顶点出发，每次取跨越当前树的最轻边扩展。
//! 提供两种优先队列实现：
//! - `Lazy`：二叉堆，不做降键，弹出过期条目时直接跳过
//! - `Indexed`：以顶点为键的优先队列，发现更轻的边时降键
//!
//! 两种实现都按“权重，其次发现顺序”出队，结果可复现。

use super::config::PrimStrategy;
use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex};
use crate::types::{EdgeWeight, VertexKey};
use priority_queue::PriorityQueue;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};
use tracing::{debug, info, warn};

/// 堆中的候选边，`to` 是加入后新增的顶点
struct FrontierEdge<K, W> {
    weight: W,
    seq: u64,
    from: K,
    to: K,
}

impl<K, W: Ord> FrontierEdge<K, W> {
    fn key(&self) -> (&W, u64) {
        (&self.weight, self.seq)
    }
}

impl<K, W: Ord> PartialEq for FrontierEdge<K, W> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<K, W: Ord> Eq for FrontierEdge<K, W> {}

impl<K, W: Ord> PartialOrd for FrontierEdge<K, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K, W: Ord> Ord for FrontierEdge<K, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Prim 最小生成树构建器
pub struct Prim<'a, K: VertexKey, W: EdgeWeight> {
    graph: &'a Graph<K, W>,
    strategy: PrimStrategy,
}

impl<'a, K: VertexKey, W: EdgeWeight> Prim<'a, K, W> {
    /// 创建构建器
    pub fn new(graph: &'a Graph<K, W>) -> Self {
        Self {
            graph,
            strategy: PrimStrategy::default(),
        }
    }

    /// 指定优先队列策略
    pub fn with_strategy(mut self, strategy: PrimStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// 从 root 出发构建最小生成树
    ///
    /// 原图不连通时返回 `DisconnectedGraph`。
    pub fn build(&self, root: &K) -> Result<Graph<K, W>> {
        let start = self
            .graph
            .get_vertex(root)
            .ok_or_else(|| Error::vertex_not_found(root))?;

        debug!(root = ?root, strategy = %self.strategy, "开始构建最小生成树");

        let tree = match self.strategy {
            PrimStrategy::Lazy => self.build_lazy(start)?,
            PrimStrategy::Indexed => self.build_indexed(start)?,
        };

        info!(
            vertices = tree.vertex_count(),
            edges = tree.edge_count(),
            total_weight = ?tree.total_weight(),
            "最小生成树构建完成"
        );

        Ok(tree)
    }

    fn build_lazy(&self, start: &Vertex<K, W>) -> Result<Graph<K, W>> {
        let total = self.graph.vertex_count();
        let mut tree = Graph::new();
        let mut visited: HashSet<K> = HashSet::with_capacity(total);
        let mut heap = BinaryHeap::new();
        let mut seq = 0u64;

        tree.add_vertex(start.id().clone());
        visited.insert(start.id().clone());
        push_frontier(start, &visited, &mut heap, &mut seq);

        while visited.len() < total {
            let candidate = match heap.pop() {
                Some(Reverse(candidate)) => candidate,
                None => return Err(disconnected(visited.len(), total)),
            };

            // 过期条目：该顶点已经以更轻的边加入
            if visited.contains(&candidate.to) {
                continue;
            }

            visited.insert(candidate.to.clone());
            tree.add_edge(candidate.from, candidate.to.clone(), candidate.weight);

            if let Some(vertex) = self.graph.get_vertex(&candidate.to) {
                push_frontier(vertex, &visited, &mut heap, &mut seq);
            }
        }

        Ok(tree)
    }

    fn build_indexed(&self, start: &Vertex<K, W>) -> Result<Graph<K, W>> {
        let total = self.graph.vertex_count();
        let mut tree = Graph::new();
        let mut visited: HashSet<K> = HashSet::with_capacity(total);
        let mut queue: PriorityQueue<K, Reverse<(W, u64)>> = PriorityQueue::new();
        // 顶点 -> 当前最轻的 (树内端点, 权重)
        let mut best: HashMap<K, (K, W)> = HashMap::new();
        let mut seq = 0u64;

        tree.add_vertex(start.id().clone());
        visited.insert(start.id().clone());
        relax(start, &visited, &mut queue, &mut best, &mut seq);

        while visited.len() < total {
            let next = match queue.pop() {
                Some((next, _)) => next,
                None => return Err(disconnected(visited.len(), total)),
            };

            if let Some((parent, weight)) = best.remove(&next) {
                tree.add_edge(parent, next.clone(), weight);
            }
            visited.insert(next.clone());

            if let Some(vertex) = self.graph.get_vertex(&next) {
                relax(vertex, &visited, &mut queue, &mut best, &mut seq);
            }
        }

        Ok(tree)
    }
}

fn push_frontier<K: VertexKey, W: EdgeWeight>(
    vertex: &Vertex<K, W>,
    visited: &HashSet<K>,
    heap: &mut BinaryHeap<Reverse<FrontierEdge<K, W>>>,
    seq: &mut u64,
) {
    for (neighbor, weight) in vertex.connections() {
        if visited.contains(neighbor) {
            continue;
        }
        heap.push(Reverse(FrontierEdge {
            weight,
            seq: *seq,
            from: vertex.id().clone(),
            to: neighbor.clone(),
        }));
        *seq += 1;
    }
}

fn relax<K: VertexKey, W: EdgeWeight>(
    vertex: &Vertex<K, W>,
    visited: &HashSet<K>,
    queue: &mut PriorityQueue<K, Reverse<(W, u64)>>,
    best: &mut HashMap<K, (K, W)>,
    seq: &mut u64,
) {
    for (neighbor, weight) in vertex.connections() {
        if visited.contains(neighbor) {
            continue;
        }
        // 同权重时保留先发现的边
        if let Some(Reverse((current, _))) = queue.get_priority(neighbor) {
            if *current <= weight {
                continue;
            }
        }
        queue.push(neighbor.clone(), Reverse((weight, *seq)));
        best.insert(neighbor.clone(), (vertex.id().clone(), weight));
        *seq += 1;
    }
}

fn disconnected(reached: usize, total: usize) -> Error {
    warn!(reached, total, "图不连通，无法生成最小生成树");
    Error::DisconnectedGraph { reached, total }
}
