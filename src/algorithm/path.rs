//! 路径搜索
//!
//! 用显式栈实现的深度优先搜索，返回第一条被发现的简单路径；
//! 在树上这就是两点之间唯一的路径

use crate::graph::{Edge, Graph, Vertex};
use crate::types::{sum_weights, EdgeWeight, VertexKey};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

/// 路径结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult<K: VertexKey, W: EdgeWeight> {
    /// 路径上的顶点序列
    pub vertices: Vec<K>,
    /// 路径上的边序列（方向与行走方向一致）
    pub edges: Vec<Edge<K, W>>,
    /// 路径总权重
    pub total_weight: W,
}

impl<K: VertexKey, W: EdgeWeight> PathResult<K, W> {
    fn with_start(start: K) -> Self {
        Self {
            vertices: vec![start],
            edges: Vec::new(),
            total_weight: W::default(),
        }
    }

    /// 路径长度（边数）
    pub fn length(&self) -> usize {
        self.edges.len()
    }

    /// 路径上第一条权重最大的边
    pub fn heaviest_edge(&self) -> Option<&Edge<K, W>> {
        let mut heaviest: Option<&Edge<K, W>> = None;
        for edge in &self.edges {
            match heaviest {
                Some(max) if edge.weight <= max.weight => {}
                _ => heaviest = Some(edge),
            }
        }
        heaviest
    }
}

/// 路径查找器
pub struct PathFinder<'a, K: VertexKey, W: EdgeWeight> {
    graph: &'a Graph<K, W>,
}

impl<'a, K: VertexKey, W: EdgeWeight> PathFinder<'a, K, W> {
    /// 创建路径查找器
    pub fn new(graph: &'a Graph<K, W>) -> Self {
        Self { graph }
    }

    /// DFS 查找 start 到 end 的路径
    ///
    /// 邻居按邻接表的插入顺序访问；任一端点不存在或不可达时返回 None。
    pub fn dfs_path(&self, start: &K, end: &K) -> Option<PathResult<K, W>> {
        let first = self.graph.get_vertex(start)?;
        self.graph.get_vertex(end)?;

        if start == end {
            return Some(PathResult::with_start(start.clone()));
        }

        let mut visited: HashSet<&K> = HashSet::new();
        visited.insert(first.id());

        // 栈帧: (顶点, 下一个待访问邻居的下标)
        let mut stack: Vec<(&Vertex<K, W>, usize)> = vec![(first, 0)];

        while let Some(frame) = stack.last_mut() {
            let (vertex, cursor) = (frame.0, frame.1);
            let neighbor = match vertex.neighbor_at(cursor) {
                Some((neighbor, _)) => neighbor,
                None => {
                    stack.pop();
                    continue;
                }
            };
            frame.1 += 1;

            if !visited.insert(neighbor) {
                continue;
            }
            let next = self.graph.get_vertex(neighbor)?;
            stack.push((next, 0));

            if neighbor == end {
                return Self::collect_path(&stack);
            }
        }

        None
    }

    /// 从 start 出发可达的所有顶点（包含 start）
    pub fn reachable_from(&self, start: &K) -> HashSet<K> {
        let mut visited = HashSet::new();
        if !self.graph.contains_vertex(start) {
            return visited;
        }

        let mut queue = VecDeque::new();
        visited.insert(start.clone());
        queue.push_back(start.clone());

        while let Some(current) = queue.pop_front() {
            if let Some(vertex) = self.graph.get_vertex(&current) {
                for neighbor in vertex.neighbors() {
                    if visited.insert(neighbor.clone()) {
                        queue.push_back(neighbor.clone());
                    }
                }
            }
        }

        visited
    }

    /// 两点是否连通
    pub fn is_reachable(&self, start: &K, end: &K) -> bool {
        self.dfs_path(start, end).is_some()
    }

    fn collect_path(stack: &[(&Vertex<K, W>, usize)]) -> Option<PathResult<K, W>> {
        let mut edges = Vec::with_capacity(stack.len().saturating_sub(1));
        for pair in stack.windows(2) {
            let (from, to) = (pair[0].0, pair[1].0);
            let weight = from.weight(to.id())?;
            edges.push(Edge::new(from.id().clone(), to.id().clone(), weight));
        }

        Some(PathResult {
            vertices: stack.iter().map(|(v, _)| v.id().clone()).collect(),
            total_weight: sum_weights(edges.iter().map(|e| e.weight)),
            edges,
        })
    }
}
