//! 最小生成树增量维护
//!
//! 向树中加入一条边会形成唯一的环（树上两端点之间的路径加上新边）。
//! 由环性质，环上权重最大的边不属于任何最小生成树：
//! 路径上存在比新边严格更重的边时，用新边替换其中第一条最重的边；
//! 否则树保持不变。

use super::path::PathFinder;
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use crate::types::{EdgeWeight, VertexKey};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// 增量更新结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum MstUpdate<K: VertexKey, W: EdgeWeight> {
    /// 新边没有改变最小生成树
    Unchanged,
    /// 新边加入，evicted 被移出
    Replaced { evicted: Edge<K, W> },
}

impl<K: VertexKey, W: EdgeWeight> MstUpdate<K, W> {
    /// 树是否发生了变化
    pub fn changed(&self) -> bool {
        matches!(self, MstUpdate::Replaced { .. })
    }

    /// 被移出的边
    pub fn evicted(&self) -> Option<&Edge<K, W>> {
        match self {
            MstUpdate::Replaced { evicted } => Some(evicted),
            MstUpdate::Unchanged => None,
        }
    }
}

/// 最小生成树增量更新器
pub struct MstUpdater<'a, K: VertexKey, W: EdgeWeight> {
    tree: &'a mut Graph<K, W>,
}

impl<'a, K: VertexKey, W: EdgeWeight> MstUpdater<'a, K, W> {
    /// 包装一棵最小生成树
    pub fn new(tree: &'a mut Graph<K, W>) -> Self {
        Self { tree }
    }

    /// 尝试加入候选边
    ///
    /// 两个端点都必须已在树中；当前图不是树时返回 `InvalidPrecondition`。
    /// 失败时树保持不变。
    pub fn add_edge(self, candidate: Edge<K, W>) -> Result<MstUpdate<K, W>> {
        for endpoint in [&candidate.from, &candidate.to] {
            if !self.tree.contains_vertex(endpoint) {
                return Err(Error::vertex_not_found(endpoint));
            }
        }

        if !self.tree.is_tree() {
            warn!(
                vertices = self.tree.vertex_count(),
                edges = self.tree.edge_count(),
                "当前图不是树，无法增量更新"
            );
            return Err(Error::InvalidPrecondition(format!(
                "当前图不是树: {} 个顶点, {} 条边",
                self.tree.vertex_count(),
                self.tree.edge_count()
            )));
        }

        let path = PathFinder::new(self.tree)
            .dfs_path(&candidate.from, &candidate.to)
            .ok_or_else(|| {
                Error::InvalidPrecondition(format!(
                    "树中找不到 {:?} 到 {:?} 的路径",
                    candidate.from, candidate.to
                ))
            })?;

        let heaviest = match path.heaviest_edge() {
            Some(edge) if edge.weight > candidate.weight => edge.clone(),
            _ => {
                debug!(candidate = ?candidate, "新边不改变最小生成树");
                return Ok(MstUpdate::Unchanged);
            }
        };

        // 先移除再插入：候选边与被移出边可能是同一对端点
        self.tree.remove_edge(&heaviest.from, &heaviest.to)?;
        self.tree
            .add_edge(candidate.from.clone(), candidate.to.clone(), candidate.weight);

        debug!(candidate = ?candidate, evicted = ?heaviest, "新边替换了环上最重的边");

        Ok(MstUpdate::Replaced { evicted: heaviest })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Prim;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn sorted_edges<K: VertexKey, W: EdgeWeight>(graph: &Graph<K, W>) -> Vec<Edge<K, W>> {
        let mut edges: Vec<_> = graph.edges().iter().map(Edge::normalized).collect();
        edges.sort_by(|a, b| (&a.from, &a.to).cmp(&(&b.from, &b.to)));
        edges
    }

    fn scenario_tree() -> Graph<&'static str, i64> {
        let mut graph =
            Graph::from_edges(vec![("A", "B", 1), ("B", "C", 2), ("C", "D", 3), ("A", "D", 10)]);
        graph.mst_prim(&"A").unwrap();
        graph
    }

    #[test]
    fn test_add_edge_replaces_heaviest() {
        let mut tree = scenario_tree();
        assert_eq!(tree.total_weight(), 6);

        let update = tree.mst_add_edge(("A", "D", 2)).unwrap();
        assert!(update.changed());
        assert_eq!(update.evicted(), Some(&Edge::new("C", "D", 3)));

        assert_eq!(
            sorted_edges(&tree),
            vec![
                Edge::new("A", "B", 1),
                Edge::new("A", "D", 2),
                Edge::new("B", "C", 2),
            ]
        );
        assert_eq!(tree.total_weight(), 5);
        assert!(tree.is_tree());
    }

    #[test]
    fn test_add_edge_no_change() {
        let mut tree = scenario_tree();
        let before = sorted_edges(&tree);

        // 与路径上最重边等重：不替换
        let update = tree.mst_add_edge(("A", "D", 3)).unwrap();
        assert_eq!(update, MstUpdate::Unchanged);
        assert_eq!(update.evicted(), None);

        let update = tree.mst_add_edge(("B", "D", 100)).unwrap();
        assert!(!update.changed());

        assert_eq!(sorted_edges(&tree), before);
        assert_eq!(tree.total_weight(), 6);
    }

    #[test]
    fn test_add_self_loop_never_changes_tree() {
        let mut tree = scenario_tree();

        let update = tree.mst_add_edge(("B", "B", -1000)).unwrap();
        assert_eq!(update, MstUpdate::Unchanged);
        assert_eq!(tree.edge_count(), 3);
        assert!(!tree.is_adjacent(&"B", &"B"));
    }

    #[test]
    fn test_add_parallel_edge() {
        let mut tree = scenario_tree();

        // 更轻的平行边替换原有的树边
        let update = tree.mst_add_edge(("C", "B", 1)).unwrap();
        assert_eq!(update.evicted(), Some(&Edge::new("C", "B", 2)));
        assert_eq!(tree.weight(&"B", &"C"), Ok(1));
        assert_eq!(tree.edge_count(), 3);

        // 更重的平行边不改变树
        let update = tree.mst_add_edge(("B", "C", 4)).unwrap();
        assert!(!update.changed());
        assert_eq!(tree.weight(&"B", &"C"), Ok(1));
    }

    #[test]
    fn test_add_edge_preconditions() {
        let mut tree = scenario_tree();
        assert_eq!(
            tree.mst_add_edge(("A", "Z", 1)).unwrap_err(),
            Error::vertex_not_found(&"Z")
        );

        // 有环的图不是树
        let mut graph: Graph<&str, i64> =
            Graph::from_edges(vec![("A", "B", 1), ("B", "C", 2), ("C", "A", 3)]);
        let before = graph.clone();
        assert!(matches!(
            graph.mst_add_edge(("A", "C", 1)),
            Err(Error::InvalidPrecondition(_))
        ));
        assert_eq!(graph, before);

        // 不连通的图不是树
        let mut forest: Graph<&str, i64> = Graph::from_edges(vec![("A", "B", 1), ("C", "D", 1)]);
        assert!(matches!(
            forest.mst_add_edge(("A", "C", 1)),
            Err(Error::InvalidPrecondition(_))
        ));
        assert_eq!(forest.edge_count(), 2);
    }

    #[test]
    fn test_add_edge_matches_recomputation() {
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..100 {
            let nodes: u64 = rng.gen_range(2..=15);
            let mut graph: Graph<u64, i64> = Graph::new();
            for v in 2..=nodes {
                graph.add_edge(v, rng.gen_range(1..v), rng.gen_range(0..=30));
            }
            for _ in 0..nodes * 2 {
                graph.add_edge(
                    rng.gen_range(1..=nodes),
                    rng.gen_range(1..=nodes),
                    rng.gen_range(0..=30),
                );
            }

            let mut tree = Prim::new(&graph).build(&1).unwrap();
            let (u, v) = (rng.gen_range(1..=nodes), rng.gen_range(1..=nodes));
            if u == v || tree.is_adjacent(&u, &v) {
                continue;
            }
            let candidate = Edge::new(u, v, rng.gen_range(0..=30));

            // 从头计算 T ∪ {e} 的最小生成树
            let mut union = tree.clone();
            union.add_edge(u, v, candidate.weight);
            let expected = Prim::new(&union).build(&1).unwrap().total_weight();

            let before = tree.total_weight();
            let update = tree.mst_add_edge(candidate.clone()).unwrap();

            assert!(tree.is_tree());
            assert_eq!(tree.total_weight(), expected);
            if update.changed() {
                assert!(tree.total_weight() < before);
                assert!(tree.contains_edge(&candidate));
            } else {
                assert_eq!(tree.total_weight(), before);
                assert!(!tree.contains_edge(&candidate));
            }
        }
    }
}
