//! 演示与测试数据
//!
//! 固定的样例边列表和可复现的随机图生成器。
//! 它们只通过公开 API 调用图核心，不属于核心逻辑。

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{VertexId, Weight};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 样例边列表（包含重复边和自环）
const SAMPLE_EDGES: [(VertexId, VertexId, Weight); 54] = [
    (10, 11, 18), (12, 9, 26), (16, 6, 83), (2, 5, 91), (3, 19, 47), (5, 14, 88),
    (16, 2, 53), (19, 15, 85), (10, 7, 1), (19, 5, 97), (8, 8, 98), (19, 6, 52),
    (3, 13, 18), (13, 13, 63), (2, 3, 36), (20, 10, 38), (14, 19, 1), (4, 13, 46),
    (11, 5, 19), (11, 11, 40), (16, 1, 99), (15, 6, 28), (13, 2, 80), (10, 7, 57),
    (1, 9, 41), (13, 11, 86), (7, 15, 75), (14, 10, 12), (7, 16, 28), (19, 20, 13),
    (19, 17, 98), (12, 11, 83), (15, 1, 87), (8, 10, 72), (16, 18, 71), (4, 14, 60),
    (16, 3, 55), (15, 7, 94), (17, 15, 69), (1, 20, 22), (4, 18, 19), (10, 15, 99),
    (4, 5, 2), (10, 11, 60), (2, 11, 16), (18, 4, 18), (9, 8, 86), (15, 3, 60),
    (20, 2, 84), (6, 7, 74), (12, 14, 55), (12, 16, 6), (7, 8, 70), (1, 5, 62),
];

/// 获取样例边列表
pub fn sample_edges() -> Vec<(VertexId, VertexId, Weight)> {
    SAMPLE_EDGES.to_vec()
}

/// 生成器支持的最大顶点数
pub const MAX_NODES: u64 = 1 << 24;

/// 随机图生成配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// 顶点数，顶点 ID 为 1..=nodes
    pub nodes: u64,
    /// 目标边数（重复边不计入）
    pub edges: usize,
    /// 权重在 0..=weight_range 内均匀分布
    pub weight_range: Weight,
    /// 随机种子，为空时使用系统熵
    pub seed: Option<u64>,
    /// 是否先生成一棵随机生成树以保证连通
    pub ensure_connected: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            nodes: 20,
            edges: 50,
            weight_range: 99,
            seed: None,
            ensure_connected: false,
        }
    }
}

impl GeneratorConfig {
    /// 可容纳的最大边数（含自环），超出 usize 范围时返回 None
    pub fn max_edges(&self) -> Option<usize> {
        let n = u128::from(self.nodes);
        usize::try_from(n * (n + 1) / 2).ok()
    }

    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        if self.nodes == 0 {
            return Err(Error::InvalidConfig("顶点数必须大于 0".to_string()));
        }
        if self.nodes > MAX_NODES {
            return Err(Error::InvalidConfig(format!(
                "顶点数过大: {}, 最多 {}",
                self.nodes, MAX_NODES
            )));
        }
        if self.weight_range < 0 {
            return Err(Error::InvalidConfig(format!(
                "权重范围不能为负数: {}",
                self.weight_range
            )));
        }
        let max_edges = self.max_edges().ok_or_else(|| {
            Error::InvalidConfig(format!("{} 个顶点的边数上限溢出", self.nodes))
        })?;
        if self.edges > max_edges {
            return Err(Error::InvalidConfig(format!(
                "{} 个顶点最多容纳 {} 条边, 请求 {} 条",
                self.nodes, max_edges, self.edges
            )));
        }
        if self.ensure_connected && (self.edges as u64) + 1 < self.nodes {
            return Err(Error::InvalidConfig(format!(
                "连通图至少需要 {} 条边, 请求 {} 条",
                self.nodes - 1,
                self.edges
            )));
        }
        Ok(())
    }
}

/// 随机图生成器
pub struct RandomGraphGenerator {
    config: GeneratorConfig,
}

impl RandomGraphGenerator {
    /// 创建生成器（会校验配置）
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 生成随机图
    pub fn generate(&self) -> Graph<VertexId, Weight> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let nodes = self.config.nodes;
        let mut graph = Graph::new();

        for id in 1..=nodes {
            graph.add_vertex(id);
        }

        if self.config.ensure_connected {
            for id in 2..=nodes {
                let parent = rng.gen_range(1..id);
                graph.add_edge(id, parent, self.random_weight(&mut rng));
            }
        }

        while graph.edge_count() < self.config.edges {
            let from = rng.gen_range(1..=nodes);
            let to = rng.gen_range(1..=nodes);
            graph.add_edge(from, to, self.random_weight(&mut rng));
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            seed = ?self.config.seed,
            "随机图生成完成"
        );

        graph
    }

    fn random_weight(&self, rng: &mut StdRng) -> Weight {
        rng.gen_range(0..=self.config.weight_range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{MstConfig, PrimStrategy};

    #[test]
    fn test_sample_edges() {
        let graph = Graph::from_edges(sample_edges());

        assert_eq!(sample_edges().len(), 54);
        assert_eq!(graph.vertex_count(), 20);
        // 重复边只保留第一次出现的权重
        assert_eq!(graph.edge_count(), 50);
        assert_eq!(graph.weight(&7, &10), Ok(1));
        assert_eq!(graph.weight(&8, &8), Ok(98));
        assert!(graph.is_connected());
    }

    #[test]
    fn test_sample_demo_flow() {
        for strategy in [PrimStrategy::Lazy, PrimStrategy::Indexed] {
            let mut graph = Graph::from_edges(sample_edges());
            graph
                .mst_prim_with(&5, &MstConfig::with_strategy(strategy))
                .unwrap();
            assert_eq!(graph.vertex_count(), 20);
            assert_eq!(graph.edge_count(), 19);
            assert_eq!(graph.total_weight(), 456);

            let update = graph.mst_add_edge((1, 2, 100)).unwrap();
            assert!(!update.changed());
            assert_eq!(graph.total_weight(), 456);

            let update = graph.mst_add_edge((2, 20, 1)).unwrap();
            assert!(update.changed());
            assert_eq!(graph.total_weight(), 439);
            assert!(graph.is_tree());
        }
    }

    #[test]
    fn test_generator_reproducible() {
        let config = GeneratorConfig {
            seed: Some(17),
            ..GeneratorConfig::default()
        };
        let generator = RandomGraphGenerator::new(config).unwrap();

        let first = generator.generate();
        let second = generator.generate();
        assert_eq!(first, second);
        assert_eq!(first.vertex_count(), 20);
        assert_eq!(first.edge_count(), 50);
        assert!(first.edges().iter().all(|e| (0..=99).contains(&e.weight)));
    }

    #[test]
    fn test_generator_connected() {
        for seed in 0..20 {
            let config = GeneratorConfig {
                nodes: 30,
                edges: 29,
                weight_range: 10,
                seed: Some(seed),
                ensure_connected: true,
            };
            let graph = RandomGraphGenerator::new(config).unwrap().generate();
            assert!(graph.is_tree());
        }
    }

    #[test]
    fn test_generator_config_validation() {
        let invalid = [
            GeneratorConfig {
                nodes: 0,
                ..GeneratorConfig::default()
            },
            GeneratorConfig {
                nodes: 3,
                edges: 7,
                ..GeneratorConfig::default()
            },
            GeneratorConfig {
                weight_range: -1,
                ..GeneratorConfig::default()
            },
            GeneratorConfig {
                nodes: 10,
                edges: 5,
                ensure_connected: true,
                ..GeneratorConfig::default()
            },
            // 边数上限的计算不能溢出
            GeneratorConfig {
                nodes: u64::MAX,
                ..GeneratorConfig::default()
            },
            GeneratorConfig {
                nodes: 5_000_000_000,
                edges: 3,
                ..GeneratorConfig::default()
            },
            GeneratorConfig {
                nodes: MAX_NODES + 1,
                ..GeneratorConfig::default()
            },
        ];
        for config in invalid {
            assert!(matches!(
                RandomGraphGenerator::new(config),
                Err(Error::InvalidConfig(_))
            ));
        }

        assert_eq!(
            GeneratorConfig {
                nodes: u64::MAX,
                ..GeneratorConfig::default()
            }
            .max_edges(),
            None
        );

        // 三个顶点恰好容纳 6 条边（含自环）
        let full = GeneratorConfig {
            nodes: 3,
            edges: 6,
            seed: Some(1),
            ..GeneratorConfig::default()
        };
        assert_eq!(full.max_edges(), Some(6));
        assert_eq!(RandomGraphGenerator::new(full).unwrap().generate().edge_count(), 6);
    }
}
