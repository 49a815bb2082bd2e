//! Prim 最小生成树与增量更新基准测试

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mstgraph::{GeneratorConfig, MstConfig, PrimStrategy, RandomGraphGenerator};

fn random_graph(nodes: u64, edges: usize) -> mstgraph::Graph<u64, i64> {
    let config = GeneratorConfig {
        nodes,
        edges,
        weight_range: 1_000,
        seed: Some(42),
        ensure_connected: true,
    };
    RandomGraphGenerator::new(config)
        .expect("valid generator config")
        .generate()
}

fn bench_prim(c: &mut Criterion) {
    let mut group = c.benchmark_group("prim");

    for &(nodes, edges) in &[(100u64, 500usize), (1_000, 5_000), (2_000, 20_000)] {
        let graph = random_graph(nodes, edges);

        for strategy in [PrimStrategy::Lazy, PrimStrategy::Indexed] {
            let config = MstConfig::with_strategy(strategy);
            group.bench_with_input(
                BenchmarkId::new(strategy.as_str(), format!("{}v_{}e", nodes, edges)),
                &graph,
                |b, graph| {
                    b.iter(|| {
                        graph
                            .minimum_spanning_tree(black_box(&1), &config)
                            .expect("connected graph")
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_mst_add_edge(c: &mut Criterion) {
    let graph = random_graph(1_000, 5_000);
    let tree = graph
        .minimum_spanning_tree(&1, &MstConfig::default())
        .expect("connected graph");

    c.bench_function("mst_add_edge/1000v", |b| {
        b.iter_batched(
            || tree.clone(),
            |mut tree| tree.mst_add_edge(black_box((1, 1_000, 0))).expect("tree"),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_prim, bench_mst_add_edge);
criterion_main!(benches);
