//! MstGraph CLI 工具
//!
//! 在样例图或随机图上构建最小生成树，并演示加入新边后的增量维护

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use mstgraph::cli::{PrintMode, Printer};
use mstgraph::{
    sample_edges, Edge, GeneratorConfig, Graph, MstConfig, MstUpdate, PrimStrategy,
    RandomGraphGenerator, VertexId, Weight,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mstgraph-cli")]
#[command(about = "MstGraph 最小生成树命令行工具")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 在内置样例图上运行
    Demo {
        /// 根顶点
        #[arg(short, long, default_value = "5")]
        root: VertexId,

        #[command(flatten)]
        options: RunOptions,
    },
    /// 在随机图上运行
    Random {
        /// 顶点数
        #[arg(short, long, default_value = "20")]
        nodes: u64,

        /// 边数
        #[arg(short, long, default_value = "50")]
        edges: usize,

        /// 权重上限（权重取 0..=weight_range）
        #[arg(short, long, default_value = "99")]
        weight_range: Weight,

        /// 随机种子
        #[arg(short, long)]
        seed: Option<u64>,

        /// 先生成随机生成树以保证连通
        #[arg(short, long)]
        connected: bool,

        /// 根顶点
        #[arg(short, long, default_value = "1")]
        root: VertexId,

        #[command(flatten)]
        options: RunOptions,
    },
}

#[derive(Args, Debug)]
struct RunOptions {
    /// 优先队列策略: lazy, indexed
    #[arg(long, default_value = "lazy")]
    strategy: PrimStrategy,

    /// 构建后依次加入的边，格式 from,to,weight（可重复）
    #[arg(short, long = "add", value_parser = parse_edge)]
    add: Vec<(VertexId, VertexId, Weight)>,

    /// 以邻接表形式输出
    #[arg(short, long)]
    vertical: bool,

    /// 以 JSON 输出
    #[arg(long)]
    json: bool,
}

/// JSON 输出的运行报告
#[derive(Serialize)]
struct RunReport {
    strategy: PrimStrategy,
    root: VertexId,
    vertices: usize,
    edges: usize,
    total_weight: Weight,
    tree: Vec<Edge<VertexId, Weight>>,
    updates: Vec<UpdateReport>,
}

#[derive(Serialize)]
struct UpdateReport {
    candidate: Edge<VertexId, Weight>,
    #[serde(flatten)]
    update: MstUpdate<VertexId, Weight>,
    total_weight: Weight,
}

fn parse_edge(s: &str) -> Result<(VertexId, VertexId, Weight), String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("边格式应为 from,to,weight: {}", s));
    }
    let from = parts[0].parse().map_err(|e| format!("无效的起点 {}: {}", parts[0], e))?;
    let to = parts[1].parse().map_err(|e| format!("无效的终点 {}: {}", parts[1], e))?;
    let weight = parts[2].parse().map_err(|e| format!("无效的权重 {}: {}", parts[2], e))?;
    Ok((from, to, weight))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Demo { root, mut options } => {
            if options.add.is_empty() {
                options.add = vec![(1, 2, 100), (2, 20, 1)];
            }
            let graph = Graph::from_edges(sample_edges());
            run(graph, root, &options)
        }
        Command::Random {
            nodes,
            edges,
            weight_range,
            seed,
            connected,
            root,
            options,
        } => {
            let config = GeneratorConfig {
                nodes,
                edges,
                weight_range,
                seed,
                ensure_connected: connected,
            };
            let graph = RandomGraphGenerator::new(config)
                .context("随机图配置无效")?
                .generate();
            run(graph, root, &options)
        }
    }
}

fn run(mut graph: Graph<VertexId, Weight>, root: VertexId, options: &RunOptions) -> anyhow::Result<()> {
    let mode = if options.vertical {
        PrintMode::Vertical
    } else {
        PrintMode::Table
    };
    let printer = Printer::new(mode);
    let config = MstConfig::with_strategy(options.strategy);

    if !options.json {
        println!("原始图");
        println!("{}", printer.print_graph(&graph));
    }

    graph
        .mst_prim_with(&root, &config)
        .with_context(|| format!("从顶点 {} 构建最小生成树失败", root))?;

    if !options.json {
        println!("最小生成树 (root = {}, strategy = {})", root, options.strategy);
        println!("{}", printer.print_graph(&graph));
    }

    let mut updates = Vec::with_capacity(options.add.len());
    for &(from, to, weight) in &options.add {
        let candidate = Edge::new(from, to, weight);
        let update = graph
            .mst_add_edge(candidate.clone())
            .with_context(|| format!("加入边 {} 失败", candidate))?;

        if !options.json {
            print!("{}", printer.print_update(&candidate, &update));
            println!("{}", printer.print_graph(&graph));
        }

        updates.push(UpdateReport {
            candidate,
            update,
            total_weight: graph.total_weight(),
        });
    }

    if options.json {
        let report = RunReport {
            strategy: options.strategy,
            root,
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            total_weight: graph.total_weight(),
            tree: graph.edges(),
            updates,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
