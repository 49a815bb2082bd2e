//! 结果打印器
//!
//! 提供表格和垂直（邻接表）格式的图输出

use crate::algorithm::MstUpdate;
use crate::graph::{Edge, Graph};
use crate::types::{EdgeWeight, VertexKey};
use prettytable::{format, row, Cell, Row, Table};
use std::fmt::Display;

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式：列出所有边
    Table,
    /// 垂直模式：逐个顶点列出邻接表
    Vertical,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 打印整张图
    pub fn print_graph<K, W>(&self, graph: &Graph<K, W>) -> String
    where
        K: VertexKey + Display,
        W: EdgeWeight + Display,
    {
        match self.mode {
            PrintMode::Table => format!(
                "{}\n{}",
                self.print_stats(graph.vertex_count(), graph.edge_count()),
                self.format_edges(&graph.edges(), graph.total_weight())
            ),
            PrintMode::Vertical => graph.to_string(),
        }
    }

    /// 边列表表格
    fn format_edges<K, W>(&self, edges: &[Edge<K, W>], total_weight: W) -> String
    where
        K: VertexKey + Display,
        W: EdgeWeight + Display,
    {
        if edges.is_empty() {
            return "Empty set\n".to_string();
        }

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["From", "To", "Weight"]);

        for edge in edges {
            table.add_row(Row::new(vec![
                Cell::new(&edge.from.to_string()),
                Cell::new(&edge.to.to_string()),
                Cell::new(&edge.weight.to_string()),
            ]));
        }

        format!(
            "{}{} edge(s), total weight {}\n",
            table,
            edges.len(),
            total_weight
        )
    }

    /// 打印统计信息
    pub fn print_stats(&self, vertex_count: usize, edge_count: usize) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", vertex_count.to_string()]);
        table.add_row(row!["Edge Count", edge_count.to_string()]);
        table.to_string()
    }

    /// 打印增量更新结果
    pub fn print_update<K, W>(&self, candidate: &Edge<K, W>, update: &MstUpdate<K, W>) -> String
    where
        K: VertexKey + Display,
        W: EdgeWeight + Display,
    {
        match update.evicted() {
            Some(evicted) => format!(
                "mst_add_edge: {} changed the MST, evicted {}\n",
                candidate, evicted
            ),
            None => format!("mst_add_edge: {} did not change the MST\n", candidate),
        }
    }
}
