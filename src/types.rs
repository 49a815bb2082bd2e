//! 通用类型定义
//!
//! 顶点标识与边权重的约束，以及演示程序使用的具体类型

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

/// 顶点标识：可哈希、全序的任意键
pub trait VertexKey: Clone + Eq + Hash + Ord + Debug {}

impl<T> VertexKey for T where T: Clone + Eq + Hash + Ord + Debug {}

/// 边权重：可比较、可累加的数值（允许零和负数）
pub trait EdgeWeight: Copy + Ord + Default + Add<Output = Self> + Debug {}

impl<T> EdgeWeight for T where T: Copy + Ord + Default + Add<Output = T> + Debug {}

/// 演示图的顶点 ID
pub type VertexId = u64;

/// 演示图的边权重
pub type Weight = i64;

/// 对一组权重求和
pub fn sum_weights<W: EdgeWeight, I: IntoIterator<Item = W>>(weights: I) -> W {
    weights.into_iter().fold(W::default(), |acc, w| acc + w)
}
