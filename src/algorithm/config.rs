//! 最小生成树算法配置

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prim 算法的优先队列策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimStrategy {
    /// 二叉堆，不支持降键；弹出时跳过过期条目
    Lazy,
    /// 按顶点索引的优先队列，发现更轻的边时降键
    Indexed,
}

impl Default for PrimStrategy {
    fn default() -> Self {
        PrimStrategy::Lazy
    }
}

impl PrimStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimStrategy::Lazy => "lazy",
            PrimStrategy::Indexed => "indexed",
        }
    }
}

impl fmt::Display for PrimStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PrimStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lazy" => Ok(PrimStrategy::Lazy),
            "indexed" => Ok(PrimStrategy::Indexed),
            other => Err(Error::InvalidConfig(format!(
                "未知的 Prim 策略: {}（可选 lazy, indexed）",
                other
            ))),
        }
    }
}

/// 最小生成树配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MstConfig {
    /// 优先队列策略
    #[serde(default)]
    pub strategy: PrimStrategy,
}

impl MstConfig {
    pub fn with_strategy(strategy: PrimStrategy) -> Self {
        Self { strategy }
    }
}
