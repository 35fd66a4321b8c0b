//! # 广义相对论张量模块
//!
//! 由度规出发依次计算曲率相关张量。
//!
//! ## 计算链
//! 度规 → Christoffel 符号 → Riemann 张量 → Ricci 张量 → Ricci 标量 → Einstein 张量
//!
//! ## 子模块
//! - `components`: 稠密分量存储
//! - `metric`: 度规及逆度规
//! - `metrics`: 预置度规 (FLRW)
//! - `christoffel`, `riemann`, `ricci`, `einstein`: 各阶段张量
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `tex/` 使用
//! - 使用 `symbolic/`

pub mod christoffel;
pub mod components;
pub mod einstein;
pub mod metric;
pub mod metrics;
pub mod ricci;
pub mod riemann;

pub use christoffel::ChristoffelSymbols;
pub use components::Components;
pub use einstein::EinsteinTensor;
pub use metric::MetricTensor;
pub use ricci::{RicciScalar, RicciTensor};
pub use riemann::RiemannCurvatureTensor;
