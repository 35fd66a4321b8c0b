//! # 符号计算模块
//!
//! 为曲率张量计算提供的最小符号引擎。
//!
//! ## 子模块
//! - `number`: 精确有理数
//! - `expr`: 规范形式的表达式树与代数运算
//! - `diff`: 偏导数
//! - `latex`: LaTeX 输出
//!
//! ## 依赖关系
//! - 被 `relativity/` 和 `tex/` 使用
//! - 无外部模块依赖

pub mod diff;
pub mod expr;
pub mod latex;
pub mod number;

pub use expr::Expr;
pub use latex::{latex, latex_matrix};
