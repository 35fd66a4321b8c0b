//! # 统一错误处理模块
//!
//! 定义 EinsteinTex 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// EinsteinTex 统一错误类型
#[derive(Error, Debug)]
pub enum EinsteinTexError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 张量错误
    // ─────────────────────────────────────────────────────────────
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Metric is singular (determinant is zero)")]
    SingularMetric,
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, EinsteinTexError>;
