//! # LaTeX 文档模块
//!
//! 将计算结果排版为 LaTeX 文档。
//!
//! ## 子模块
//! - `format`: 分量符号与零分量去重格式化
//! - `sections`: 文档各节文本
//! - `document`: 追加写入 .tex 文件
//!
//! ## 依赖关系
//! - 被 `commands/render.rs` 使用
//! - 使用 `relativity/`, `symbolic/`

pub mod document;
pub mod format;
pub mod sections;

pub use document::TexDocument;
