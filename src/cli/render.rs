//! # render 子命令 CLI 定义
//!
//! 计算 FLRW 度规的曲率张量并追加写入 LaTeX 文档。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/render.rs`

use clap::Args;
use std::path::PathBuf;

/// render 子命令参数
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Output .tex file (appended to if it already exists)
    #[arg(short, long, default_value = "einstein.tex")]
    pub output: PathBuf,

    /// Document title
    #[arg(short, long, default_value = "FLRW Metric")]
    pub title: String,
}
