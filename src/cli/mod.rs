//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `render`: 计算曲率张量并写入 LaTeX 文档
//! - `inspect`: 在终端查看各阶段的非零分量
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: render, inspect

pub mod inspect;
pub mod render;

use clap::{Parser, Subcommand};

/// EinsteinTex - 广义相对论曲率张量的 LaTeX 排版工具
#[derive(Parser)]
#[command(name = "einsteintex")]
#[command(version)]
#[command(about = "Symbolic GR curvature tensors rendered as a LaTeX document", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compute the FLRW curvature tensors and append them to a .tex document
    Render(render::RenderArgs),

    /// Compute the FLRW curvature tensors and print the non-zero components
    Inspect(inspect::InspectArgs),
}
