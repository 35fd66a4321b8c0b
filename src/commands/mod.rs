//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `relativity/`, `tex/`, `utils/`
//! - 子模块: render, inspect, summary

pub mod inspect;
pub mod render;
pub mod summary;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Render(args) => render::execute(args),
        Commands::Inspect(args) => inspect::execute(args),
    }
}
