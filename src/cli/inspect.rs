//! # inspect 子命令 CLI 定义
//!
//! 在终端打印各阶段的非零分量，不写文件。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/inspect.rs`

use clap::Args;

/// inspect 子命令参数
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Print components as LaTeX instead of plain text
    #[arg(long, default_value_t = false)]
    pub latex: bool,
}
