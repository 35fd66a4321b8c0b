//! # EinsteinTex - 广义相对论曲率张量的 LaTeX 排版工具
//!
//! 由 FLRW 度规出发，依次计算 Christoffel 符号、Riemann 张量、Ricci 张量、
//! Ricci 标量和 Einstein 张量，并将结果逐节追加写入 .tex 文档。
//!
//! ## 子命令
//! - `render`  - 计算并写入 LaTeX 文档
//! - `inspect` - 在终端查看各阶段的非零分量
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── relativity/ (张量计算链)
//!   │     ├── symbolic/   (符号表达式引擎)
//!   │     └── tex/        (LaTeX 文档写入)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod relativity;
mod symbolic;
mod tex;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
