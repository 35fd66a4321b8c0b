//! # 进度提示工具
//!
//! 封装 `indicatif`，为计算链的每个阶段显示 spinner。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `indicatif` crate

use crate::utils::output;

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

/// 创建 spinner（用于不确定进度的任务）
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {elapsed_precise} {msg}")
            .unwrap()
            .tick_strings(&["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// 在 spinner 下执行一个阶段，结束后打印耗时
pub fn run_stage<T, F>(name: &str, stage: F) -> T
where
    F: FnOnce() -> T,
{
    let pb = create_spinner(&format!("Computing {}...", name));
    let start = Instant::now();
    let result = stage();
    pb.finish_and_clear();
    output::print_success(&format!(
        "{} ({:.2?})",
        name,
        start.elapsed()
    ));
    result
}
