//! # 分量统计表
//!
//! 统计每个阶段的分量总数、非零与零分量个数，用 `tabled` 打印。
//!
//! ## 依赖关系
//! - 被 `commands/render.rs`, `commands/inspect.rs` 使用
//! - 使用 `relativity/components.rs`

use crate::relativity::Components;
use crate::symbolic::Expr;

use tabled::{Table, Tabled};

/// 统计表的一行
#[derive(Debug, Clone, Tabled)]
pub struct SectionSummary {
    #[tabled(rename = "Section")]
    pub section: String,
    #[tabled(rename = "Components")]
    pub total: usize,
    #[tabled(rename = "Non-zero")]
    pub nonzero: usize,
    #[tabled(rename = "Zero")]
    pub zero: usize,
}

impl SectionSummary {
    pub fn from_components(section: &str, components: &Components) -> Self {
        let nonzero = components.count_nonzero();
        Self {
            section: section.to_string(),
            total: components.len(),
            nonzero,
            zero: components.len() - nonzero,
        }
    }

    pub fn from_scalar(section: &str, expr: &Expr) -> Self {
        let nonzero = usize::from(!expr.is_zero());
        Self {
            section: section.to_string(),
            total: 1,
            nonzero,
            zero: 1 - nonzero,
        }
    }
}

/// 打印统计表
pub fn print_summary(rows: &[SectionSummary]) {
    let table = Table::new(rows);
    println!("\n{}", table);
}
