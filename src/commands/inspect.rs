//! # inspect 命令实现
//!
//! 走完整条计算链，在终端打印各阶段的非零分量和统计表，不写文件。
//!
//! ## 依赖关系
//! - 使用 `cli/inspect.rs` 定义的参数
//! - 使用 `relativity/`, `symbolic/`, `tex/format.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::inspect::InspectArgs;
use crate::commands::summary::{self, SectionSummary};
use crate::error::Result;
use crate::relativity::{
    metrics, ChristoffelSymbols, Components, EinsteinTensor, RicciScalar, RicciTensor,
    RiemannCurvatureTensor,
};
use crate::symbolic::{latex, Expr};
use crate::tex::format::{christoffel_symbol, einstein_symbol, ricci_symbol, riemann_symbol};
use crate::utils::output;
use crate::utils::progress::run_stage;

/// 分量标签生成函数
type Label = fn(&[usize], bool) -> String;

fn christoffel_label(idx: &[usize], as_latex: bool) -> String {
    if as_latex {
        christoffel_symbol(idx[0], idx[1], idx[2])
    } else {
        format!("Gamma^{}_{}{}", idx[0], idx[1], idx[2])
    }
}

fn riemann_label(idx: &[usize], as_latex: bool) -> String {
    if as_latex {
        riemann_symbol(idx[0], idx[1], idx[2], idx[3])
    } else {
        format!("R^{}_{}{}{}", idx[0], idx[1], idx[2], idx[3])
    }
}

fn ricci_label(idx: &[usize], as_latex: bool) -> String {
    if as_latex {
        ricci_symbol(idx[0], idx[1])
    } else {
        format!("R_{}{}", idx[0], idx[1])
    }
}

fn einstein_label(idx: &[usize], as_latex: bool) -> String {
    if as_latex {
        einstein_symbol(idx[0], idx[1])
    } else {
        format!("G_{}{}", idx[0], idx[1])
    }
}

fn render_value(value: &Expr, as_latex: bool) -> String {
    if as_latex {
        latex(value)
    } else {
        value.to_string()
    }
}

/// 打印一个张量的非零分量
fn show_components(title: &str, components: &Components, label: Label, as_latex: bool) {
    output::print_section(title);
    let mut any = false;
    for (idx, value) in components.iter().filter(|(_, v)| !v.is_zero()) {
        output::print_component(&label(&idx, as_latex), &render_value(value, as_latex));
        any = true;
    }
    if !any {
        output::print_info("all components vanish");
    }
}

/// 执行 inspect 命令
pub fn execute(args: InspectArgs) -> Result<()> {
    output::print_header("Inspecting FLRW curvature tensors");

    let metric = run_stage("Metric Tensor", metrics::flrw_metric)?;
    let christoffel = run_stage("Christoffel Symbols", || {
        ChristoffelSymbols::from_metric(&metric)
    });
    let riemann = run_stage("Riemann Curvature Tensor", || {
        RiemannCurvatureTensor::from_christoffels(&christoffel)
    });
    let ricci = run_stage("Ricci Tensor", || RicciTensor::from_riemann(&riemann));
    let scalar = run_stage("Ricci Scalar", || RicciScalar::from_ricci_tensor(&ricci));
    let einstein = run_stage("Einstein Tensor", || EinsteinTensor::from_metric(&metric));

    let as_latex = args.latex;
    show_components("Metric Tensor", metric.components(), metric_label, as_latex);
    show_components(
        "Christoffel Symbols",
        christoffel.components(),
        christoffel_label,
        as_latex,
    );
    show_components(
        "Riemann Curvature Tensor",
        riemann.components(),
        riemann_label,
        as_latex,
    );
    show_components("Ricci Tensor", ricci.components(), ricci_label, as_latex);

    output::print_section("Ricci Scalar");
    output::print_component("R", &render_value(scalar.expr(), as_latex));

    show_components("Einstein Tensor", einstein.components(), einstein_label, as_latex);

    summary::print_summary(&[
        SectionSummary::from_components("Metric Tensor", metric.components()),
        SectionSummary::from_components("Christoffel Symbols", christoffel.components()),
        SectionSummary::from_components("Riemann Curvature Tensor", riemann.components()),
        SectionSummary::from_components("Ricci Tensor", ricci.components()),
        SectionSummary::from_scalar("Ricci Scalar", scalar.expr()),
        SectionSummary::from_components("Einstein Tensor", einstein.components()),
    ]);

    Ok(())
}

fn metric_label(idx: &[usize], as_latex: bool) -> String {
    if as_latex {
        format!("$g_{{{}{}}}$", idx[0], idx[1])
    } else {
        format!("g_{}{}", idx[0], idx[1])
    }
}
