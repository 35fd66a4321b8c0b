//! # render 命令实现
//!
//! 按固定顺序计算并写入：文档头 → 度规 → Christoffel 符号 → Riemann 张量 →
//! Ricci 张量 → Ricci 标量 → Einstein 张量 → 文档尾。
//!
//! ## 依赖关系
//! - 使用 `cli/render.rs` 定义的参数
//! - 使用 `relativity/`, `tex/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::render::RenderArgs;
use crate::commands::summary::{self, SectionSummary};
use crate::error::Result;
use crate::relativity::{
    metrics, ChristoffelSymbols, EinsteinTensor, RicciScalar, RicciTensor,
    RiemannCurvatureTensor,
};
use crate::tex::TexDocument;
use crate::utils::output;
use crate::utils::progress::run_stage;

/// 执行 render 命令
pub fn execute(args: RenderArgs) -> Result<()> {
    output::print_header("Rendering FLRW curvature tensors");

    if args.output.exists() {
        output::print_warning(&format!(
            "'{}' already exists, appending a new document to it",
            args.output.display()
        ));
    }

    let doc = TexDocument::new(&args.output);
    let mut rows = Vec::new();

    doc.write_preamble(&args.title)?;

    let metric = run_stage("Metric Tensor", metrics::flrw_metric)?;
    doc.write_metric_tensor(&metric)?;
    rows.push(SectionSummary::from_components("Metric Tensor", metric.components()));

    let christoffel = run_stage("Christoffel Symbols", || {
        ChristoffelSymbols::from_metric(&metric)
    });
    doc.write_christoffel_symbols(&christoffel)?;
    rows.push(SectionSummary::from_components(
        "Christoffel Symbols",
        christoffel.components(),
    ));

    let riemann = run_stage("Riemann Curvature Tensor", || {
        RiemannCurvatureTensor::from_christoffels(&christoffel)
    });
    doc.write_riemann_curvature_tensor(&riemann)?;
    rows.push(SectionSummary::from_components(
        "Riemann Curvature Tensor",
        riemann.components(),
    ));

    let ricci = run_stage("Ricci Tensor", || RicciTensor::from_riemann(&riemann));
    doc.write_ricci_tensor(&ricci)?;
    rows.push(SectionSummary::from_components("Ricci Tensor", ricci.components()));

    let scalar = run_stage("Ricci Scalar", || RicciScalar::from_ricci_tensor(&ricci));
    doc.write_ricci_scalar(&scalar)?;
    rows.push(SectionSummary::from_scalar("Ricci Scalar", scalar.expr()));

    let einstein = run_stage("Einstein Tensor", || EinsteinTensor::from_metric(&metric));
    doc.write_einstein_tensor(&einstein)?;
    rows.push(SectionSummary::from_components("Einstein Tensor", einstein.components()));

    doc.write_end()?;

    summary::print_summary(&rows);
    output::print_done(&format!("Wrote '{}'", doc.path().display()));

    Ok(())
}
