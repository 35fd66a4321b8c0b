//! # 文档各节文本
//!
//! 生成 LaTeX 文档各部分的完整文本，不涉及文件 I/O。
//!
//! ## 依赖关系
//! - 被 `tex/document.rs` 使用
//! - 使用 `tex/format.rs`, `relativity/`, `symbolic/latex.rs`

use crate::relativity::{
    ChristoffelSymbols, EinsteinTensor, MetricTensor, RicciScalar, RicciTensor,
    RiemannCurvatureTensor,
};
use crate::symbolic::{latex, latex_matrix};
use crate::tex::format::{
    christoffel_symbol, einstein_symbol, format_components, ricci_symbol, riemann_symbol,
};

/// 文档头
pub fn preamble(title: &str) -> String {
    format!(
        "\\documentclass{{article}}\n\
         \\usepackage{{amsmath}}\n\
         \\usepackage{{geometry}}\n\
         \\geometry{{margin=1.5in}}\n\
         \\title{{{}}}\n\
         \\begin{{document}}\n\
         \\maketitle\n",
        title
    )
}

/// 文档尾
pub fn end() -> String {
    "\\end{document}\n".to_string()
}

fn section_heading(name: &str) -> String {
    format!("\n\\section{{{}:}}\n", name)
}

/// 度规矩阵
pub fn metric_tensor(metric: &MetricTensor) -> String {
    format!(
        "\n{}\\begin{{equation*}}g_{{\\mu\\nu}} = {}\\end{{equation*}}\n",
        section_heading("Metric Tensor"),
        latex_matrix(&metric.components().rows())
    )
}

pub fn christoffel_symbols(christoffel: &ChristoffelSymbols) -> String {
    let entries = christoffel
        .components()
        .iter()
        .map(|(idx, value)| (christoffel_symbol(idx[0], idx[1], idx[2]), value));
    format!(
        "\n{}{}",
        section_heading("Christoffel Symbols"),
        format_components(entries, true)
    )
}

pub fn riemann_curvature_tensor(riemann: &RiemannCurvatureTensor) -> String {
    let entries = riemann
        .components()
        .iter()
        .map(|(idx, value)| (riemann_symbol(idx[0], idx[1], idx[2], idx[3]), value));
    format!(
        "\n{}{}",
        section_heading("Riemann Curvature Tensor"),
        format_components(entries, true)
    )
}

pub fn ricci_tensor(ricci: &RicciTensor) -> String {
    let entries = ricci
        .components()
        .iter()
        .map(|(idx, value)| (ricci_symbol(idx[0], idx[1]), value));
    format!(
        "\n{}{}",
        section_heading("Ricci Tensor"),
        format_components(entries, true)
    )
}

pub fn ricci_scalar(scalar: &RicciScalar) -> String {
    format!(
        "\n\n\\section{{Ricci Scalar:}}\n\\begin{{center}}R = ${}$\\end{{center}}\n",
        latex(scalar.expr())
    )
}

/// Einstein 张量一节的零分量行后不加额外换行
pub fn einstein_tensor(einstein: &EinsteinTensor) -> String {
    let entries = einstein
        .components()
        .iter()
        .map(|(idx, value)| (einstein_symbol(idx[0], idx[1]), value));
    format!(
        "{}{}",
        section_heading("Einstein Tensor"),
        format_components(entries, false)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relativity::metrics::flrw_metric;

    #[test]
    fn test_preamble() {
        let text = preamble("FLRW Metric");
        assert!(text.starts_with("\\documentclass{article}\n\\usepackage{amsmath}\n"));
        assert!(text.contains("\\geometry{margin=1.5in}\n\\title{FLRW Metric}\n"));
        assert!(text.ends_with("\\begin{document}\n\\maketitle\n"));
    }

    #[test]
    fn test_metric_section() {
        let metric = flrw_metric().unwrap();
        let text = metric_tensor(&metric);
        assert!(text.starts_with("\n\n\\section{Metric Tensor:}\n\\begin{equation*}g_{\\mu\\nu} = \\left[\\begin{matrix}-1 & 0 & 0 & 0\\\\"));
        assert!(text.ends_with("\\end{matrix}\\right]\\end{equation*}\n"));
    }

    #[test]
    fn test_ricci_scalar_section() {
        let metric = flrw_metric().unwrap();
        let ricci = RicciTensor::from_riemann(&RiemannCurvatureTensor::from_christoffels(
            &ChristoffelSymbols::from_metric(&metric),
        ));
        let text = ricci_scalar(&RicciScalar::from_ricci_tensor(&ricci));
        assert!(text.starts_with("\n\n\\section{Ricci Scalar:}\n\\begin{center}R = $"));
        assert!(text.ends_with("$\\end{center}\n"));
    }

    #[test]
    fn test_einstein_section_has_no_extra_spacing() {
        let metric = flrw_metric().unwrap();
        let text = einstein_tensor(&EinsteinTensor::from_metric(&metric));
        assert!(text.starts_with("\n\\section{Einstein Tensor:}\n$G_{01}$ = $G_{02}$"));
        assert!(text.contains(" = $0$\n\\\\\n\\\\\n$G_{00}$ = $"));
    }

    #[test]
    fn test_christoffel_section_lists_nonzero_symbols() {
        let metric = flrw_metric().unwrap();
        let text = christoffel_symbols(&ChristoffelSymbols::from_metric(&metric));
        assert!(text.starts_with("\n\n\\section{Christoffel Symbols:}\n$\\Gamma^{0}_{00}$ = "));
        assert!(text.contains("$\\Gamma^{0}_{11}$ = $a{\\left(t \\right)} \\frac{d}{d t} a{\\left(t \\right)}$"));
        assert!(!text.contains("$\\Gamma^{0}_{11}$ = $0$"));
        assert!(text.ends_with("$\n"));
    }
}
