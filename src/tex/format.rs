//! # 分量格式化
//!
//! 将张量分量排版为 LaTeX 文本段：
//! - 零分量按出现顺序去重，合并为一行 `$A$ = $B$ = ... = $0$`
//! - 非零分量以 `符号 = $表达式$` 形式用 `, ` 连接，末尾不带逗号
//!
//! ## 依赖关系
//! - 被 `tex/sections.rs` 使用
//! - 使用 `symbolic/latex.rs`

use crate::symbolic::{latex, Expr};

/// 两个换行命令，用于零分量行与非零分量块之间
pub const HORIZONTAL_SPACE: &str = "\\\\\n\\\\";

/// 非零分量块的起始换行
const BLOCK_OPENING: &str = "\\\\\n\\\\\n";

/// `$\Gamma^{i}_{jk}$`
pub fn christoffel_symbol(i: usize, j: usize, k: usize) -> String {
    format!("$\\Gamma^{{{}}}_{{{}{}}}$", i, j, k)
}

/// `$R^{a}_{bcd}$`
pub fn riemann_symbol(a: usize, b: usize, c: usize, d: usize) -> String {
    format!("$R^{{{}}}_{{{}{}{}}}$", a, b, c, d)
}

/// `$R_{ij}$`
pub fn ricci_symbol(i: usize, j: usize) -> String {
    format!("$R_{{{}{}}}$", i, j)
}

/// `$G_{ij}$`
pub fn einstein_symbol(i: usize, j: usize) -> String {
    format!("$G_{{{}{}}}$", i, j)
}

/// 格式化一组 (符号, 分量)
///
/// `spacing` 为真且存在零分量时，在零分量行后插入 [`HORIZONTAL_SPACE`]。
/// 全部为零时不输出非零分量块。
pub fn format_components<'a, I>(entries: I, spacing: bool) -> String
where
    I: IntoIterator<Item = (String, &'a Expr)>,
{
    let mut zeros: Vec<String> = Vec::new();
    let mut nonzero: Vec<String> = Vec::new();

    for (symbol, value) in entries {
        if value.is_zero() {
            if !zeros.contains(&symbol) {
                zeros.push(symbol);
            }
        } else {
            nonzero.push(format!("{} = ${}$", symbol, latex(value)));
        }
    }

    let mut out = String::new();
    if !zeros.is_empty() {
        out.push_str(&zeros.join(" = "));
        out.push_str(" = $0$\n");
        if spacing {
            out.push_str(HORIZONTAL_SPACE);
        }
    }
    if !nonzero.is_empty() {
        out.push_str(BLOCK_OPENING);
        out.push_str(&nonzero.join(", "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        assert_eq!(christoffel_symbol(0, 1, 2), "$\\Gamma^{0}_{12}$");
        assert_eq!(riemann_symbol(3, 0, 1, 2), "$R^{3}_{012}$");
        assert_eq!(ricci_symbol(1, 1), "$R_{11}$");
        assert_eq!(einstein_symbol(0, 3), "$G_{03}$");
    }

    #[test]
    fn test_zero_and_nonzero_blocks() {
        let x = Expr::symbol("x");
        let zero = Expr::zero();
        let two = Expr::int(2);
        let entries = vec![
            (ricci_symbol(0, 0), &x),
            (ricci_symbol(0, 1), &zero),
            (ricci_symbol(1, 0), &zero),
            (ricci_symbol(1, 1), &two),
        ];

        let text = format_components(entries, true);
        assert_eq!(
            text,
            "$R_{01}$ = $R_{10}$ = $0$\n\\\\\n\\\\\\\\\n\\\\\n$R_{00}$ = $x$, $R_{11}$ = $2$\n"
        );
    }

    #[test]
    fn test_no_spacing_variant() {
        let zero = Expr::zero();
        let one = Expr::one();
        let entries = vec![(einstein_symbol(0, 0), &one), (einstein_symbol(0, 1), &zero)];

        let text = format_components(entries, false);
        assert_eq!(text, "$G_{01}$ = $0$\n\\\\\n\\\\\n$G_{00}$ = $1$\n");
    }

    #[test]
    fn test_duplicate_zero_symbols_collapse() {
        let zero = Expr::zero();
        let entries = vec![
            (ricci_symbol(0, 1), &zero),
            (ricci_symbol(0, 1), &zero),
        ];
        assert_eq!(format_components(entries, true), "$R_{01}$ = $0$\n\\\\\n\\\\");
    }

    #[test]
    fn test_no_trailing_comma() {
        let x = Expr::symbol("x");
        let entries = vec![(ricci_symbol(0, 0), &x)];
        let text = format_components(entries, true);
        assert_eq!(text, "\\\\\n\\\\\n$R_{00}$ = $x$\n");
        assert!(!text.contains(", \n"));
    }
}
