//! # LaTeX 输出
//!
//! 将规范表达式转换为 LaTeX 字符串，风格与常见计算机代数系统一致：
//! - 函数: `a{\left(t \right)}`
//! - 导数: `\frac{d}{d t} a{\left(t \right)}`，多变量时使用 `\partial`
//! - 负指数合并为 `\frac{num}{den}`
//! - 希腊字母名称转为对应宏
//!
//! ## 依赖关系
//! - 被 `tex/` 使用
//! - 使用 `symbolic/expr.rs`

use crate::symbolic::expr::{display_order, Elementary, Expr};
use crate::symbolic::number::Rational;

const GREEK: &[&str] = &[
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota", "kappa",
    "lambda", "mu", "nu", "xi", "pi", "rho", "sigma", "tau", "upsilon", "phi", "chi", "psi",
    "omega", "Gamma", "Delta", "Theta", "Lambda", "Xi", "Pi", "Sigma", "Upsilon", "Phi", "Psi",
    "Omega",
];

/// 符号名转 LaTeX
fn latex_symbol(name: &str) -> String {
    if GREEK.contains(&name) {
        format!("\\{}", name)
    } else {
        name.to_string()
    }
}

fn latex_args(args: &[String]) -> String {
    let args: Vec<String> = args.iter().map(|a| latex_symbol(a)).collect();
    format!("{{\\left({} \\right)}}", args.join(","))
}

fn latex_rational(r: Rational) -> String {
    if r.is_integer() {
        r.numer().to_string()
    } else if r.is_negative() {
        format!("- \\frac{{{}}}{{{}}}", -r.numer(), r.denom())
    } else {
        format!("\\frac{{{}}}{{{}}}", r.numer(), r.denom())
    }
}

fn latex_derivative(name: &str, args: &[String], orders: &[(String, u32)]) -> String {
    let total: u32 = orders.iter().map(|(_, n)| n).sum();
    let func = format!("{}{}", latex_symbol(name), latex_args(args));
    let (d, sep) = if args.len() == 1 {
        ("d", " ")
    } else {
        ("\\partial", "")
    };

    let numer = if total == 1 {
        d.to_string()
    } else {
        format!("{}^{{{}}}", d, total)
    };
    let denom: Vec<String> = orders
        .iter()
        .map(|(var, n)| {
            if *n == 1 {
                format!("{} {}", d, latex_symbol(var))
            } else {
                format!("{} {}^{{{}}}", d, latex_symbol(var), n)
            }
        })
        .collect();

    format!("\\frac{{{}}}{{{}}} {}", numer, denom.join(sep), func)
}

/// 作为乘积因子输出，和式加括号
fn latex_factor(e: &Expr) -> String {
    match e {
        Expr::Add(_) => format!("\\left({}\\right)", latex(e)),
        _ => latex(e),
    }
}

fn latex_pow(base: &Expr, exp: &Expr) -> String {
    if exp.coefficient().is_negative() {
        let flipped = Expr::neg(exp.clone());
        let denom = if flipped.is_one() {
            latex(base)
        } else {
            latex_pow(base, &flipped)
        };
        return format!("\\frac{{1}}{{{}}}", denom);
    }
    if exp.as_num() == Rational::new(1, 2) {
        return format!("\\sqrt{{{}}}", latex(base));
    }

    let exp_str = latex(exp);
    match base {
        Expr::Function { name, args } => {
            format!("{}^{{{}}}{}", latex_symbol(name), exp_str, latex_args(args))
        }
        Expr::Elementary(kind @ (Elementary::Sin | Elementary::Cos | Elementary::Log), x) => {
            format!("\\{}^{{{}}}{{\\left({} \\right)}}", kind.name(), exp_str, latex(x))
        }
        Expr::Symbol(s) => format!("{}^{{{}}}", latex_symbol(s), exp_str),
        Expr::Num(r) if r.is_integer() && !r.is_negative() => format!("{}^{{{}}}", r, exp_str),
        _ => format!("\\left({}\\right)^{{{}}}", latex(base), exp_str),
    }
}

fn latex_product(coeff_numer: i64, factors: &[Expr]) -> String {
    let body: Vec<String> = factors.iter().map(latex_factor).collect();
    let body = body.join(" ");
    match (coeff_numer, body.is_empty()) {
        (n, true) => n.to_string(),
        (1, false) => body,
        (-1, false) => format!("- {}", body),
        (n, false) => format!("{} {}", n, body),
    }
}

fn latex_mul(e: &Expr) -> String {
    let (coeff, numer, denom) = e.numer_denom();
    let sign = if coeff.is_negative() { "- " } else { "" };
    let abs = coeff.abs();

    if denom.is_empty() && abs.is_integer() {
        return latex_product(coeff.numer(), &numer);
    }

    let top = latex_product(abs.numer(), &numer);
    let mut bottom: Vec<String> = Vec::new();
    if abs.denom() != 1 {
        bottom.push(abs.denom().to_string());
    }
    bottom.extend(denom.iter().map(latex_factor));
    format!("{}\\frac{{{}}}{{{}}}", sign, top, bottom.join(" "))
}

/// 表达式转 LaTeX
pub fn latex(e: &Expr) -> String {
    match e {
        Expr::Num(r) => latex_rational(*r),
        Expr::Symbol(s) => latex_symbol(s),
        Expr::Function { name, args } => format!("{}{}", latex_symbol(name), latex_args(args)),
        Expr::Derivative { name, args, orders } => latex_derivative(name, args, orders),
        Expr::Elementary(Elementary::Exp, x) => format!("e^{{{}}}", latex(x)),
        Expr::Elementary(kind, x) => format!("\\{}{{\\left({} \\right)}}", kind.name(), latex(x)),
        Expr::Pow(b, x) => latex_pow(b, x),
        Expr::Mul(_) => latex_mul(e),
        Expr::Add(terms) => {
            let mut out = String::new();
            for (i, term) in display_order(terms).into_iter().enumerate() {
                if i == 0 {
                    out.push_str(&latex(term));
                } else if term.coefficient().is_negative() {
                    out.push_str(" - ");
                    out.push_str(&latex(&Expr::neg(term.clone())));
                } else {
                    out.push_str(" + ");
                    out.push_str(&latex(term));
                }
            }
            out
        }
    }
}

/// 二阶数组转 LaTeX 矩阵
pub fn latex_matrix(rows: &[Vec<Expr>]) -> String {
    let rows: Vec<String> = rows
        .iter()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(latex).collect();
            cells.join(" & ")
        })
        .collect();
    format!(
        "\\left[\\begin{{matrix}}{}\\end{{matrix}}\\right]",
        rows.join("\\\\")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a() -> Expr {
        Expr::function("a", &["t"])
    }

    #[test]
    fn test_atoms() {
        assert_eq!(latex(&Expr::int(-3)), "-3");
        assert_eq!(latex(&Expr::rational(1, 2).unwrap()), "\\frac{1}{2}");
        assert_eq!(latex(&Expr::symbol("theta")), "\\theta");
        assert_eq!(latex(&Expr::symbol("r")), "r");
        assert_eq!(latex(&a()), "a{\\left(t \\right)}");
    }

    #[test]
    fn test_derivatives() {
        assert_eq!(
            latex(&a().diff("t")),
            "\\frac{d}{d t} a{\\left(t \\right)}"
        );
        assert_eq!(
            latex(&a().diff("t").diff("t")),
            "\\frac{d^{2}}{d t^{2}} a{\\left(t \\right)}"
        );
        let f = Expr::function("f", &["t", "r"]);
        assert_eq!(
            latex(&f.diff("t").diff("r")),
            "\\frac{\\partial^{2}}{\\partial t\\partial r} f{\\left(t,r \\right)}"
        );
    }

    #[test]
    fn test_powers() {
        assert_eq!(
            latex(&Expr::pow(a(), Expr::int(2))),
            "a^{2}{\\left(t \\right)}"
        );
        assert_eq!(
            latex(&Expr::pow(a(), Expr::int(-2))),
            "\\frac{1}{a^{2}{\\left(t \\right)}}"
        );
        assert_eq!(
            latex(&Expr::pow(a().diff("t"), Expr::int(2))),
            "\\left(\\frac{d}{d t} a{\\left(t \\right)}\\right)^{2}"
        );
        assert_eq!(
            latex(&Expr::pow(Expr::symbol("x"), Expr::rational(1, 2).unwrap())),
            "\\sqrt{x}"
        );
    }

    #[test]
    fn test_fractions() {
        // a'/a
        let e = a().diff("t") / a();
        assert_eq!(
            latex(&e),
            "\\frac{\\frac{d}{d t} a{\\left(t \\right)}}{a{\\left(t \\right)}}"
        );

        // -3 a''/a
        let e = Expr::int(-3) * a().diff("t").diff("t") / a();
        assert_eq!(
            latex(&e),
            "- \\frac{3 \\frac{d^{2}}{d t^{2}} a{\\left(t \\right)}}{a{\\left(t \\right)}}"
        );

        let e = Expr::symbol("x") / Expr::int(2);
        assert_eq!(latex(&e), "\\frac{x}{2}");
    }

    #[test]
    fn test_sums_put_positive_terms_first() {
        let x = Expr::symbol("x");
        let e = Expr::int(-1) + Expr::int(2) * x;
        assert_eq!(latex(&e), "2 x - 1");
    }

    #[test]
    fn test_elementary() {
        let th = Expr::symbol("theta");
        assert_eq!(latex(&Expr::sin(th.clone())), "\\sin{\\left(\\theta \\right)}");
        assert_eq!(
            latex(&Expr::pow(Expr::sin(th.clone()), Expr::int(2))),
            "\\sin^{2}{\\left(\\theta \\right)}"
        );
        assert_eq!(latex(&Expr::exp(th)), "e^{\\theta}");
    }

    #[test]
    fn test_matrix() {
        let rows = vec![
            vec![Expr::int(-1), Expr::zero()],
            vec![Expr::zero(), Expr::pow(a(), Expr::int(2))],
        ];
        assert_eq!(
            latex_matrix(&rows),
            "\\left[\\begin{matrix}-1 & 0\\\\0 & a^{2}{\\left(t \\right)}\\end{matrix}\\right]"
        );
    }
}
