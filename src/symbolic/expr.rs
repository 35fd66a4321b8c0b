//! # 符号表达式
//!
//! 规范形式的符号表达式树。所有构造函数都返回规范形式：
//! - 加法展平并合并同类项
//! - 乘法展平、对加法展开、同底数指数相加，数值系数在最前
//! - 整数次幂分配到乘积上，小的正整数次幂展开
//!
//! 对于度规导出的（Laurent 多项式型）表达式，规范形式的结构相等即数学相等。
//!
//! ## 依赖关系
//! - 被 `symbolic/diff.rs`, `symbolic/latex.rs`, `relativity/` 使用
//! - 使用 `symbolic/number.rs`

use crate::symbolic::number::Rational;

use std::collections::BTreeMap;
use std::fmt;
use std::ops;

/// 小正整数次幂展开的上限
const MAX_EXPAND_POWER: i64 = 8;

/// 初等函数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Elementary {
    Sin,
    Cos,
    Exp,
    Log,
}

impl Elementary {
    pub fn name(&self) -> &'static str {
        match self {
            Elementary::Sin => "sin",
            Elementary::Cos => "cos",
            Elementary::Exp => "exp",
            Elementary::Log => "log",
        }
    }
}

/// 符号表达式
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Expr {
    /// 有理数
    Num(Rational),
    /// 符号（坐标或常数）
    Symbol(String),
    /// 未定义函数作用于坐标符号，如 a(t)
    Function { name: String, args: Vec<String> },
    /// 未定义函数的偏导数，orders 按 args 中的顺序排列
    Derivative {
        name: String,
        args: Vec<String>,
        orders: Vec<(String, u32)>,
    },
    /// 初等函数
    Elementary(Elementary, Box<Expr>),
    /// 幂
    Pow(Box<Expr>, Box<Expr>),
    /// 乘积（已排序，数值系数在最前）
    Mul(Vec<Expr>),
    /// 和（已排序）
    Add(Vec<Expr>),
}

impl Expr {
    // ─────────────────────────────────────────────────────────────
    // 原子
    // ─────────────────────────────────────────────────────────────

    pub fn int(n: i64) -> Expr {
        Expr::Num(Rational::integer(n))
    }

    /// 有理数 num/den，分母为零时返回 None
    pub fn rational(num: i64, den: i64) -> Option<Expr> {
        Rational::new(num, den).map(Expr::Num)
    }

    pub fn zero() -> Expr {
        Expr::Num(Rational::ZERO)
    }

    pub fn one() -> Expr {
        Expr::Num(Rational::ONE)
    }

    pub fn symbol(name: &str) -> Expr {
        Expr::Symbol(name.to_string())
    }

    /// 未定义函数，如 `Expr::function("a", &["t"])` 即 a(t)
    pub fn function(name: &str, args: &[&str]) -> Expr {
        Expr::Function {
            name: name.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn as_num(&self) -> Option<Rational> {
        match self {
            Expr::Num(r) => Some(*r),
            _ => None,
        }
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Num(r) if r.is_zero())
    }

    pub fn is_one(&self) -> bool {
        matches!(self, Expr::Num(r) if r.is_one())
    }

    // ─────────────────────────────────────────────────────────────
    // 初等函数
    // ─────────────────────────────────────────────────────────────

    pub fn sin(x: Expr) -> Expr {
        if x.is_zero() {
            return Expr::zero();
        }
        Expr::Elementary(Elementary::Sin, Box::new(x))
    }

    pub fn cos(x: Expr) -> Expr {
        if x.is_zero() {
            return Expr::one();
        }
        Expr::Elementary(Elementary::Cos, Box::new(x))
    }

    pub fn exp(x: Expr) -> Expr {
        if x.is_zero() {
            return Expr::one();
        }
        Expr::Elementary(Elementary::Exp, Box::new(x))
    }

    pub fn log(x: Expr) -> Expr {
        if x.is_one() {
            return Expr::zero();
        }
        Expr::Elementary(Elementary::Log, Box::new(x))
    }

    // ─────────────────────────────────────────────────────────────
    // 代数运算（规范化）
    // ─────────────────────────────────────────────────────────────

    /// 求和并合并同类项
    pub fn add(terms: Vec<Expr>) -> Expr {
        let mut constant = Rational::ZERO;
        let mut collected: BTreeMap<Expr, Rational> = BTreeMap::new();

        for term in terms.into_iter().flat_map(Expr::into_terms) {
            match term {
                Expr::Num(r) => constant = constant + r,
                other => {
                    let (coeff, rest) = other.into_coefficient();
                    let entry = collected.entry(rest).or_insert(Rational::ZERO);
                    *entry = *entry + coeff;
                }
            }
        }

        let mut out = Vec::new();
        if !constant.is_zero() {
            out.push(Expr::Num(constant));
        }
        for (rest, coeff) in collected {
            if !coeff.is_zero() {
                out.push(Expr::scale(coeff, rest));
            }
        }
        out.sort();

        match out.len() {
            0 => Expr::zero(),
            1 => out.remove(0),
            _ => Expr::Add(out),
        }
    }

    /// 求积，对和式展开并合并同底数的幂
    pub fn mul(factors: Vec<Expr>) -> Expr {
        let mut flat: Vec<Expr> = factors.into_iter().flat_map(Expr::into_factors).collect();

        if let Some(pos) = flat.iter().position(|f| matches!(f, Expr::Add(_))) {
            let sum = flat.swap_remove(pos);
            let rest = Expr::mul(flat);
            return Expr::add(
                sum.into_terms()
                    .map(|t| Expr::mul(vec![t, rest.clone()]))
                    .collect(),
            );
        }

        let mut coeff = Rational::ONE;
        let mut powers: BTreeMap<Expr, Vec<Expr>> = BTreeMap::new();
        for factor in flat {
            match factor {
                Expr::Num(r) => coeff = coeff * r,
                other => {
                    let (base, exp) = other.into_base_exp();
                    powers.entry(base).or_default().push(exp);
                }
            }
        }
        if coeff.is_zero() {
            return Expr::zero();
        }

        let mut out = Vec::new();
        let mut renormalize = false;
        for (base, exps) in powers {
            match Expr::pow(base, Expr::add(exps)) {
                Expr::Num(r) => coeff = coeff * r,
                p @ (Expr::Mul(_) | Expr::Add(_)) => {
                    renormalize = true;
                    out.push(p);
                }
                p => out.push(p),
            }
        }
        if renormalize {
            out.push(Expr::Num(coeff));
            return Expr::mul(out);
        }
        if coeff.is_zero() {
            return Expr::zero();
        }

        out.sort();
        if out.is_empty() {
            return Expr::Num(coeff);
        }
        if coeff.is_one() && out.len() == 1 {
            return out.remove(0);
        }
        if !coeff.is_one() {
            out.insert(0, Expr::Num(coeff));
        }
        Expr::Mul(out)
    }

    /// 幂运算
    pub fn pow(base: Expr, exp: Expr) -> Expr {
        if exp.is_zero() {
            return Expr::one();
        }
        if exp.is_one() {
            return base;
        }
        let int_exp = exp.as_num().filter(|e| e.is_integer()).map(|e| e.numer());

        match (base, int_exp) {
            (Expr::Num(b), Some(n)) => match b.powi(n) {
                Some(r) => Expr::Num(r),
                None => Expr::Pow(Box::new(Expr::Num(b)), Box::new(exp)),
            },
            (Expr::Num(b), _) if b.is_one() => Expr::one(),
            (Expr::Num(b), _) if b.is_zero() && exp.as_num().is_some_and(|e| !e.is_negative()) => {
                Expr::zero()
            }
            (Expr::Pow(b, e), Some(_)) => Expr::pow(*b, Expr::mul(vec![*e, exp])),
            (Expr::Mul(fs), Some(_)) => {
                Expr::mul(fs.into_iter().map(|f| Expr::pow(f, exp.clone())).collect())
            }
            (sum @ Expr::Add(_), Some(n)) if n > 1 && n <= MAX_EXPAND_POWER => {
                Expr::mul(vec![sum; n as usize])
            }
            (base, _) => Expr::Pow(Box::new(base), Box::new(exp)),
        }
    }

    pub fn neg(x: Expr) -> Expr {
        Expr::mul(vec![Expr::int(-1), x])
    }

    pub fn sub(a: Expr, b: Expr) -> Expr {
        Expr::add(vec![a, Expr::neg(b)])
    }

    pub fn div(a: Expr, b: Expr) -> Expr {
        Expr::mul(vec![a, Expr::pow(b, Expr::int(-1))])
    }

    /// 表达式是否不含变量 var
    pub fn free_of(&self, var: &str) -> bool {
        match self {
            Expr::Num(_) => true,
            Expr::Symbol(s) => s != var,
            Expr::Function { args, .. } | Expr::Derivative { args, .. } => {
                !args.iter().any(|a| a == var)
            }
            Expr::Elementary(_, x) => x.free_of(var),
            Expr::Pow(b, e) => b.free_of(var) && e.free_of(var),
            Expr::Mul(xs) | Expr::Add(xs) => xs.iter().all(|x| x.free_of(var)),
        }
    }

    /// 数值系数（乘积的首因子，否则为 1）
    pub fn coefficient(&self) -> Rational {
        match self {
            Expr::Num(r) => *r,
            Expr::Mul(fs) => fs.first().and_then(Expr::as_num).unwrap_or(Rational::ONE),
            _ => Rational::ONE,
        }
    }

    /// 拆分为 (系数, 分子因子, 分母因子)，分母因子的指数已取正
    pub(crate) fn numer_denom(&self) -> (Rational, Vec<Expr>, Vec<Expr>) {
        let factors: Vec<Expr> = match self {
            Expr::Mul(fs) => fs.clone(),
            other => vec![other.clone()],
        };
        let mut coeff = Rational::ONE;
        let mut numer = Vec::new();
        let mut denom = Vec::new();
        for f in factors {
            match f {
                Expr::Num(r) => coeff = coeff * r,
                Expr::Pow(b, e) if e.coefficient().is_negative() => {
                    // 不经过 pow，避免分母中的和式被展开
                    let e = Expr::neg(*e);
                    denom.push(if e.is_one() { *b } else { Expr::Pow(b, Box::new(e)) });
                }
                other => numer.push(other),
            }
        }
        (coeff, numer, denom)
    }

    // ─────────────────────────────────────────────────────────────
    // 内部辅助
    // ─────────────────────────────────────────────────────────────

    fn into_terms(self) -> impl Iterator<Item = Expr> {
        match self {
            Expr::Add(ts) => ts.into_iter(),
            other => vec![other].into_iter(),
        }
    }

    fn into_factors(self) -> impl Iterator<Item = Expr> {
        match self {
            Expr::Mul(fs) => fs.into_iter(),
            other => vec![other].into_iter(),
        }
    }

    fn into_coefficient(self) -> (Rational, Expr) {
        match self {
            Expr::Mul(mut fs) => {
                let lead = fs.first().and_then(Expr::as_num);
                match lead {
                    Some(c) if fs.len() > 1 => {
                        fs.remove(0);
                        let rest = if fs.len() == 1 {
                            fs.remove(0)
                        } else {
                            Expr::Mul(fs)
                        };
                        (c, rest)
                    }
                    _ => (Rational::ONE, Expr::Mul(fs)),
                }
            }
            other => (Rational::ONE, other),
        }
    }

    fn into_base_exp(self) -> (Expr, Expr) {
        match self {
            Expr::Pow(b, e) => (*b, *e),
            other => (other, Expr::one()),
        }
    }

    /// 系数乘以非数值的规范项，结果仍为规范形式
    fn scale(coeff: Rational, rest: Expr) -> Expr {
        if coeff.is_one() {
            return rest;
        }
        let mut fs = vec![Expr::Num(coeff)];
        fs.extend(rest.into_factors());
        Expr::Mul(fs)
    }
}

// ─────────────────────────────────────────────────────────────
// 运算符重载
// ─────────────────────────────────────────────────────────────

impl ops::Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::add(vec![self, rhs])
    }
}

impl ops::Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::sub(self, rhs)
    }
}

impl ops::Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::mul(vec![self, rhs])
    }
}

impl ops::Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        Expr::div(self, rhs)
    }
}

impl ops::Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::neg(self)
    }
}

// ─────────────────────────────────────────────────────────────
// 纯文本输出
// ─────────────────────────────────────────────────────────────

/// 正项在前的稳定排序，仅用于输出
pub(crate) fn display_order(terms: &[Expr]) -> Vec<&Expr> {
    let (pos, neg): (Vec<&Expr>, Vec<&Expr>) =
        terms.iter().partition(|t| !t.coefficient().is_negative());
    pos.into_iter().chain(neg).collect()
}

fn fmt_factor(f: &Expr) -> String {
    match f {
        Expr::Add(_) => format!("({})", f),
        _ => f.to_string(),
    }
}

fn fmt_product(coeff: Rational, factors: &[Expr]) -> String {
    let body: Vec<String> = factors.iter().map(fmt_factor).collect();
    let body = body.join("*");
    match (coeff.is_one(), body.is_empty()) {
        (_, true) => coeff.to_string(),
        (true, false) => body,
        (false, false) if coeff == -Rational::ONE => format!("-{}", body),
        (false, false) => format!("{}*{}", coeff, body),
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(r) => write!(f, "{}", r),
            Expr::Symbol(s) => write!(f, "{}", s),
            Expr::Function { name, args } => write!(f, "{}({})", name, args.join(", ")),
            Expr::Derivative { name, args, orders } => {
                write!(f, "Derivative({}({})", name, args.join(", "))?;
                for (var, n) in orders {
                    if *n == 1 {
                        write!(f, ", {}", var)?;
                    } else {
                        write!(f, ", ({}, {})", var, n)?;
                    }
                }
                write!(f, ")")
            }
            Expr::Elementary(kind, x) => write!(f, "{}({})", kind.name(), x),
            Expr::Pow(b, e) => {
                let base = match b.as_ref() {
                    Expr::Symbol(_) | Expr::Function { .. } | Expr::Elementary(..) => b.to_string(),
                    Expr::Num(r) if r.is_integer() && !r.is_negative() => b.to_string(),
                    _ => format!("({})", b),
                };
                let exp = match e.as_num() {
                    Some(r) if r.is_integer() && !r.is_negative() => r.to_string(),
                    _ => format!("({})", e),
                };
                write!(f, "{}**{}", base, exp)
            }
            Expr::Mul(_) => {
                let (coeff, numer, denom) = self.numer_denom();
                if denom.is_empty() && coeff.is_integer() {
                    return write!(f, "{}", fmt_product(coeff, &numer));
                }
                let top = fmt_product(Rational::integer(coeff.numer()), &numer);
                let mut bottom: Vec<String> = Vec::new();
                if coeff.denom() != 1 {
                    bottom.push(coeff.denom().to_string());
                }
                bottom.extend(denom.iter().map(fmt_factor));
                if bottom.len() == 1 {
                    write!(f, "{}/{}", top, bottom[0])
                } else {
                    write!(f, "{}/({})", top, bottom.join("*"))
                }
            }
            Expr::Add(terms) => {
                for (i, term) in display_order(terms).into_iter().enumerate() {
                    let negative = term.coefficient().is_negative();
                    if i == 0 {
                        write!(f, "{}", term)?;
                    } else if negative {
                        write!(f, " - {}", Expr::neg(term.clone()))?;
                    } else {
                        write!(f, " + {}", term)?;
                    }
                }
                Ok(())
            }
        }
    }
}
