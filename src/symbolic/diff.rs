//! # 符号求导
//!
//! 对规范表达式求偏导数，使用加法、乘积、幂和链式法则。
//! 未定义函数的导数保留为 `Expr::Derivative` 节点，重复求导时累加各变量的阶数。
//!
//! ## 依赖关系
//! - 被 `relativity/` 使用
//! - 使用 `symbolic/expr.rs`

use crate::symbolic::expr::{Elementary, Expr};

impl Expr {
    /// 对变量 var 求偏导
    pub fn diff(&self, var: &str) -> Expr {
        if self.free_of(var) {
            return Expr::zero();
        }

        match self {
            Expr::Num(_) => Expr::zero(),
            Expr::Symbol(_) => Expr::one(),
            Expr::Function { name, args } => Expr::Derivative {
                name: name.clone(),
                args: args.clone(),
                orders: vec![(var.to_string(), 1)],
            },
            Expr::Derivative { name, args, orders } => Expr::Derivative {
                name: name.clone(),
                args: args.clone(),
                orders: bump_order(args, orders, var),
            },
            Expr::Elementary(kind, u) => {
                let outer = match kind {
                    Elementary::Sin => Expr::cos((**u).clone()),
                    Elementary::Cos => Expr::neg(Expr::sin((**u).clone())),
                    Elementary::Exp => self.clone(),
                    Elementary::Log => Expr::pow((**u).clone(), Expr::int(-1)),
                };
                Expr::mul(vec![outer, u.diff(var)])
            }
            Expr::Pow(b, e) => {
                let (b, e) = (b.as_ref(), e.as_ref());
                if e.free_of(var) {
                    // d(b^e) = e * b^(e-1) * db
                    Expr::mul(vec![
                        e.clone(),
                        Expr::pow(b.clone(), Expr::sub(e.clone(), Expr::one())),
                        b.diff(var),
                    ])
                } else {
                    // d(b^e) = b^e * (de * ln b + e * db / b)
                    Expr::mul(vec![
                        self.clone(),
                        Expr::add(vec![
                            Expr::mul(vec![e.diff(var), Expr::log(b.clone())]),
                            Expr::mul(vec![
                                e.clone(),
                                b.diff(var),
                                Expr::pow(b.clone(), Expr::int(-1)),
                            ]),
                        ]),
                    ])
                }
            }
            Expr::Mul(factors) => {
                let terms = (0..factors.len())
                    .map(|i| {
                        let mut product = factors.clone();
                        product[i] = factors[i].diff(var);
                        Expr::mul(product)
                    })
                    .collect();
                Expr::add(terms)
            }
            Expr::Add(terms) => Expr::add(terms.iter().map(|t| t.diff(var)).collect()),
        }
    }
}

/// 对 var 的阶数加一，并按函数参数顺序排列
fn bump_order(args: &[String], orders: &[(String, u32)], var: &str) -> Vec<(String, u32)> {
    let mut bumped = orders.to_vec();
    match bumped.iter_mut().find(|(v, _)| v == var) {
        Some((_, n)) => *n += 1,
        None => bumped.push((var.to_string(), 1)),
    }
    bumped.sort_by_key(|(v, _)| args.iter().position(|a| a == v));
    bumped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a() -> Expr {
        Expr::function("a", &["t"])
    }

    fn a_dot() -> Expr {
        a().diff("t")
    }

    #[test]
    fn test_symbol_and_constant() {
        let x = Expr::symbol("x");
        assert!(x.diff("x").is_one());
        assert!(x.diff("y").is_zero());
        assert!(Expr::int(5).diff("x").is_zero());
    }

    #[test]
    fn test_function_derivative_orders() {
        let second = a().diff("t").diff("t");
        match second {
            Expr::Derivative { ref orders, .. } => assert_eq!(orders, &vec![("t".to_string(), 2)]),
            ref other => panic!("expected derivative, got {:?}", other),
        }
        assert!(a().diff("r").is_zero());
    }

    #[test]
    fn test_mixed_partial_order_follows_arguments() {
        let f = Expr::function("f", &["t", "r"]);
        let d = f.diff("r").diff("t");
        match d {
            Expr::Derivative { orders, .. } => assert_eq!(
                orders,
                vec![("t".to_string(), 1), ("r".to_string(), 1)]
            ),
            other => panic!("expected derivative, got {:?}", other),
        }
        assert_eq!(f.diff("r").diff("t"), f.diff("t").diff("r"));
    }

    #[test]
    fn test_power_rule() {
        // d(a^2)/dt = 2 a a'
        let d = Expr::pow(a(), Expr::int(2)).diff("t");
        assert_eq!(d, Expr::int(2) * a() * a_dot());

        // d(a^-1)/dt = -a'/a^2
        let d = Expr::pow(a(), Expr::int(-1)).diff("t");
        assert_eq!(d, -(a_dot() / Expr::pow(a(), Expr::int(2))));
    }

    #[test]
    fn test_product_rule() {
        let d = (a() * a_dot()).diff("t");
        let expected = Expr::pow(a_dot(), Expr::int(2)) + a() * a_dot().diff("t");
        assert_eq!(d, expected);
    }

    #[test]
    fn test_elementary_chain_rule() {
        let x = Expr::symbol("x");
        let d = Expr::sin(Expr::int(2) * x.clone()).diff("x");
        assert_eq!(d, Expr::int(2) * Expr::cos(Expr::int(2) * x.clone()));

        let d = Expr::log(x.clone()).diff("x");
        assert_eq!(d, Expr::pow(x, Expr::int(-1)));
    }

    #[test]
    fn test_variable_exponent() {
        // d(x^x)/dx = x^x (ln x + 1)
        let x = Expr::symbol("x");
        let xx = Expr::pow(x.clone(), x.clone());
        let expected = xx.clone() * (Expr::log(x) + Expr::one());
        assert_eq!(xx.diff("x"), expected);
    }
}
