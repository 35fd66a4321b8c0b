//! # Christoffel 符号
//!
//! 第二类 Christoffel 符号 Γ^i_{jk}，第一个指标为上指标：
//!
//! ```text
//! Γ^i_{jk} = ½ g^{il} (∂_j g_{lk} + ∂_k g_{lj} − ∂_l g_{jk})
//! ```
//!
//! ## 依赖关系
//! - 被 `relativity/riemann.rs` 使用
//! - 使用 `relativity/metric.rs`

use crate::relativity::components::Components;
use crate::relativity::metric::MetricTensor;
use crate::symbolic::Expr;

/// Christoffel 符号
#[derive(Debug, Clone)]
pub struct ChristoffelSymbols {
    components: Components,
    metric: MetricTensor,
}

impl ChristoffelSymbols {
    /// 由度规计算
    pub fn from_metric(metric: &MetricTensor) -> Self {
        let n = metric.dim();
        let coords = metric.coords();

        // dg[k][i][j] = ∂_k g_{ij}
        let dg = Components::from_fn(n, 3, |idx| {
            metric.component(idx[1], idx[2]).diff(&coords[idx[0]])
        });
        let half = Expr::rational(1, 2).unwrap_or_else(Expr::one);

        let components = Components::from_fn(n, 3, |idx| {
            let (i, j, k) = (idx[0], idx[1], idx[2]);
            let terms = (0..n)
                .filter(|&l| !metric.inverse_component(i, l).is_zero())
                .map(|l| {
                    let bracket = Expr::add(vec![
                        dg.get(&[j, l, k]).clone(),
                        dg.get(&[k, l, j]).clone(),
                        Expr::neg(dg.get(&[l, j, k]).clone()),
                    ]);
                    Expr::mul(vec![
                        half.clone(),
                        metric.inverse_component(i, l).clone(),
                        bracket,
                    ])
                })
                .collect();
            Expr::add(terms)
        });

        Self {
            components,
            metric: metric.clone(),
        }
    }

    /// Γ^i_{jk}
    pub fn component(&self, i: usize, j: usize, k: usize) -> &Expr {
        self.components.get(&[i, j, k])
    }

    pub fn components(&self) -> &Components {
        &self.components
    }

    pub fn metric(&self) -> &MetricTensor {
        &self.metric
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relativity::metrics::flrw_metric;

    #[test]
    fn test_flrw_christoffel() {
        let metric = flrw_metric().unwrap();
        let ch = ChristoffelSymbols::from_metric(&metric);

        let a = Expr::function("a", &["t"]);
        let a_dot = a.diff("t");

        // Γ^0_{11} = a ȧ
        for i in 1..4 {
            assert_eq!(ch.component(0, i, i), &(a.clone() * a_dot.clone()));
        }
        // Γ^1_{01} = Γ^1_{10} = ȧ / a
        let expected = a_dot.clone() / a.clone();
        assert_eq!(ch.component(1, 0, 1), &expected);
        assert_eq!(ch.component(1, 1, 0), &expected);

        assert!(ch.component(0, 0, 0).is_zero());
        assert!(ch.component(1, 2, 3).is_zero());
        assert_eq!(ch.components().count_nonzero(), 9);
    }

    #[test]
    fn test_polar_plane() {
        // ds² = dr² + r² dφ²
        let r = Expr::symbol("r");
        let metric = MetricTensor::new(
            vec![
                vec![Expr::one(), Expr::zero()],
                vec![Expr::zero(), Expr::pow(r.clone(), Expr::int(2))],
            ],
            &["r", "phi"],
        )
        .unwrap();
        let ch = ChristoffelSymbols::from_metric(&metric);

        assert_eq!(ch.component(0, 1, 1), &(-r.clone()));
        assert_eq!(ch.component(1, 0, 1), &Expr::pow(r, Expr::int(-1)));
    }
}
