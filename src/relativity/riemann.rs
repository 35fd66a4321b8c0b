//! # Riemann 曲率张量
//!
//! R^t_{srn}，第一个指标为上指标：
//!
//! ```text
//! R^t_{srn} = ∂_r Γ^t_{sn} − ∂_n Γ^t_{sr} + Γ^p_{sn} Γ^t_{pr} − Γ^p_{sr} Γ^t_{pn}
//! ```
//!
//! ## 依赖关系
//! - 被 `relativity/ricci.rs` 使用
//! - 使用 `relativity/christoffel.rs`

use crate::relativity::christoffel::ChristoffelSymbols;
use crate::relativity::components::Components;
use crate::relativity::metric::MetricTensor;
use crate::symbolic::Expr;

/// Riemann 曲率张量
#[derive(Debug, Clone)]
pub struct RiemannCurvatureTensor {
    components: Components,
    metric: MetricTensor,
}

impl RiemannCurvatureTensor {
    /// 由 Christoffel 符号计算
    pub fn from_christoffels(christoffel: &ChristoffelSymbols) -> Self {
        let metric = christoffel.metric();
        let n = metric.dim();
        let coords = metric.coords();
        let gamma = |i: usize, j: usize, k: usize| christoffel.component(i, j, k);

        let components = Components::from_fn(n, 4, |idx| {
            let (t, s, r, m) = (idx[0], idx[1], idx[2], idx[3]);
            let mut terms = vec![
                gamma(t, s, m).diff(&coords[r]),
                Expr::neg(gamma(t, s, r).diff(&coords[m])),
            ];
            for p in 0..n {
                terms.push(Expr::mul(vec![
                    gamma(p, s, m).clone(),
                    gamma(t, p, r).clone(),
                ]));
                terms.push(Expr::neg(Expr::mul(vec![
                    gamma(p, s, r).clone(),
                    gamma(t, p, m).clone(),
                ])));
            }
            Expr::add(terms)
        });

        Self {
            components,
            metric: metric.clone(),
        }
    }

    /// R^a_{bcd}
    pub fn component(&self, a: usize, b: usize, c: usize, d: usize) -> &Expr {
        self.components.get(&[a, b, c, d])
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
    fn test_flrw_riemann() {
        let metric = flrw_metric().unwrap();
        let riemann =
            RiemannCurvatureTensor::from_christoffels(&ChristoffelSymbols::from_metric(&metric));

        let a = Expr::function("a", &["t"]);
        let a_ddot = a.diff("t").diff("t");

        // R^0_{101} = a ä，反对称 R^0_{110} = −a ä
        assert_eq!(riemann.component(0, 1, 0, 1), &(a.clone() * a_ddot.clone()));
        assert_eq!(riemann.component(0, 1, 1, 0), &(-(a * a_ddot)));
        assert!(riemann.component(0, 0, 0, 0).is_zero());
    }

    #[test]
    fn test_antisymmetric_in_last_pair() {
        let metric = flrw_metric().unwrap();
        let riemann =
            RiemannCurvatureTensor::from_christoffels(&ChristoffelSymbols::from_metric(&metric));

        for (idx, value) in riemann.components().iter() {
            let swapped = riemann.component(idx[0], idx[1], idx[3], idx[2]);
            assert!((value.clone() + swapped.clone()).is_zero(), "{:?}", idx);
        }
    }

    #[test]
    fn test_minkowski_is_flat() {
        let metric = MetricTensor::new(
            vec![
                vec![Expr::int(-1), Expr::zero(), Expr::zero()],
                vec![Expr::zero(), Expr::one(), Expr::zero()],
                vec![Expr::zero(), Expr::zero(), Expr::one()],
            ],
            &["t", "x", "y"],
        )
        .unwrap();
        let riemann =
            RiemannCurvatureTensor::from_christoffels(&ChristoffelSymbols::from_metric(&metric));
        assert_eq!(riemann.components().count_nonzero(), 0);
    }

    #[test]
    fn test_polar_plane_is_flat() {
        let r = Expr::symbol("r");
        let metric = MetricTensor::new(
            vec![
                vec![Expr::one(), Expr::zero()],
                vec![Expr::zero(), Expr::pow(r, Expr::int(2))],
            ],
            &["r", "phi"],
        )
        .unwrap();
        let riemann =
            RiemannCurvatureTensor::from_christoffels(&ChristoffelSymbols::from_metric(&metric));
        assert_eq!(riemann.components().count_nonzero(), 0);
    }
}
