//! # Ricci 张量与 Ricci 标量
//!
//! - Ricci 张量：缩并 Riemann 张量的第一、三指标，R_{bd} = R^a_{bad}
//! - Ricci 标量：R = g^{ij} R_{ij}
//!
//! ## 依赖关系
//! - 被 `relativity/einstein.rs` 使用
//! - 使用 `relativity/riemann.rs`, `relativity/metric.rs`

use crate::relativity::components::Components;
use crate::relativity::metric::MetricTensor;
use crate::relativity::riemann::RiemannCurvatureTensor;
use crate::symbolic::Expr;

/// Ricci 张量
#[derive(Debug, Clone)]
pub struct RicciTensor {
    components: Components,
    metric: MetricTensor,
}

impl RicciTensor {
    /// 由 Riemann 张量缩并
    pub fn from_riemann(riemann: &RiemannCurvatureTensor) -> Self {
        let metric = riemann.metric();
        let n = metric.dim();

        let components = Components::from_fn(n, 2, |idx| {
            let (b, d) = (idx[0], idx[1]);
            Expr::add((0..n).map(|a| riemann.component(a, b, a, d).clone()).collect())
        });

        Self {
            components,
            metric: metric.clone(),
        }
    }

    /// R_{ij}
    pub fn component(&self, i: usize, j: usize) -> &Expr {
        self.components.get(&[i, j])
    }

    pub fn components(&self) -> &Components {
        &self.components
    }

    pub fn metric(&self) -> &MetricTensor {
        &self.metric
    }
}

/// Ricci 标量
#[derive(Debug, Clone)]
pub struct RicciScalar {
    expr: Expr,
}

impl RicciScalar {
    /// 用逆度规缩并 Ricci 张量
    pub fn from_ricci_tensor(ricci: &RicciTensor) -> Self {
        let metric = ricci.metric();
        let n = metric.dim();

        let mut terms = Vec::new();
        for i in 0..n {
            for j in 0..n {
                let g_inv = metric.inverse_component(i, j);
                if g_inv.is_zero() {
                    continue;
                }
                terms.push(Expr::mul(vec![g_inv.clone(), ricci.component(i, j).clone()]));
            }
        }

        Self {
            expr: Expr::add(terms),
        }
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }
}
