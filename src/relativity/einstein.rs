//! # Einstein 张量
//!
//! G_{ij} = R_{ij} − ½ R g_{ij}
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `relativity/ricci.rs`, `relativity/metric.rs`

use crate::relativity::christoffel::ChristoffelSymbols;
use crate::relativity::components::Components;
use crate::relativity::metric::MetricTensor;
use crate::relativity::ricci::{RicciScalar, RicciTensor};
use crate::relativity::riemann::RiemannCurvatureTensor;
use crate::symbolic::Expr;

/// Einstein 张量
#[derive(Debug, Clone)]
pub struct EinsteinTensor {
    components: Components,
}

impl EinsteinTensor {
    /// 由度规重新走完整条计算链
    pub fn from_metric(metric: &MetricTensor) -> Self {
        let christoffel = ChristoffelSymbols::from_metric(metric);
        let riemann = RiemannCurvatureTensor::from_christoffels(&christoffel);
        let ricci = RicciTensor::from_riemann(&riemann);
        let scalar = RicciScalar::from_ricci_tensor(&ricci);
        Self::from_ricci(&ricci, &scalar)
    }

    /// 由已算得的 Ricci 张量和 Ricci 标量计算
    pub fn from_ricci(ricci: &RicciTensor, scalar: &RicciScalar) -> Self {
        let metric = ricci.metric();
        let half_r = Expr::mul(vec![
            Expr::rational(1, 2).unwrap_or_else(Expr::one),
            scalar.expr().clone(),
        ]);

        let components = Components::from_fn(metric.dim(), 2, |idx| {
            let (i, j) = (idx[0], idx[1]);
            Expr::sub(
                ricci.component(i, j).clone(),
                Expr::mul(vec![half_r.clone(), metric.component(i, j).clone()]),
            )
        });

        Self { components }
    }

    /// G_{ij}
    pub fn component(&self, i: usize, j: usize) -> &Expr {
        self.components.get(&[i, j])
    }

    pub fn components(&self) -> &Components {
        &self.components
    }
}
