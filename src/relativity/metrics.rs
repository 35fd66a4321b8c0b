//! # 预置度规
//!
//! 目前只有空间平直的 FLRW 度规：
//!
//! ```text
//! ds² = −dt² + a(t)² (dr² + dθ² + dφ²)
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `relativity/metric.rs`

use crate::error::Result;
use crate::relativity::metric::MetricTensor;
use crate::symbolic::Expr;

/// FLRW 度规的坐标
pub const FLRW_COORDS: [&str; 4] = ["t", "r", "theta", "phi"];

/// 构造 FLRW 度规 diag(−1, a², a², a²)
pub fn flrw_metric() -> Result<MetricTensor> {
    let a = Expr::function("a", &["t"]);
    let a2 = Expr::pow(a, Expr::int(2));

    let rows = (0..4)
        .map(|i| {
            (0..4)
                .map(|j| match (i, j) {
                    (0, 0) => Expr::int(-1),
                    (i, j) if i == j => a2.clone(),
                    _ => Expr::zero(),
                })
                .collect()
        })
        .collect();

    MetricTensor::new(rows, &FLRW_COORDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flrw_shape() {
        let metric = flrw_metric().unwrap();
        assert_eq!(metric.dim(), 4);
        assert_eq!(metric.coords()[2], "theta");
        assert_eq!(metric.component(0, 0), &Expr::int(-1));
        assert!(metric.component(1, 2).is_zero());
        assert_eq!(metric.components().count_nonzero(), 4);
    }
}
