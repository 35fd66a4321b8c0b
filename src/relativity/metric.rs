//! # 度规张量
//!
//! 协变分量 g_{μν} 及坐标符号。逆度规 g^{μν} 在构造时以伴随矩阵除以行列式求得。
//!
//! ## 依赖关系
//! - 被 `relativity/christoffel.rs`, `relativity/ricci.rs`, `relativity/einstein.rs` 使用
//! - 使用 `relativity/components.rs`, `symbolic/`

use crate::error::{EinsteinTexError, Result};
use crate::relativity::components::Components;
use crate::symbolic::Expr;

/// 度规张量
#[derive(Debug, Clone)]
pub struct MetricTensor {
    coords: Vec<String>,
    components: Components,
    inverse: Components,
}

impl MetricTensor {
    /// 由方阵和坐标名创建度规
    pub fn new(rows: Vec<Vec<Expr>>, coords: &[&str]) -> Result<Self> {
        let dim = coords.len();
        if rows.len() != dim {
            return Err(EinsteinTexError::DimensionMismatch {
                expected: dim,
                found: rows.len(),
            });
        }
        if let Some(bad) = rows.iter().find(|r| r.len() != dim) {
            return Err(EinsteinTexError::DimensionMismatch {
                expected: dim,
                found: bad.len(),
            });
        }

        let det = determinant(&rows);
        if det.is_zero() {
            return Err(EinsteinTexError::SingularMetric);
        }
        let det_inv = Expr::pow(det, Expr::int(-1));

        // g^{ij} = C_{ji} / det g
        let inverse = Components::from_fn(dim, 2, |idx| {
            let (i, j) = (idx[0], idx[1]);
            let sign = if (i + j) % 2 == 0 { 1 } else { -1 };
            let cofactor = determinant(&minor(&rows, j, i));
            Expr::mul(vec![Expr::int(sign), cofactor, det_inv.clone()])
        });
        let components = Components::from_fn(dim, 2, |idx| rows[idx[0]][idx[1]].clone());

        Ok(Self {
            coords: coords.iter().map(|c| c.to_string()).collect(),
            components,
            inverse,
        })
    }

    pub fn dim(&self) -> usize {
        self.coords.len()
    }

    pub fn coords(&self) -> &[String] {
        &self.coords
    }

    /// 协变分量 g_{ij}
    pub fn component(&self, i: usize, j: usize) -> &Expr {
        self.components.get(&[i, j])
    }

    /// 逆变分量 g^{ij}
    pub fn inverse_component(&self, i: usize, j: usize) -> &Expr {
        self.inverse.get(&[i, j])
    }

    pub fn components(&self) -> &Components {
        &self.components
    }
}

/// 删去第 row 行第 col 列后的子矩阵
fn minor(m: &[Vec<Expr>], row: usize, col: usize) -> Vec<Vec<Expr>> {
    m.iter()
        .enumerate()
        .filter(|(i, _)| *i != row)
        .map(|(_, r)| {
            r.iter()
                .enumerate()
                .filter(|(j, _)| *j != col)
                .map(|(_, e)| e.clone())
                .collect()
        })
        .collect()
}

/// 按第一行 Laplace 展开求行列式，跳过零元
fn determinant(m: &[Vec<Expr>]) -> Expr {
    match m.len() {
        0 => Expr::one(),
        1 => m[0][0].clone(),
        n => {
            let terms = (0..n)
                .filter(|&j| !m[0][j].is_zero())
                .map(|j| {
                    let sign = if j % 2 == 0 { 1 } else { -1 };
                    Expr::mul(vec![
                        Expr::int(sign),
                        m[0][j].clone(),
                        determinant(&minor(m, 0, j)),
                    ])
                })
                .collect();
            Expr::add(terms)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_inverse() {
        let a = Expr::function("a", &["t"]);
        let a2 = Expr::pow(a.clone(), Expr::int(2));
        let metric = MetricTensor::new(
            vec![
                vec![Expr::int(-1), Expr::zero()],
                vec![Expr::zero(), a2],
            ],
            &["t", "x"],
        )
        .unwrap();

        assert_eq!(metric.inverse_component(0, 0), &Expr::int(-1));
        assert_eq!(metric.inverse_component(1, 1), &Expr::pow(a, Expr::int(-2)));
        assert!(metric.inverse_component(0, 1).is_zero());
    }

    #[test]
    fn test_off_diagonal_inverse() {
        // [[0, 1], [1, 0]] 的逆为自身
        let metric = MetricTensor::new(
            vec![
                vec![Expr::zero(), Expr::one()],
                vec![Expr::one(), Expr::zero()],
            ],
            &["u", "v"],
        )
        .unwrap();

        assert!(metric.inverse_component(0, 1).is_one());
        assert!(metric.inverse_component(1, 0).is_one());
        assert!(metric.inverse_component(0, 0).is_zero());
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = MetricTensor::new(vec![vec![Expr::one()]], &["t", "x"]).unwrap_err();
        assert!(matches!(
            err,
            EinsteinTexError::DimensionMismatch {
                expected: 2,
                found: 1
            }
        ));

        let err = MetricTensor::new(
            vec![vec![Expr::one(), Expr::zero()], vec![Expr::one()]],
            &["t", "x"],
        )
        .unwrap_err();
        assert!(matches!(err, EinsteinTexError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_singular_metric() {
        let err = MetricTensor::new(
            vec![
                vec![Expr::one(), Expr::one()],
                vec![Expr::one(), Expr::one()],
            ],
            &["t", "x"],
        )
        .unwrap_err();
        assert!(matches!(err, EinsteinTexError::SingularMetric));
    }
}
