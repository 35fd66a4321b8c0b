//! # 张量分量存储
//!
//! 固定维度、任意阶的稠密分量数组，按行主序存放。
//!
//! ## 依赖关系
//! - 被 `relativity/` 下所有张量类型使用
//! - 使用 `symbolic/expr.rs`

use crate::symbolic::Expr;

/// 稠密分量数组
#[derive(Debug, Clone, PartialEq)]
pub struct Components {
    dim: usize,
    rank: usize,
    data: Vec<Expr>,
}

impl Components {
    /// 按行主序遍历所有多重指标，由 f 生成各分量
    pub fn from_fn<F>(dim: usize, rank: usize, mut f: F) -> Self
    where
        F: FnMut(&[usize]) -> Expr,
    {
        let data = multi_indices(dim, rank).map(|idx| f(&idx)).collect();
        Self { dim, rank, data }
    }

    /// 取分量，指标个数必须等于阶数
    pub fn get(&self, idx: &[usize]) -> &Expr {
        debug_assert_eq!(idx.len(), self.rank);
        let offset = idx.iter().fold(0, |acc, &i| acc * self.dim + i);
        &self.data[offset]
    }

    /// 按行主序遍历 (指标, 分量)
    pub fn iter(&self) -> impl Iterator<Item = (Vec<usize>, &Expr)> {
        multi_indices(self.dim, self.rank).zip(self.data.iter())
    }

    /// 非零分量个数
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|e| !e.is_zero()).count()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// 二阶张量按行展开
    pub fn rows(&self) -> Vec<Vec<Expr>> {
        debug_assert_eq!(self.rank, 2);
        self.data.chunks(self.dim.max(1)).map(|r| r.to_vec()).collect()
    }
}

/// 行主序的多重指标迭代器
fn multi_indices(dim: usize, rank: usize) -> impl Iterator<Item = Vec<usize>> {
    let total = dim.pow(rank as u32);
    (0..total).map(move |mut flat| {
        let mut idx = vec![0; rank];
        for slot in idx.iter_mut().rev() {
            *slot = flat % dim;
            flat /= dim;
        }
        idx
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_layout() {
        let c = Components::from_fn(2, 3, |idx| {
            Expr::int((idx[0] * 100 + idx[1] * 10 + idx[2]) as i64)
        });
        assert_eq!(c.len(), 8);
        assert_eq!(c.get(&[1, 0, 1]), &Expr::int(101));

        let order: Vec<Vec<usize>> = c.iter().map(|(idx, _)| idx).collect();
        assert_eq!(order[0], vec![0, 0, 0]);
        assert_eq!(order[1], vec![0, 0, 1]);
        assert_eq!(order[7], vec![1, 1, 1]);
    }

    #[test]
    fn test_count_nonzero_and_rows() {
        let c = Components::from_fn(3, 2, |idx| {
            if idx[0] == idx[1] {
                Expr::one()
            } else {
                Expr::zero()
            }
        });
        assert_eq!(c.count_nonzero(), 3);
        let rows = c.rows();
        assert_eq!(rows.len(), 3);
        assert!(rows[1][1].is_one());
        assert!(rows[1][0].is_zero());
    }
}
