//! # 有理数
//!
//! 符号引擎中的精确数值系数。始终保持约分形式，分母为正。
//!
//! ## 依赖关系
//! - 被 `symbolic/expr.rs` 使用

use std::fmt;
use std::ops::{Add, Mul, Neg};

/// 约分后的有理数 num/den (den > 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rational {
    num: i64,
    den: i64,
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    a = a.abs();
    b = b.abs();
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl Rational {
    pub const ZERO: Rational = Rational { num: 0, den: 1 };
    pub const ONE: Rational = Rational { num: 1, den: 1 };

    /// 创建有理数，分母为零时返回 None
    pub fn new(num: i64, den: i64) -> Option<Self> {
        if den == 0 {
            return None;
        }
        let g = gcd(num, den).max(1);
        let sign = if den < 0 { -1 } else { 1 };
        Some(Self {
            num: sign * num / g,
            den: sign * den / g,
        })
    }

    pub fn integer(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    pub fn numer(&self) -> i64 {
        self.num
    }

    pub fn denom(&self) -> i64 {
        self.den
    }

    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    pub fn is_one(&self) -> bool {
        self.num == 1 && self.den == 1
    }

    pub fn is_integer(&self) -> bool {
        self.den == 1
    }

    pub fn is_negative(&self) -> bool {
        self.num < 0
    }

    pub fn abs(&self) -> Self {
        Self {
            num: self.num.abs(),
            den: self.den,
        }
    }

    /// 倒数，零没有倒数
    pub fn recip(&self) -> Option<Self> {
        Self::new(self.den, self.num)
    }

    /// 整数次幂
    pub fn powi(&self, exp: i64) -> Option<Self> {
        let base = if exp < 0 { self.recip()? } else { *self };
        let mut result = Self::ONE;
        for _ in 0..exp.unsigned_abs() {
            result = result * base;
        }
        Some(result)
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        let g = gcd(self.den, rhs.den).max(1);
        let den = self.den / g * rhs.den;
        let num = self.num * (rhs.den / g) + rhs.num * (self.den / g);
        // 分母恒为正
        Rational::new(num, den).unwrap_or(Rational::ZERO)
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        let g1 = gcd(self.num, rhs.den).max(1);
        let g2 = gcd(rhs.num, self.den).max(1);
        Rational {
            num: (self.num / g1) * (rhs.num / g2),
            den: (self.den / g2) * (rhs.den / g1),
        }
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            num: -self.num,
            den: self.den,
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}
