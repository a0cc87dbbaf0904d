/// 異なるテンソルランク間の積（内積・外積・縮約）を提供する。
use std::ops::Mul;

use super::types::{Tensor, Vector};

impl Mul<Vector> for Vector {
    type Output = f64;

    /// 内積 `a · b`。
    #[inline]
    fn mul(self, rhs: Vector) -> f64 {
        self.dot(&rhs)
    }
}

impl Mul<Vector> for Tensor {
    type Output = Vector;

    /// 右からの縮約 `(T · v)_i = Σ_j T_ij v_j`。
    #[inline]
    fn mul(self, v: Vector) -> Vector {
        Vector::new(self.row(0).dot(&v), self.row(1).dot(&v), self.row(2).dot(&v))
    }
}

impl Vector {
    #[inline]
    pub fn dot(&self, other: &Vector) -> f64 {
        let (a, b) = (self.as_array(), other.as_array());
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    /// 外積 `(a ⊗ b)_ij = a_i b_j`。
    #[inline]
    pub fn outer(&self, other: &Vector) -> Tensor {
        Tensor::from_rows([
            *other * self.x(),
            *other * self.y(),
            *other * self.z(),
        ])
    }

    /// クロス積 `a × b`。
    #[inline]
    pub fn cross(&self, other: &Vector) -> Vector {
        Vector::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }
}

impl Tensor {
    /// 二重縮約 `A : B = Σ_ij A_ij B_ij`。
    #[inline]
    pub fn double_dot(&self, other: &Tensor) -> f64 {
        self.as_array()
            .iter()
            .zip(other.as_array())
            .map(|(a, b)| a * b)
            .sum()
    }
}
