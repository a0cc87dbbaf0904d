//! 実行時にランクが決まるフィールド値。
//!
//! 静的な [`FieldValue`] 実装型を 1 つの列挙型にまとめ、
//! 記号式の評価結果のようにランクが式の形から決まる値を扱う。

use crate::tensor::{Tensor, Vector};
use crate::traits::FieldValue;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Scalar(f64),
    Vector(Vector),
    Tensor(Tensor),
}

impl Value {
    /// 表現可能な最大テンソルランク。
    pub const MAX_RANK: usize = 2;

    pub fn rank(&self) -> usize {
        match self {
            Value::Scalar(_) => <f64 as FieldValue>::RANK,
            Value::Vector(_) => <Vector as FieldValue>::RANK,
            Value::Tensor(_) => <Tensor as FieldValue>::RANK,
        }
    }

    /// 指定ランクの零元。`rank > MAX_RANK` なら `None`。
    pub fn zero(rank: usize) -> Option<Self> {
        match rank {
            0 => Some(Value::Scalar(f64::zero())),
            1 => Some(Value::Vector(Vector::zero())),
            2 => Some(Value::Tensor(Tensor::zero())),
            _ => None,
        }
    }

    /// 同ランク同士の差。ランクが異なれば `None`。
    pub fn checked_sub(&self, other: &Value) -> Option<Value> {
        match (self, other) {
            (Value::Scalar(a), Value::Scalar(b)) => Some(Value::Scalar(a - b)),
            (Value::Vector(a), Value::Vector(b)) => Some(Value::Vector(*a - *b)),
            (Value::Tensor(a), Value::Tensor(b)) => Some(Value::Tensor(*a - *b)),
            _ => None,
        }
    }

    /// 同ランク同士の全縮約内積。ランクが異なれば `None`。
    pub fn inner(&self, other: &Value) -> Option<f64> {
        match (self, other) {
            (Value::Scalar(a), Value::Scalar(b)) => Some(a.inner(b)),
            (Value::Vector(a), Value::Vector(b)) => Some(a.inner(b)),
            (Value::Tensor(a), Value::Tensor(b)) => Some(a.inner(b)),
            _ => None,
        }
    }

    pub fn scale(&self, s: f64) -> Value {
        match self {
            Value::Scalar(a) => Value::Scalar(a * s),
            Value::Vector(a) => Value::Vector(*a * s),
            Value::Tensor(a) => Value::Tensor(*a * s),
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Value::Scalar(a) => Some(*a),
            _ => None,
        }
    }

    pub fn mag(&self) -> f64 {
        match self {
            Value::Scalar(a) => a.mag(),
            Value::Vector(a) => a.mag(),
            Value::Tensor(a) => a.mag(),
        }
    }
}

impl From<f64> for Value {
    fn from(a: f64) -> Self {
        Value::Scalar(a)
    }
}

impl From<Vector> for Value {
    fn from(a: Vector) -> Self {
        Value::Vector(a)
    }
}

impl From<Tensor> for Value {
    fn from(a: Tensor) -> Self {
        Value::Tensor(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_has_requested_rank() {
        for rank in 0..=Value::MAX_RANK {
            let z = Value::zero(rank).unwrap();
            assert_eq!(z.rank(), rank);
            assert!(z.mag() < 1e-14);
        }
        assert!(Value::zero(3).is_none());
    }

    #[test]
    fn mixed_rank_sub_is_rejected() {
        let a = Value::from(1.0);
        let b = Value::from(Vector::new(1.0, 0.0, 0.0));
        assert!(a.checked_sub(&b).is_none());
        assert!(a.inner(&b).is_none());
    }

    #[test]
    fn vector_inner_and_sub() {
        let a = Value::from(Vector::new(1.0, 2.0, 2.0));
        let b = Value::from(Vector::new(1.0, 0.0, 0.0));
        assert_eq!(a.inner(&a), Some(9.0));
        assert_eq!(
            a.checked_sub(&b),
            Some(Value::Vector(Vector::new(0.0, 2.0, 2.0)))
        );
    }

    #[test]
    fn scale_preserves_rank() {
        let t = Value::from(Tensor::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0));
        let s = t.scale(2.0);
        assert_eq!(s.rank(), 2);
        assert!((s.mag() - 2.0 * 3.0_f64.sqrt()).abs() < 1e-14);
    }
}
