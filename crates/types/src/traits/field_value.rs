use std::ops::{Add, Mul, Neg, Sub};

use typenum::{U0, U1, U2, Unsigned};

use crate::tensor::{Tensor, Vector};

/// フィールド値として使用可能な型の共通インターフェース。
///
/// スーパートレイトバウンドとして加算・減算・スカラー倍・符号反転を要求し、
/// 零元（加法単位元）、ノルム（Euclidean / Frobenius）、全縮約内積を定義する。
/// テンソルランクは関連型 `Rank`（`typenum` の型レベル整数）で静的に固定する。
pub trait FieldValue:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f64, Output = Self> + Neg<Output = Self>
{
    /// テンソルランク（0: スカラー, 1: ベクトル, 2: テンソル）。
    type Rank: Unsigned;

    /// `Rank` の実行時値。
    const RANK: usize = <Self::Rank as Unsigned>::USIZE;

    /// 加法単位元を返す。`Self::zero() + x == x` をすべての `x` について保証する。
    fn zero() -> Self;

    /// 全添字を縮約した内積。`x.inner(&x) >= 0` を保証する。
    fn inner(&self, other: &Self) -> f64;

    /// Euclidean ノルム（ベクトル）または Frobenius ノルム（テンソル）を返す。
    fn mag(&self) -> f64 {
        self.inner(self).sqrt()
    }
}

impl FieldValue for f64 {
    type Rank = U0;

    fn zero() -> Self {
        0.0_f64
    }

    fn inner(&self, other: &Self) -> f64 {
        self * other
    }

    fn mag(&self) -> f64 {
        self.abs()
    }
}

impl FieldValue for Vector {
    type Rank = U1;

    fn zero() -> Self {
        Vector::new(0.0, 0.0, 0.0)
    }

    fn inner(&self, other: &Self) -> f64 {
        self.dot(other)
    }
}

impl FieldValue for Tensor {
    type Rank = U2;

    fn zero() -> Self {
        Tensor::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    fn inner(&self, other: &Self) -> f64 {
        self.double_dot(other)
    }
}
