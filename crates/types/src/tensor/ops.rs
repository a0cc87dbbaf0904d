/// 同型テンソル間の成分ごとの算術演算を提供する。
///
/// `Vector` と `Tensor` はどちらも固定長配列の薄いラッパーなので、
/// 演算子実装はマクロで一括生成する。
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::types::{Tensor, Vector};

macro_rules! componentwise_ops {
    ($ty:ident, $n:literal) => {
        impl Add for $ty {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                let (a, b) = (self.as_array(), rhs.as_array());
                let out: [f64; $n] = std::array::from_fn(|i| a[i] + b[i]);
                $ty::from(out)
            }
        }

        impl Sub for $ty {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                let (a, b) = (self.as_array(), rhs.as_array());
                let out: [f64; $n] = std::array::from_fn(|i| a[i] - b[i]);
                $ty::from(out)
            }
        }

        impl Neg for $ty {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                self * -1.0
            }
        }

        impl Mul<f64> for $ty {
            type Output = Self;

            /// スカラー倍（右）。全成分に `s` を乗じる。
            #[inline]
            fn mul(self, s: f64) -> Self {
                let a = self.as_array();
                let out: [f64; $n] = std::array::from_fn(|i| a[i] * s);
                $ty::from(out)
            }
        }

        impl Mul<$ty> for f64 {
            type Output = $ty;

            /// スカラー倍（左）。右スカラー倍に委譲する。
            #[inline]
            fn mul(self, v: $ty) -> $ty {
                v * self
            }
        }

        impl Div<f64> for $ty {
            type Output = Self;

            #[inline]
            fn div(self, s: f64) -> Self {
                let a = self.as_array();
                let out: [f64; $n] = std::array::from_fn(|i| a[i] / s);
                $ty::from(out)
            }
        }

        impl AddAssign for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl SubAssign for $ty {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl MulAssign<f64> for $ty {
            #[inline]
            fn mul_assign(&mut self, s: f64) {
                *self = *self * s;
            }
        }

        impl DivAssign<f64> for $ty {
            #[inline]
            fn div_assign(&mut self, s: f64) {
                *self = *self / s;
            }
        }
    };
}

componentwise_ops!(Vector, 3);
componentwise_ops!(Tensor, 9);
