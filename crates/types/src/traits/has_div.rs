use crate::tensor::{Tensor, Vector};

use super::field_value::FieldValue;

/// 発散演算子の出力型をコンパイル時に決定する trait。
///
/// `T: HasDiv` のとき、`div(T-Field)` の結果は `T::DivOutput-Field` になり、
/// ランクは 1 つ下がる。テンソルの発散は最後の添字で縮約する
/// （`div(T)_i = Σ_j ∂T_ij/∂x_j`）。
///
/// | 入力型   | `DivOutput` |
/// |----------|-------------|
/// | `Vector` | `f64`       |
/// | `Tensor` | `Vector`    |
///
/// `f64` は `HasDiv` を実装しないため、以下はコンパイルエラーになる:
///
/// ```compile_fail
/// use sobolev_types::HasDiv;
/// fn check<T: HasDiv>() {}
/// check::<f64>();
/// ```
pub trait HasDiv {
    type DivOutput: FieldValue;

    /// 面面積ベクトル `s` を通る Gauss 流束（`∫ ∇·φ dV = ∮ φ · n dS`）。
    fn gauss_flux(&self, s: &Vector) -> Self::DivOutput;
}

/// ベクトル値の発散はスカラー値になる: `Vector → f64`
impl HasDiv for Vector {
    type DivOutput = f64;

    fn gauss_flux(&self, s: &Vector) -> f64 {
        self.dot(s)
    }
}

/// テンソル値の発散はベクトル値になる: `Tensor → Vector`
impl HasDiv for Tensor {
    type DivOutput = Vector;

    fn gauss_flux(&self, s: &Vector) -> Vector {
        *self * *s
    }
}
