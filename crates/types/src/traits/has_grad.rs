use crate::tensor::{Tensor, Vector};

use super::field_value::FieldValue;

/// 勾配演算子の出力型をコンパイル時に決定する trait。
///
/// `T: HasGrad` のとき、`grad(T-Field)` の結果は `T::GradOutput-Field` になり、
/// ランクは 1 つ上がる。
///
/// | 入力型   | `GradOutput` |
/// |----------|-------------|
/// | `f64`    | `Vector`    |
/// | `Vector` | `Tensor`    |
///
/// 3 階以上のテンソルは表現しないため、`Tensor` は `HasGrad` を実装しない:
///
/// ```compile_fail
/// use sobolev_types::HasGrad;
/// use sobolev_types::tensor::Tensor;
/// fn check<T: HasGrad>() {}
/// check::<Tensor>();
/// ```
pub trait HasGrad {
    type GradOutput: FieldValue;

    /// 面面積ベクトル `s` を通る Gauss 流束 `φ ⊗ s`。
    ///
    /// 閉曲面上の総和を体積で割ると勾配の体積平均になる（`∫ ∇φ dV = ∮ φ ⊗ n dS`）。
    fn gauss_flux(&self, s: &Vector) -> Self::GradOutput;
}

/// スカラー値の勾配はベクトル値になる: `f64 → Vector`
impl HasGrad for f64 {
    type GradOutput = Vector;

    fn gauss_flux(&self, s: &Vector) -> Vector {
        *s * *self
    }
}

/// ベクトル値の勾配はテンソル値になる: `Vector → Tensor`
impl HasGrad for Vector {
    type GradOutput = Tensor;

    /// `(u ⊗ s)_ij = u_i s_j`。勾配の規約 `∂u_i/∂x_j` と添字を揃える。
    fn gauss_flux(&self, s: &Vector) -> Tensor {
        self.outer(s)
    }
}
