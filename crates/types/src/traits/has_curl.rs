use crate::tensor::Vector;

use super::field_value::FieldValue;

/// 回転演算子の出力型をコンパイル時に決定する trait。
///
/// 3 次元ではベクトル場の回転のみが定義され、結果もベクトル場になる。
///
/// ```compile_fail
/// use sobolev_types::HasCurl;
/// fn check<T: HasCurl>() {}
/// check::<f64>();
/// ```
pub trait HasCurl {
    type CurlOutput: FieldValue;

    /// 面面積ベクトル `s` を通る Gauss 流束（`∫ ∇×u dV = ∮ n × u dS`）。
    fn gauss_flux(&self, s: &Vector) -> Self::CurlOutput;
}

/// `Vector → Vector`
impl HasCurl for Vector {
    type CurlOutput = Vector;

    fn gauss_flux(&self, s: &Vector) -> Vector {
        s.cross(self)
    }
}
