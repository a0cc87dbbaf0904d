use sobolev_types::FieldKind;

use crate::kind::ParseNormKindError;

/// ノルム評価の失敗。いずれも呼び出し 1 回に対して致命的で、部分結果は返さない。
///
/// `E` は記号代数・組立エンジン側のエラー型。[`NormError::Assembly`] に
/// 包み直さずそのまま載せる。
#[derive(Debug, thiserror::Error)]
pub enum NormError<E> {
    #[error("mismatching rank between reference ({reference}) and approximation ({approximation})")]
    RankMismatch {
        reference: usize,
        approximation: usize,
    },
    #[error("approximation `{name}` must be a discretized field, got a {kind}")]
    TypeMismatch { name: String, kind: FieldKind },
    #[error("unknown norm type '{0}'")]
    UnsupportedNorm(String),
    #[error("assembled squared norm {value} is outside the square root domain (tolerance {tolerance})")]
    NumericalDomain { value: f64, tolerance: f64 },
    #[error(transparent)]
    Assembly(E),
}

impl<E> From<ParseNormKindError> for NormError<E> {
    fn from(err: ParseNormKindError) -> Self {
        NormError::UnsupportedNorm(err.input)
    }
}
