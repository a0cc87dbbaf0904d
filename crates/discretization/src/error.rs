#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("`{op}` requires operands of equal rank, got {left} and {right}")]
    RankMismatch {
        op: &'static str,
        left: usize,
        right: usize,
    },
    #[error("`{op}` is not defined for rank {rank} operands")]
    Shape { op: &'static str, rank: usize },
    #[error("integrand must be scalar, got rank {0}")]
    NonScalarIntegrand(usize),
    #[error("field `{0}` lives on a different mesh than the assembler")]
    ForeignMesh(String),
    #[error("analytic field `{name}` returned rank {got}, declared {expected}")]
    AnalyticRank {
        name: String,
        expected: usize,
        got: usize,
    },
}
