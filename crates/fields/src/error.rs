#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    #[error("sample count mismatch: expected {expected} cells, got {got}")]
    SampleCountMismatch { expected: usize, got: usize },
    #[error("value rank mismatch at cell {cell}: expected {expected}, got {got}")]
    RankMismatch {
        cell: usize,
        expected: usize,
        got: usize,
    },
    #[error("unsupported tensor rank {0}")]
    UnsupportedRank(usize),
}
