//! セル中心離散化による記号代数と組立エンジン
//!
//! [`CellAlgebra`] は [`Expr`] / [`Form`] を組み立てるだけの記号代数、
//! [`CellAssembler`] はそれをメッシュ上で数値化する組立エンジンである。
//! 微分演算子は Green–Gauss 再構成、積分はセル中心 1 点求積で評価する。
//! どちらも `sobolev-norms` の協調者 trait を実装する。

mod algebra;
mod assembler;
mod error;
mod expr;
mod reconstruct;

pub use algebra::CellAlgebra;
pub use assembler::{BoundaryRule, CellAssembler};
pub use error::FormError;
pub use expr::{Expr, Form};
