//! Sobolev ノルムと誤差ノルムの評価
//!
//! 場（または 2 つの場の差）から記号的なスカラー積分を組み立て、
//! 外部の組立エンジンで数値化し、平方根をとって 1 つの非負スカラーを返す。
//!
//! 処理は 3 段の直列パイプラインで構成される。
//!
//! 1. [`compare_error`]: 参照場と近似場の構造検査（ランク一致・近似場の離散性）
//!    と次数の助言的警告。差 `reference - approximation` を作る。
//! 2. [`build_form`]: [`NormKind`] に応じた被積分関数を組み立てる。
//! 3. [`ScalarReducer`]: 組立と平方根。負値は許容誤差内なら 0 に丸め、
//!    それを超えれば [`NormError::NumericalDomain`]。
//!
//! 記号代数と組立エンジンは [`collaborator`] の trait 越しにのみ扱う。
//! 通常は [`NormEvaluator`] の `norm` / `error_norm` から使う。

mod builder;
pub mod collaborator;
mod comparator;
mod error;
mod evaluator;
mod kind;
mod options;
mod reducer;

#[cfg(test)]
mod testing;

pub use builder::build_form;
pub use collaborator::{Assemble, FormAlgebra};
pub use comparator::{check_comparable, compare_error};
pub use error::NormError;
pub use evaluator::NormEvaluator;
pub use kind::{NormKind, ParseNormKindError};
pub use options::{ErrorNormOptions, NormOptions};
pub use reducer::{ReducerConfig, ReducerConfigError, ScalarReducer};
