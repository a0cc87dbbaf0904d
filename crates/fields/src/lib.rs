//! フィールド表現
//!
//! - [`DiscreteField`]: 近似空間 [`FunctionSpace`] 上のセル中心サンプル
//! - [`AnalyticField`]: 座標の関数として与えられる記号式（厳密解など）
//!
//! どちらも [`sobolev_types::Field`] を実装し、ノルム評価の構造検査に応える。

mod analytic;
mod discrete;
mod error;
mod space;

pub use analytic::AnalyticField;
pub use discrete::DiscreteField;
pub use error::FieldError;
pub use space::FunctionSpace;
