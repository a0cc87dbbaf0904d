//! Sobolev ノルム評価ワークスペースの基盤型
//!
//! テンソル値型、実行時ランクを持つ動的値、フィールド値 trait 群、
//! およびフィールドの能力照会 trait [`Field`] を提供する。

pub mod tensor;
pub mod traits;
pub mod value;

pub use traits::{Discretization, Field, FieldKind, FieldValue, HasCurl, HasDiv, HasGrad, SpaceId};
pub use value::Value;
