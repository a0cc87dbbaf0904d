/// フィールド演算の基盤となる trait 群。
///
/// - [`FieldValue`][]: フィールド値の統一インターフェース（加減算・スカラー倍・零元・ノルム・内積）
/// - [`HasGrad`][] / [`HasDiv`][] / [`HasCurl`][]: 微分演算子の出力型をコンパイル時に決定する
/// - [`Field`][]: 離散場・記号式を問わず、ノルム評価に必要な能力を照会する
mod field;
mod field_value;
mod has_curl;
mod has_div;
mod has_grad;

pub use field::{Discretization, Field, FieldKind, SpaceId};
pub use field_value::FieldValue;
pub use has_curl::HasCurl;
pub use has_div::HasDiv;
pub use has_grad::HasGrad;
