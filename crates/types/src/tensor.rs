//! 3 次元のベクトル・2 階テンソル値型。
mod ops;
mod products;
mod types;

pub use types::{Tensor, Vector};
