//! 多面体メッシュ
//!
//! OpenFOAM 形式の owner/neighbor 接続から面・セルの幾何量を計算し、
//! 体積積分と Green–Gauss 再構成に必要な情報を保持する。

mod error;
mod geometry;
mod poly_mesh;

#[cfg(feature = "fixtures")]
pub mod fixtures;

pub use error::MeshError;
pub use poly_mesh::PolyMesh;
