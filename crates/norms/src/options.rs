use serde::{Deserialize, Serialize};

use crate::kind::NormKind;

/// `norm` の引数。
///
/// `mesh` は旧来の呼び出し面との互換のために受け付けるだけで、評価には
/// 一切使われない。積分領域は常に組立エンジン側の領域になる。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormOptions {
    pub kind: NormKind,
    /// 無効。参照されない。
    pub mesh: Option<String>,
}

impl NormOptions {
    pub fn new(kind: NormKind) -> Self {
        Self { kind, mesh: None }
    }
}

/// `error_norm` の引数。
///
/// `degree_rise` と `mesh` は互換のために受け付けるだけの無効な指定で、
/// 値を与えても結果は変わらない。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ErrorNormOptions {
    pub kind: NormKind,
    /// 無効。参照されない。
    pub degree_rise: Option<u32>,
    /// 無効。参照されない。
    pub mesh: Option<String>,
}

impl ErrorNormOptions {
    pub fn new(kind: NormKind) -> Self {
        Self {
            kind,
            degree_rise: None,
            mesh: None,
        }
    }

    /// 差の場に対するノルム評価の引数へ落とす。
    pub fn norm_options(&self) -> NormOptions {
        NormOptions {
            kind: self.kind,
            mesh: self.mesh.clone(),
        }
    }
}
