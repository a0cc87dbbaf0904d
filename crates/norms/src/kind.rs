use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 評価するノルムの種類。
///
/// | 種類    | `‖v‖²` の被積分関数 |
/// |---------|--------------------|
/// | `L2`    | `(v, v)` |
/// | `H1`    | `(v, v) + (∇v, ∇v)` |
/// | `Hdiv`  | `(v, v) + (∇·v)(∇·v)` |
/// | `Hcurl` | `(v, v) + (∇×v, ∇×v)` |
///
/// 文字列からの変換は大文字小文字を区別しない。前後の空白は除去せず、
/// 小文字化した後に完全一致したものだけを受け付ける。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NormKind {
    #[default]
    L2,
    H1,
    Hdiv,
    Hcurl,
}

impl NormKind {
    pub const ALL: [NormKind; 4] = [NormKind::L2, NormKind::H1, NormKind::Hdiv, NormKind::Hcurl];

    pub fn as_str(&self) -> &'static str {
        match self {
            NormKind::L2 => "L2",
            NormKind::H1 => "H1",
            NormKind::Hdiv => "Hdiv",
            NormKind::Hcurl => "Hcurl",
        }
    }
}

impl fmt::Display for NormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown norm type '{input}'")]
pub struct ParseNormKindError {
    pub input: String,
}

impl FromStr for NormKind {
    type Err = ParseNormKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "l2" => Ok(NormKind::L2),
            "h1" => Ok(NormKind::H1),
            "hdiv" => Ok(NormKind::Hdiv),
            "hcurl" => Ok(NormKind::Hcurl),
            _ => Err(ParseNormKindError {
                input: s.to_owned(),
            }),
        }
    }
}

impl TryFrom<String> for NormKind {
    type Error = ParseNormKindError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<NormKind> for String {
    fn from(kind: NormKind) -> Self {
        kind.as_str().to_owned()
    }
}
