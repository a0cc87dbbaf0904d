use std::fmt;

/// 近似空間の識別子。同一の `SpaceId` を持つ離散場は同じ基底を共有する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpaceId(pub u32);

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V{}", self.0)
    }
}

/// 離散場の近似空間に関する情報。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discretization {
    pub space: SpaceId,
    /// 局所基底関数の多項式次数。
    pub degree: u32,
}

/// フィールドの表現種別。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 近似空間上の係数で表された離散場。
    Discrete,
    /// 解析解などの記号式。離散化次数を持たない。
    Expression,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Discrete => f.write_str("discrete field"),
            FieldKind::Expression => f.write_str("symbolic expression"),
        }
    }
}

/// ノルム評価が必要とするフィールドの能力照会。
///
/// 離散場と記号式は表現が異なるが、比較前の構造検査に必要なのは
/// テンソルランクと（離散場であれば）近似空間の情報だけである。
pub trait Field {
    /// 診断メッセージ用の名前。
    fn name(&self) -> &str;

    /// テンソルランク（0: スカラー, 1: ベクトル, 2 以上: テンソル）。
    fn tensor_rank(&self) -> usize;

    /// 離散場であれば近似空間の情報を返す。記号式は `None`。
    fn discretization(&self) -> Option<Discretization>;

    fn is_discretized(&self) -> bool {
        self.discretization().is_some()
    }

    fn discretization_degree(&self) -> Option<u32> {
        self.discretization().map(|d| d.degree)
    }

    fn kind(&self) -> FieldKind {
        if self.is_discretized() {
            FieldKind::Discrete
        } else {
            FieldKind::Expression
        }
    }
}

impl<F: Field + ?Sized> Field for &F {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn tensor_rank(&self) -> usize {
        (**self).tensor_rank()
    }

    fn discretization(&self) -> Option<Discretization> {
        (**self).discretization()
    }
}
