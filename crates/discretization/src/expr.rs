use std::sync::Arc;

use sobolev_fields::{AnalyticField, DiscreteField};
use sobolev_types::{Discretization, Field};

/// 場の記号式。葉は離散場または解析式、内部節点は演算子。
///
/// 節点は `Arc` で共有するので複製は安価で、同じ部分式を指す 2 つの
/// `Expr` は評価時に 1 回だけ数値化される。ランクと表示名は構築時に確定する。
#[derive(Debug, Clone)]
pub struct Expr {
    pub(crate) node: Arc<Node>,
    rank: usize,
    label: String,
}

#[derive(Debug)]
pub(crate) enum Node {
    Discrete(DiscreteField),
    Analytic(AnalyticField),
    Sub(Expr, Expr),
    Inner(Expr, Expr),
    Product(Expr, Expr),
    Grad(Expr),
    Div(Expr),
    Curl(Expr),
}

impl Expr {
    pub(crate) fn new(node: Node, rank: usize) -> Self {
        let label = match &node {
            Node::Discrete(f) => f.name().to_owned(),
            Node::Analytic(f) => f.name().to_owned(),
            Node::Sub(a, b) => format!("({} - {})", a.label, b.label),
            Node::Inner(a, b) => format!("inner({}, {})", a.label, b.label),
            Node::Product(a, b) => format!("{}*{}", a.label, b.label),
            Node::Grad(a) => format!("grad({})", a.label),
            Node::Div(a) => format!("div({})", a.label),
            Node::Curl(a) => format!("curl({})", a.label),
        };
        Self {
            node: Arc::new(node),
            rank,
            label,
        }
    }

    pub(crate) fn same_node(&self, other: &Expr) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }
}

impl From<DiscreteField> for Expr {
    fn from(f: DiscreteField) -> Self {
        let rank = f.tensor_rank();
        Expr::new(Node::Discrete(f), rank)
    }
}

impl From<AnalyticField> for Expr {
    fn from(f: AnalyticField) -> Self {
        let rank = f.tensor_rank();
        Expr::new(Node::Analytic(f), rank)
    }
}

impl Field for Expr {
    fn name(&self) -> &str {
        &self.label
    }

    fn tensor_rank(&self) -> usize {
        self.rank
    }

    /// 離散場の葉だけが離散化情報を持つ。演算を施した式は記号式として扱う。
    fn discretization(&self) -> Option<Discretization> {
        match self.node.as_ref() {
            Node::Discrete(f) => f.discretization(),
            _ => None,
        }
    }
}

/// 領域測度 `dx` に対するスカラー被積分関数の和 `Σ ∫ e_i dx`。
#[derive(Debug, Clone, Default)]
pub struct Form {
    pub(crate) integrands: Vec<Expr>,
}

impl Form {
    pub fn integrands(&self) -> impl Iterator<Item = &Expr> {
        self.integrands.iter()
    }

    pub fn len(&self) -> usize {
        self.integrands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.integrands.is_empty()
    }
}
