use std::fmt;
use std::sync::Arc;

use sobolev_types::tensor::Vector;
use sobolev_types::{Discretization, Field, Value};

type PointFn = dyn Fn(&Vector) -> Value + Send + Sync;

/// 座標の関数として与えられる記号式。離散化次数を持たない。
#[derive(Clone)]
pub struct AnalyticField {
    name: String,
    rank: usize,
    f: Arc<PointFn>,
}

impl AnalyticField {
    /// `f` は常にランク `rank` の値を返すこと。評価側で検査される。
    pub fn new(
        name: impl Into<String>,
        rank: usize,
        f: impl Fn(&Vector) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            rank,
            f: Arc::new(f),
        }
    }

    pub fn eval(&self, x: &Vector) -> Value {
        (self.f)(x)
    }
}

impl fmt::Debug for AnalyticField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyticField")
            .field("name", &self.name)
            .field("rank", &self.rank)
            .finish_non_exhaustive()
    }
}

impl Field for AnalyticField {
    fn name(&self) -> &str {
        &self.name
    }

    fn tensor_rank(&self) -> usize {
        self.rank
    }

    fn discretization(&self) -> Option<Discretization> {
        None
    }
}
