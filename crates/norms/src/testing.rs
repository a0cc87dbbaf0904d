//! 単体テスト用の文字列ベースの記号代数と、固定値を返す組立エンジン。

use std::cell::{Cell, RefCell};

use sobolev_types::{Discretization, Field, SpaceId};

use crate::collaborator::{Assemble, FormAlgebra};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SymExpr {
    pub text: String,
    pub rank: usize,
    pub degree: Option<u32>,
}

impl Field for SymExpr {
    fn name(&self) -> &str {
        &self.text
    }

    fn tensor_rank(&self) -> usize {
        self.rank
    }

    fn discretization(&self) -> Option<Discretization> {
        self.degree.map(|degree| Discretization {
            space: SpaceId(0),
            degree,
        })
    }
}

/// 記号式（離散化次数なし）。
pub(crate) fn sym(text: &str, rank: usize) -> SymExpr {
    SymExpr {
        text: text.to_owned(),
        rank,
        degree: None,
    }
}

pub(crate) fn discrete(text: &str, rank: usize, degree: u32) -> SymExpr {
    SymExpr {
        degree: Some(degree),
        ..sym(text, rank)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct SymForm {
    pub terms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub(crate) enum SymbolicError {
    #[error("{0} is not defined for rank {1}")]
    Shape(&'static str, usize),
    #[error("quadrature failed")]
    Quadrature,
}

pub(crate) struct SymbolicAlgebra;

impl SymbolicAlgebra {
    fn derived(text: String, rank: usize) -> SymExpr {
        SymExpr {
            text,
            rank,
            degree: None,
        }
    }
}

impl FormAlgebra for SymbolicAlgebra {
    type Expr = SymExpr;
    type Form = SymForm;
    type Error = SymbolicError;

    fn sub(&self, a: &SymExpr, b: &SymExpr) -> Result<SymExpr, SymbolicError> {
        Ok(Self::derived(format!("({} - {})", a.text, b.text), a.rank))
    }

    fn inner(&self, a: &SymExpr, b: &SymExpr) -> Result<SymExpr, SymbolicError> {
        Ok(Self::derived(format!("inner({}, {})", a.text, b.text), 0))
    }

    fn product(&self, a: &SymExpr, b: &SymExpr) -> Result<SymExpr, SymbolicError> {
        if a.rank != 0 {
            return Err(SymbolicError::Shape("product", a.rank));
        }
        Ok(Self::derived(format!("{}*{}", a.text, b.text), b.rank))
    }

    fn grad(&self, a: &SymExpr) -> Result<SymExpr, SymbolicError> {
        Ok(Self::derived(format!("grad({})", a.text), a.rank + 1))
    }

    fn div(&self, a: &SymExpr) -> Result<SymExpr, SymbolicError> {
        if a.rank == 0 {
            return Err(SymbolicError::Shape("div", 0));
        }
        Ok(Self::derived(format!("div({})", a.text), a.rank - 1))
    }

    fn curl(&self, a: &SymExpr) -> Result<SymExpr, SymbolicError> {
        if a.rank != 1 {
            return Err(SymbolicError::Shape("curl", a.rank));
        }
        Ok(Self::derived(format!("curl({})", a.text), 1))
    }

    fn integrate(&self, integrand: SymExpr) -> Result<SymForm, SymbolicError> {
        if integrand.rank != 0 {
            return Err(SymbolicError::Shape("integrate", integrand.rank));
        }
        Ok(SymForm {
            terms: vec![format!("{}*dx", integrand.text)],
        })
    }

    fn add_forms(&self, mut a: SymForm, b: SymForm) -> Result<SymForm, SymbolicError> {
        a.terms.extend(b.terms);
        Ok(a)
    }
}

/// 常に同じ値（または失敗）を返し、呼び出し回数と最後の積分式を記録する。
pub(crate) struct FixedAssembler {
    pub value: Result<f64, SymbolicError>,
    pub calls: Cell<usize>,
    pub last_form: RefCell<Option<SymForm>>,
}

impl FixedAssembler {
    pub fn returning(value: f64) -> Self {
        Self {
            value: Ok(value),
            calls: Cell::new(0),
            last_form: Default::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            value: Err(SymbolicError::Quadrature),
            ..Self::returning(0.0)
        }
    }
}

impl Assemble<SymForm> for FixedAssembler {
    type Error = SymbolicError;
    type BoundaryConditions = ();

    fn assemble(&self, form: &SymForm, bcs: Option<&()>) -> Result<f64, SymbolicError> {
        assert!(bcs.is_none(), "norm evaluation must not pass boundary conditions");
        self.calls.set(self.calls.get() + 1);
        *self.last_form.borrow_mut() = Some(form.clone());
        self.value.clone()
    }
}
