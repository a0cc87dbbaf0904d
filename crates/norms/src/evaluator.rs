use crate::builder::build_form;
use crate::collaborator::{Assemble, FormAlgebra};
use crate::comparator::{check_comparable, compare_error, difference_norm};
use crate::error::NormError;
use crate::kind::NormKind;
use crate::options::{ErrorNormOptions, NormOptions};
use crate::reducer::ScalarReducer;

/// 記号代数と組立エンジンを束ねた `norm` / `error_norm` の入口。
///
/// 協調者を共有参照で借りるだけで状態を持たないため、協調者が `Sync` なら
/// 複数スレッドから同時に呼び出せる。
#[derive(Debug)]
pub struct NormEvaluator<'a, A, S> {
    algebra: &'a A,
    assembler: &'a S,
    reducer: ScalarReducer,
}

impl<A, S> Clone for NormEvaluator<'_, A, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, S> Copy for NormEvaluator<'_, A, S> {}

impl<'a, A, S> NormEvaluator<'a, A, S>
where
    A: FormAlgebra,
    S: Assemble<A::Form, Error = A::Error>,
{
    pub fn new(algebra: &'a A, assembler: &'a S) -> Self {
        Self {
            algebra,
            assembler,
            reducer: ScalarReducer::default(),
        }
    }

    pub fn with_reducer(self, reducer: ScalarReducer) -> Self {
        Self { reducer, ..self }
    }

    /// `field` の `norm_kind` ノルム。種類名は大文字小文字を区別しない。
    pub fn norm(&self, field: &A::Expr, norm_kind: &str) -> Result<f64, NormError<A::Error>> {
        let kind: NormKind = norm_kind.parse()?;
        self.norm_with(field, &NormOptions::new(kind))
    }

    /// `options.mesh` は参照しない。
    pub fn norm_with(
        &self,
        field: &A::Expr,
        options: &NormOptions,
    ) -> Result<f64, NormError<A::Error>> {
        let form = build_form(self.algebra, field, options.kind).map_err(NormError::Assembly)?;
        self.reducer.reduce(self.assembler, &form)
    }

    /// 誤差 `reference - approximation` の `norm_kind` ノルム。
    ///
    /// 構造検査はノルム種類の解釈より先に行う。
    pub fn error_norm(
        &self,
        reference: &A::Expr,
        approximation: &A::Expr,
        norm_kind: &str,
    ) -> Result<f64, NormError<A::Error>> {
        check_comparable(reference, approximation)?;
        let kind: NormKind = norm_kind.parse()?;
        difference_norm(
            self.algebra,
            self.assembler,
            &self.reducer,
            reference,
            approximation,
            kind,
        )
    }

    pub fn error_norm_with(
        &self,
        reference: &A::Expr,
        approximation: &A::Expr,
        options: &ErrorNormOptions,
    ) -> Result<f64, NormError<A::Error>> {
        compare_error(
            self.algebra,
            self.assembler,
            &self.reducer,
            reference,
            approximation,
            options,
        )
    }
}
