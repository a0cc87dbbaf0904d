use sobolev_types::Field;
use tracing::warn;

use crate::builder::build_form;
use crate::collaborator::{Assemble, FormAlgebra};
use crate::error::NormError;
use crate::kind::NormKind;
use crate::options::ErrorNormOptions;
use crate::reducer::ScalarReducer;

/// 参照場と近似場が比較可能かを検査する。
///
/// 1. テンソルランクが異なれば [`NormError::RankMismatch`]
/// 2. 近似場が離散場でなければ [`NormError::TypeMismatch`]
///
/// 参照場も離散場で、その次数が近似場より低い場合は警告を 1 回だけ出す。
/// この警告は助言のみで、結果にも制御にも影響しない。
pub fn check_comparable<E>(
    reference: &impl Field,
    approximation: &impl Field,
) -> Result<(), NormError<E>> {
    let (r_rank, a_rank) = (reference.tensor_rank(), approximation.tensor_rank());
    if r_rank != a_rank {
        return Err(NormError::RankMismatch {
            reference: r_rank,
            approximation: a_rank,
        });
    }

    let Some(a_degree) = approximation.discretization_degree() else {
        return Err(NormError::TypeMismatch {
            name: approximation.name().to_owned(),
            kind: approximation.kind(),
        });
    };

    if let Some(r_degree) = reference.discretization_degree()
        && r_degree < a_degree
    {
        warn!(
            reference = reference.name(),
            approximation = approximation.name(),
            reference_degree = r_degree,
            approximation_degree = a_degree,
            "reference resolution coarser than approximation"
        );
    }
    Ok(())
}

/// 誤差 `reference - approximation` のノルムを返す。
///
/// 構造検査（[`check_comparable`]）の後、差の式を作って
/// [`build_form`] と [`ScalarReducer`] に渡す。`options.degree_rise` と
/// `options.mesh` は参照しない。
pub fn compare_error<A, S>(
    algebra: &A,
    assembler: &S,
    reducer: &ScalarReducer,
    reference: &A::Expr,
    approximation: &A::Expr,
    options: &ErrorNormOptions,
) -> Result<f64, NormError<A::Error>>
where
    A: FormAlgebra,
    S: Assemble<A::Form, Error = A::Error>,
{
    check_comparable(reference, approximation)?;
    difference_norm(algebra, assembler, reducer, reference, approximation, options.kind)
}

/// 検査済みの 2 つの場の差のノルム。
pub(crate) fn difference_norm<A, S>(
    algebra: &A,
    assembler: &S,
    reducer: &ScalarReducer,
    reference: &A::Expr,
    approximation: &A::Expr,
    kind: NormKind,
) -> Result<f64, NormError<A::Error>>
where
    A: FormAlgebra,
    S: Assemble<A::Form, Error = A::Error>,
{
    let error = algebra
        .sub(reference, approximation)
        .map_err(NormError::Assembly)?;
    let form = build_form(algebra, &error, kind).map_err(NormError::Assembly)?;
    reducer.reduce(assembler, &form)
}
