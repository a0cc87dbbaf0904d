use crate::collaborator::FormAlgebra;
use crate::kind::NormKind;

/// `kind` ノルムの二乗を表す積分式を組み立てる。評価はしない。
///
/// 質量項 `(v, v) dx` に、ノルムの種類に応じた微分項の積分を加える。
/// 演算子の形状エラーは記号代数のエラーとしてそのまま返る。
pub fn build_form<A: FormAlgebra>(
    algebra: &A,
    field: &A::Expr,
    kind: NormKind,
) -> Result<A::Form, A::Error> {
    let mass = algebra.integrate(algebra.inner(field, field)?)?;

    let derivative = match kind {
        NormKind::L2 => return Ok(mass),
        NormKind::H1 => {
            let g = algebra.grad(field)?;
            algebra.inner(&g, &g)?
        }
        NormKind::Hdiv => {
            let d = algebra.div(field)?;
            algebra.product(&d, &d)?
        }
        NormKind::Hcurl => {
            let c = algebra.curl(field)?;
            algebra.inner(&c, &c)?
        }
    };

    algebra.add_forms(mass, algebra.integrate(derivative)?)
}
