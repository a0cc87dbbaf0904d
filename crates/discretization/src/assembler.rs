use std::sync::Arc;

use sobolev_mesh::PolyMesh;
use sobolev_norms::Assemble;
use sobolev_types::tensor::{Tensor, Vector};
use sobolev_types::{Field, Value};
use tracing::trace;

use crate::error::FormError;
use crate::expr::{Expr, Form, Node};
use crate::reconstruct;

/// 微分演算子の再構成で境界面に与える値。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryRule {
    /// 境界面値 = owner セル値（法線方向勾配 0）。
    #[default]
    ZeroGradient,
    /// 境界面値 = 0（同次 Dirichlet）。
    Homogeneous,
}

/// セル中心 1 点求積による組立エンジン。
///
/// 式をセルごとの値列に評価し、`Σ_c V_c e(x_c)` で積分する。
/// 微分演算子は被演算式のセル値から Green–Gauss で再構成する。
#[derive(Debug, Clone)]
pub struct CellAssembler {
    mesh: Arc<PolyMesh>,
}

impl CellAssembler {
    pub fn new(mesh: Arc<PolyMesh>) -> Self {
        Self { mesh }
    }

    pub fn mesh(&self) -> &Arc<PolyMesh> {
        &self.mesh
    }

    /// 式をセル値の列に評価する。
    pub fn evaluate(&self, expr: &Expr, rule: BoundaryRule) -> Result<Vec<Value>, FormError> {
        let mesh = self.mesh.as_ref();
        match expr.node.as_ref() {
            Node::Discrete(f) => {
                if !Arc::ptr_eq(f.mesh(), &self.mesh) {
                    return Err(FormError::ForeignMesh(f.name().to_owned()));
                }
                Ok(f.values().to_vec())
            }
            Node::Analytic(f) => mesh
                .cell_centers()
                .iter()
                .map(|x| {
                    let v = f.eval(x);
                    if v.rank() != f.tensor_rank() {
                        return Err(FormError::AnalyticRank {
                            name: f.name().to_owned(),
                            expected: f.tensor_rank(),
                            got: v.rank(),
                        });
                    }
                    Ok(v)
                })
                .collect(),
            Node::Sub(a, b) => {
                let (va, vb) = self.evaluate_pair(a, b, rule)?;
                zip_cells(&va, &vb, |x, y| x.checked_sub(y), "sub")
            }
            Node::Inner(a, b) => {
                let (va, vb) = self.evaluate_pair(a, b, rule)?;
                zip_cells(&va, &vb, |x, y| x.inner(y).map(Value::Scalar), "inner")
            }
            Node::Product(a, b) => {
                let (va, vb) = self.evaluate_pair(a, b, rule)?;
                zip_cells(&va, &vb, |x, y| x.as_scalar().map(|s| y.scale(s)), "product")
            }
            Node::Grad(a) => {
                let va = self.evaluate(a, rule)?;
                match a.tensor_rank() {
                    0 => Ok(wrap(reconstruct::grad_scalar(mesh, &unpack(&va, scalar), rule))),
                    1 => Ok(wrap(reconstruct::grad_vector(mesh, &unpack(&va, vector), rule))),
                    rank => Err(FormError::Shape { op: "grad", rank }),
                }
            }
            Node::Div(a) => {
                let va = self.evaluate(a, rule)?;
                match a.tensor_rank() {
                    1 => Ok(wrap(reconstruct::div_vector(mesh, &unpack(&va, vector), rule))),
                    2 => Ok(wrap(reconstruct::div_tensor(mesh, &unpack(&va, tensor), rule))),
                    rank => Err(FormError::Shape { op: "div", rank }),
                }
            }
            Node::Curl(a) => {
                let va = self.evaluate(a, rule)?;
                match a.tensor_rank() {
                    1 => Ok(wrap(reconstruct::curl_vector(mesh, &unpack(&va, vector), rule))),
                    rank => Err(FormError::Shape { op: "curl", rank }),
                }
            }
        }
    }

    /// 同じ節点を指す 2 項は 1 回だけ評価する。
    fn evaluate_pair(
        &self,
        a: &Expr,
        b: &Expr,
        rule: BoundaryRule,
    ) -> Result<(Vec<Value>, Vec<Value>), FormError> {
        let va = self.evaluate(a, rule)?;
        let vb = if a.same_node(b) {
            va.clone()
        } else {
            self.evaluate(b, rule)?
        };
        Ok((va, vb))
    }

    fn integrate(&self, integrand: &Expr, rule: BoundaryRule) -> Result<f64, FormError> {
        let values = self.evaluate(integrand, rule)?;
        values
            .iter()
            .zip(self.mesh.cell_volumes())
            .try_fold(0.0, |sum, (v, &vol)| {
                v.as_scalar()
                    .map(|s| sum + s * vol)
                    .ok_or(FormError::NonScalarIntegrand(v.rank()))
            })
    }
}

impl Assemble<Form> for CellAssembler {
    type Error = FormError;
    type BoundaryConditions = BoundaryRule;

    fn assemble(&self, form: &Form, bcs: Option<&BoundaryRule>) -> Result<f64, FormError> {
        let rule = bcs.copied().unwrap_or_default();
        let mut total = 0.0;
        for integrand in form.integrands() {
            let value = self.integrate(integrand, rule)?;
            trace!(integrand = integrand.name(), value, "integrated term");
            total += value;
        }
        Ok(total)
    }
}

fn zip_cells(
    a: &[Value],
    b: &[Value],
    op: impl Fn(&Value, &Value) -> Option<Value>,
    name: &'static str,
) -> Result<Vec<Value>, FormError> {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            op(x, y).ok_or(FormError::RankMismatch {
                op: name,
                left: x.rank(),
                right: y.rank(),
            })
        })
        .collect()
}

fn scalar(v: &Value) -> f64 {
    v.as_scalar().unwrap_or_default()
}

fn vector(v: &Value) -> Vector {
    match v {
        Value::Vector(u) => *u,
        _ => Default::default(),
    }
}

fn tensor(v: &Value) -> Tensor {
    match v {
        Value::Tensor(t) => *t,
        _ => Default::default(),
    }
}

/// ランク検査済みの値列を静的型の列へ取り出す。
fn unpack<T>(values: &[Value], extract: fn(&Value) -> T) -> Vec<T> {
    values.iter().map(extract).collect()
}

fn wrap<T: Into<Value>>(values: Vec<T>) -> Vec<Value> {
    values.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sobolev_fields::{AnalyticField, DiscreteField, FunctionSpace};
    use sobolev_mesh::fixtures::unit_cube;
    use sobolev_norms::FormAlgebra;

    use crate::CellAlgebra;

    fn setup(n: usize) -> (Arc<PolyMesh>, CellAssembler) {
        let mesh = Arc::new(unit_cube(n).unwrap());
        let assembler = CellAssembler::new(mesh.clone());
        (mesh, assembler)
    }

    #[test]
    fn integrates_constant_to_volume() {
        let (_, assembler) = setup(3);
        let one: Expr = AnalyticField::new("one", 0, |_| Value::Scalar(1.0)).into();
        let form = CellAlgebra.integrate(one).unwrap();
        let value = assembler.assemble(&form, None).unwrap();
        assert!((value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn midpoint_rule_integrates_linear_exactly() {
        let (_, assembler) = setup(4);
        let x: Expr = AnalyticField::new("x", 0, |p| Value::Scalar(p.x())).into();
        let form = CellAlgebra.integrate(x).unwrap();
        assert!((assembler.assemble(&form, None).unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn inner_of_vector_field() {
        let (mesh, assembler) = setup(2);
        let space = FunctionSpace::new(mesh, 1, 1).unwrap();
        let u: Expr = DiscreteField::constant("u", space, Value::Vector(Vector::new(1.0, 2.0, 2.0)))
            .unwrap()
            .into();
        let form = CellAlgebra.integrate(CellAlgebra.inner(&u, &u).unwrap()).unwrap();
        assert!((assembler.assemble(&form, None).unwrap() - 9.0).abs() < 1e-12);
    }

    #[test]
    fn foreign_mesh_is_rejected() {
        let (_, assembler) = setup(2);
        let other = Arc::new(unit_cube(2).unwrap());
        let space = FunctionSpace::new(other, 0, 0).unwrap();
        let u: Expr = DiscreteField::constant("u_other", space, Value::Scalar(1.0))
            .unwrap()
            .into();
        let form = CellAlgebra.integrate(CellAlgebra.inner(&u, &u).unwrap()).unwrap();
        assert_eq!(
            assembler.assemble(&form, None).unwrap_err(),
            FormError::ForeignMesh("u_other".into())
        );
    }

    #[test]
    fn analytic_rank_is_checked() {
        let (_, assembler) = setup(1);
        let liar: Expr = AnalyticField::new("liar", 0, |x| Value::Vector(*x)).into();
        let form = CellAlgebra.integrate(CellAlgebra.inner(&liar, &liar).unwrap()).unwrap();
        assert!(matches!(
            assembler.assemble(&form, None),
            Err(FormError::AnalyticRank { expected: 0, got: 1, .. })
        ));
    }

    #[test]
    fn boundary_rule_reaches_reconstruction() {
        let (_, assembler) = setup(2);
        let one: Expr = AnalyticField::new("one", 0, |_| Value::Scalar(1.0)).into();
        let g = CellAlgebra.grad(&one).unwrap();
        let form = CellAlgebra.integrate(CellAlgebra.inner(&g, &g).unwrap()).unwrap();
        let free = assembler.assemble(&form, None).unwrap();
        let walled = assembler
            .assemble(&form, Some(&BoundaryRule::Homogeneous))
            .unwrap();
        assert!(free.abs() < 1e-20);
        assert!(walled > 1.0);
    }
}
