use sobolev_norms::FormAlgebra;
use sobolev_types::{Field, Value};

use crate::error::FormError;
use crate::expr::{Expr, Form, Node};

/// [`Expr`] に対する記号代数。形状だけを検査し、数値は扱わない。
#[derive(Debug, Clone, Copy, Default)]
pub struct CellAlgebra;

fn same_rank(op: &'static str, a: &Expr, b: &Expr) -> Result<usize, FormError> {
    let (left, right) = (a.tensor_rank(), b.tensor_rank());
    if left != right {
        return Err(FormError::RankMismatch { op, left, right });
    }
    Ok(left)
}

impl FormAlgebra for CellAlgebra {
    type Expr = Expr;
    type Form = Form;
    type Error = FormError;

    fn sub(&self, a: &Expr, b: &Expr) -> Result<Expr, FormError> {
        let rank = same_rank("sub", a, b)?;
        Ok(Expr::new(Node::Sub(a.clone(), b.clone()), rank))
    }

    fn inner(&self, a: &Expr, b: &Expr) -> Result<Expr, FormError> {
        same_rank("inner", a, b)?;
        Ok(Expr::new(Node::Inner(a.clone(), b.clone()), 0))
    }

    fn product(&self, a: &Expr, b: &Expr) -> Result<Expr, FormError> {
        if a.tensor_rank() != 0 {
            return Err(FormError::Shape {
                op: "product",
                rank: a.tensor_rank(),
            });
        }
        Ok(Expr::new(Node::Product(a.clone(), b.clone()), b.tensor_rank()))
    }

    fn grad(&self, a: &Expr) -> Result<Expr, FormError> {
        let rank = a.tensor_rank();
        if rank >= Value::MAX_RANK {
            return Err(FormError::Shape { op: "grad", rank });
        }
        Ok(Expr::new(Node::Grad(a.clone()), rank + 1))
    }

    fn div(&self, a: &Expr) -> Result<Expr, FormError> {
        let rank = a.tensor_rank();
        if rank == 0 || rank > Value::MAX_RANK {
            return Err(FormError::Shape { op: "div", rank });
        }
        Ok(Expr::new(Node::Div(a.clone()), rank - 1))
    }

    fn curl(&self, a: &Expr) -> Result<Expr, FormError> {
        let rank = a.tensor_rank();
        if rank != 1 {
            return Err(FormError::Shape { op: "curl", rank });
        }
        Ok(Expr::new(Node::Curl(a.clone()), 1))
    }

    fn integrate(&self, integrand: Expr) -> Result<Form, FormError> {
        if integrand.tensor_rank() != 0 {
            return Err(FormError::NonScalarIntegrand(integrand.tensor_rank()));
        }
        Ok(Form {
            integrands: vec![integrand],
        })
    }

    fn add_forms(&self, mut a: Form, b: Form) -> Result<Form, FormError> {
        a.integrands.extend(b.integrands);
        Ok(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sobolev_fields::AnalyticField;

    fn scalar(name: &str) -> Expr {
        AnalyticField::new(name, 0, |_| Value::Scalar(1.0)).into()
    }

    fn vector(name: &str) -> Expr {
        AnalyticField::new(name, 1, |x| Value::Vector(*x)).into()
    }

    #[test]
    fn operator_ranks() {
        let alg = CellAlgebra;
        let u = vector("u");
        assert_eq!(alg.grad(&u).unwrap().tensor_rank(), 2);
        assert_eq!(alg.div(&u).unwrap().tensor_rank(), 0);
        assert_eq!(alg.curl(&u).unwrap().tensor_rank(), 1);
        assert_eq!(alg.inner(&u, &u).unwrap().tensor_rank(), 0);
        let g = alg.grad(&u).unwrap();
        assert_eq!(alg.div(&g).unwrap().tensor_rank(), 1);
    }

    #[test]
    fn labels_describe_structure() {
        let alg = CellAlgebra;
        let u = vector("u");
        let v = vector("v");
        let e = alg.sub(&u, &v).unwrap();
        let c = alg.curl(&e).unwrap();
        assert_eq!(alg.inner(&c, &c).unwrap().name(), "inner(curl((u - v)), curl((u - v)))");
    }

    #[test]
    fn shape_errors() {
        let alg = CellAlgebra;
        let p = scalar("p");
        let u = vector("u");
        assert_eq!(
            alg.div(&p).unwrap_err(),
            FormError::Shape { op: "div", rank: 0 }
        );
        assert_eq!(
            alg.curl(&p).unwrap_err(),
            FormError::Shape { op: "curl", rank: 0 }
        );
        let g = alg.grad(&u).unwrap();
        assert_eq!(
            alg.grad(&g).unwrap_err(),
            FormError::Shape { op: "grad", rank: 2 }
        );
        assert_eq!(
            alg.sub(&p, &u).unwrap_err(),
            FormError::RankMismatch {
                op: "sub",
                left: 0,
                right: 1
            }
        );
        assert_eq!(
            alg.integrate(u).unwrap_err(),
            FormError::NonScalarIntegrand(1)
        );
    }

    #[test]
    fn compound_expressions_are_not_discretized() {
        let alg = CellAlgebra;
        let u = vector("u");
        let e = alg.sub(&u, &u).unwrap();
        assert!(!e.is_discretized());
    }

    #[test]
    fn add_forms_concatenates() {
        let alg = CellAlgebra;
        let p = scalar("p");
        let a = alg.integrate(p.clone()).unwrap();
        let b = alg.integrate(alg.product(&p, &p).unwrap()).unwrap();
        let sum = alg.add_forms(a, b).unwrap();
        assert_eq!(sum.len(), 2);
        let names: Vec<&str> = sum.integrands().map(|e| e.name()).collect();
        assert_eq!(names, ["p", "p*p"]);
    }
}
