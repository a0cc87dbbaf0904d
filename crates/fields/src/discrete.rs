use std::sync::Arc;

use sobolev_mesh::PolyMesh;
use sobolev_types::tensor::Vector;
use sobolev_types::{Discretization, Field, Value};

use crate::error::FieldError;
use crate::space::FunctionSpace;

/// 近似空間上の離散場。セルごとに 1 つの係数（セル中心値）を持つ。
#[derive(Debug, Clone)]
pub struct DiscreteField {
    name: String,
    space: Arc<FunctionSpace>,
    values: Vec<Value>,
}

impl DiscreteField {
    pub fn new(
        name: impl Into<String>,
        space: Arc<FunctionSpace>,
        values: Vec<Value>,
    ) -> Result<Self, FieldError> {
        if values.len() != space.n_dofs() {
            return Err(FieldError::SampleCountMismatch {
                expected: space.n_dofs(),
                got: values.len(),
            });
        }
        if let Some((cell, v)) = values.iter().enumerate().find(|(_, v)| v.rank() != space.rank()) {
            return Err(FieldError::RankMismatch {
                cell,
                expected: space.rank(),
                got: v.rank(),
            });
        }
        Ok(Self {
            name: name.into(),
            space,
            values,
        })
    }

    /// セル中心で `f` を評価して係数を決める。
    pub fn interpolate(
        name: impl Into<String>,
        space: Arc<FunctionSpace>,
        f: impl Fn(&Vector) -> Value,
    ) -> Result<Self, FieldError> {
        let values = space.mesh().cell_centers().iter().map(f).collect();
        Self::new(name, space, values)
    }

    pub fn constant(
        name: impl Into<String>,
        space: Arc<FunctionSpace>,
        value: Value,
    ) -> Result<Self, FieldError> {
        let values = vec![value; space.n_dofs()];
        Self::new(name, space, values)
    }

    pub fn space(&self) -> &Arc<FunctionSpace> {
        &self.space
    }

    pub fn mesh(&self) -> &Arc<PolyMesh> {
        self.space.mesh()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl Field for DiscreteField {
    fn name(&self) -> &str {
        &self.name
    }

    fn tensor_rank(&self) -> usize {
        self.space.rank()
    }

    fn discretization(&self) -> Option<Discretization> {
        Some(Discretization {
            space: self.space.id(),
            degree: self.space.degree(),
        })
    }
}
