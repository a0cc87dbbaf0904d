use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use sobolev_mesh::PolyMesh;
use sobolev_types::{SpaceId, Value};

use crate::error::FieldError;

static NEXT_SPACE_ID: AtomicU32 = AtomicU32::new(0);

/// メッシュ上の近似空間。
///
/// `degree` は局所基底の多項式次数として宣言される値で、係数はセル中心で
/// サンプルされる。空間ごとに一意な [`SpaceId`] を払い出す。
#[derive(Debug)]
pub struct FunctionSpace {
    id: SpaceId,
    mesh: Arc<PolyMesh>,
    degree: u32,
    rank: usize,
}

impl FunctionSpace {
    pub fn new(mesh: Arc<PolyMesh>, degree: u32, rank: usize) -> Result<Arc<Self>, FieldError> {
        if rank > Value::MAX_RANK {
            return Err(FieldError::UnsupportedRank(rank));
        }
        Ok(Arc::new(Self {
            id: SpaceId(NEXT_SPACE_ID.fetch_add(1, Ordering::Relaxed)),
            mesh,
            degree,
            rank,
        }))
    }

    pub fn id(&self) -> SpaceId {
        self.id
    }

    pub fn mesh(&self) -> &Arc<PolyMesh> {
        &self.mesh
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn n_dofs(&self) -> usize {
        self.mesh.n_cells()
    }
}
