use sobolev_types::tensor::Vector;

use crate::error::MeshError;
use crate::geometry::{self, FaceGeometry};

/// owner/neighbor 形式の多面体メッシュ。
///
/// 面 `0..n_internal_faces` が内部面で、`neighbor[f]` はその反対側のセル。
/// 残りの面は境界面で owner のみを持つ。面積ベクトルは常に owner 外向き。
/// 構築時に接続を検証し、幾何量をすべて前計算する。以後は不変。
#[derive(Debug, Clone)]
pub struct PolyMesh {
    points: Vec<Vector>,
    faces: Vec<Vec<usize>>,
    owner: Vec<usize>,
    neighbor: Vec<usize>,
    face_centers: Vec<Vector>,
    face_areas: Vec<Vector>,
    cell_volumes: Vec<f64>,
    cell_centers: Vec<Vector>,
    cell_faces: Vec<Vec<usize>>,
}

impl PolyMesh {
    pub fn new(
        points: Vec<Vector>,
        faces: Vec<Vec<usize>>,
        owner: Vec<usize>,
        neighbor: Vec<usize>,
        n_cells: usize,
    ) -> Result<Self, MeshError> {
        validate(&points, &faces, &owner, &neighbor, n_cells)?;

        let face_geom: Vec<FaceGeometry> = faces
            .iter()
            .map(|f| geometry::face_geometry(&points, f))
            .collect();
        let (cell_volumes, cell_centers) =
            geometry::cell_geometry(&face_geom, &owner, &neighbor, n_cells);
        if let Some((cell, &volume)) = cell_volumes.iter().enumerate().find(|(_, v)| **v <= 0.0) {
            return Err(MeshError::NonPositiveVolume { cell, volume });
        }
        let cell_faces = geometry::cell_faces(&owner, &neighbor, n_cells);

        Ok(Self {
            points,
            faces,
            owner,
            neighbor,
            face_centers: face_geom.iter().map(|g| g.center).collect(),
            face_areas: face_geom.iter().map(|g| g.area).collect(),
            cell_volumes,
            cell_centers,
            cell_faces,
        })
    }

    pub fn n_points(&self) -> usize {
        self.points.len()
    }

    pub fn n_faces(&self) -> usize {
        self.faces.len()
    }

    pub fn n_internal_faces(&self) -> usize {
        self.neighbor.len()
    }

    pub fn n_cells(&self) -> usize {
        self.cell_volumes.len()
    }

    pub fn points(&self) -> &[Vector] {
        &self.points
    }

    pub fn owner(&self) -> &[usize] {
        &self.owner
    }

    pub fn neighbor(&self) -> &[usize] {
        &self.neighbor
    }

    pub fn face_centers(&self) -> &[Vector] {
        &self.face_centers
    }

    /// owner 外向きの面積ベクトル。
    pub fn face_areas(&self) -> &[Vector] {
        &self.face_areas
    }

    pub fn cell_volumes(&self) -> &[f64] {
        &self.cell_volumes
    }

    pub fn cell_centers(&self) -> &[Vector] {
        &self.cell_centers
    }

    pub fn cell_faces(&self) -> &[Vec<usize>] {
        &self.cell_faces
    }

    /// 領域全体の体積（測度）。
    pub fn total_volume(&self) -> f64 {
        self.cell_volumes.iter().sum()
    }

    pub fn is_internal_face(&self, face: usize) -> bool {
        face < self.neighbor.len()
    }
}

fn validate(
    points: &[Vector],
    faces: &[Vec<usize>],
    owner: &[usize],
    neighbor: &[usize],
    n_cells: usize,
) -> Result<(), MeshError> {
    if n_cells == 0 {
        return Err(MeshError::EmptyMesh);
    }
    if owner.len() != faces.len() {
        return Err(MeshError::OwnerLengthMismatch {
            expected: faces.len(),
            got: owner.len(),
        });
    }
    if neighbor.len() > faces.len() {
        return Err(MeshError::NeighborLengthMismatch {
            expected: faces.len(),
            got: neighbor.len(),
        });
    }
    for (face, &cell) in owner.iter().enumerate() {
        if cell >= n_cells {
            return Err(MeshError::OwnerIndexOutOfRange {
                face,
                cell,
                n_cells,
            });
        }
    }
    for (face, &cell) in neighbor.iter().enumerate() {
        if cell >= n_cells {
            return Err(MeshError::NeighborIndexOutOfRange {
                face,
                cell,
                n_cells,
            });
        }
    }
    for (face, f) in faces.iter().enumerate() {
        if f.len() < 3 {
            return Err(MeshError::DegenerateFace {
                face,
                n_points: f.len(),
            });
        }
        if let Some(&point) = f.iter().find(|&&p| p >= points.len()) {
            return Err(MeshError::PointIndexOutOfRange {
                face,
                point,
                n_points: points.len(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube() -> (Vec<Vector>, Vec<Vec<usize>>) {
        let points = vec![
            Vector::new(0.0, 0.0, 0.0),
            Vector::new(1.0, 0.0, 0.0),
            Vector::new(1.0, 1.0, 0.0),
            Vector::new(0.0, 1.0, 0.0),
            Vector::new(0.0, 0.0, 1.0),
            Vector::new(1.0, 0.0, 1.0),
            Vector::new(1.0, 1.0, 1.0),
            Vector::new(0.0, 1.0, 1.0),
        ];
        let faces = vec![
            vec![0, 3, 2, 1],
            vec![4, 5, 6, 7],
            vec![0, 1, 5, 4],
            vec![3, 7, 6, 2],
            vec![0, 4, 7, 3],
            vec![1, 2, 6, 5],
        ];
        (points, faces)
    }

    #[test]
    fn single_cube_mesh() {
        let (points, faces) = cube();
        let mesh = PolyMesh::new(points, faces, vec![0; 6], vec![], 1).unwrap();
        assert_eq!(mesh.n_cells(), 1);
        assert_eq!(mesh.n_internal_faces(), 0);
        assert!(!mesh.is_internal_face(0));
        assert!((mesh.total_volume() - 1.0).abs() < 1e-12);
        assert_eq!(mesh.cell_faces()[0].len(), 6);
    }

    #[test]
    fn rejects_owner_length_mismatch() {
        let (points, faces) = cube();
        let err = PolyMesh::new(points, faces, vec![0; 5], vec![], 1).unwrap_err();
        assert!(matches!(
            err,
            MeshError::OwnerLengthMismatch {
                expected: 6,
                got: 5
            }
        ));
    }

    #[test]
    fn rejects_out_of_range_point() {
        let (points, mut faces) = cube();
        faces[2][1] = 42;
        let err = PolyMesh::new(points, faces, vec![0; 6], vec![], 1).unwrap_err();
        assert!(matches!(
            err,
            MeshError::PointIndexOutOfRange {
                face: 2,
                point: 42,
                n_points: 8
            }
        ));
    }

    #[test]
    fn rejects_inverted_cell() {
        let (points, faces) = cube();
        let inverted = faces
            .into_iter()
            .map(|mut f| {
                f.reverse();
                f
            })
            .collect();
        let err = PolyMesh::new(points, inverted, vec![0; 6], vec![], 1).unwrap_err();
        assert!(matches!(err, MeshError::NonPositiveVolume { cell: 0, .. }));
    }

    #[test]
    fn rejects_empty_mesh() {
        let err = PolyMesh::new(vec![], vec![], vec![], vec![], 0).unwrap_err();
        assert!(matches!(err, MeshError::EmptyMesh));
    }
}
