//! テスト用の構造格子メッシュ。
//!
//! 直方体領域を `nx × ny × nz` 個の六面体セルに分割する。
//! 内部面を先に、境界面を後に並べる。

use sobolev_types::tensor::Vector;

use crate::{MeshError, PolyMesh};

/// 原点を角とする辺長 `lengths` の直方体を `cells` 分割したメッシュ。
pub fn structured_box(cells: [usize; 3], lengths: [f64; 3]) -> Result<PolyMesh, MeshError> {
    let [nx, ny, nz] = cells;
    let pt = |i: usize, j: usize, k: usize| i + (nx + 1) * (j + (ny + 1) * k);
    let cell = |i: usize, j: usize, k: usize| i + nx * (j + ny * k);

    // 各軸の正方向を法線とする四角形面（右手の法則で外向き）
    let x_quad = |i, j, k| vec![pt(i, j, k), pt(i, j + 1, k), pt(i, j + 1, k + 1), pt(i, j, k + 1)];
    let y_quad = |i, j, k| vec![pt(i, j, k), pt(i, j, k + 1), pt(i + 1, j, k + 1), pt(i + 1, j, k)];
    let z_quad = |i, j, k| vec![pt(i, j, k), pt(i + 1, j, k), pt(i + 1, j + 1, k), pt(i, j + 1, k)];

    let mut points = Vec::with_capacity((nx + 1) * (ny + 1) * (nz + 1));
    for k in 0..=nz {
        for j in 0..=ny {
            for i in 0..=nx {
                points.push(Vector::new(
                    lengths[0] * i as f64 / nx as f64,
                    lengths[1] * j as f64 / ny as f64,
                    lengths[2] * k as f64 / nz as f64,
                ));
            }
        }
    }

    let mut faces = Vec::new();
    let mut owner = Vec::new();
    let mut neighbor = Vec::new();

    for k in 0..nz {
        for j in 0..ny {
            for i in 1..nx {
                faces.push(x_quad(i, j, k));
                owner.push(cell(i - 1, j, k));
                neighbor.push(cell(i, j, k));
            }
        }
    }
    for k in 0..nz {
        for j in 1..ny {
            for i in 0..nx {
                faces.push(y_quad(i, j, k));
                owner.push(cell(i, j - 1, k));
                neighbor.push(cell(i, j, k));
            }
        }
    }
    for k in 1..nz {
        for j in 0..ny {
            for i in 0..nx {
                faces.push(z_quad(i, j, k));
                owner.push(cell(i, j, k - 1));
                neighbor.push(cell(i, j, k));
            }
        }
    }

    let mut boundary = |quad: Vec<usize>, c: usize, outward_positive: bool| {
        let mut quad = quad;
        if !outward_positive {
            quad.reverse();
        }
        faces.push(quad);
        owner.push(c);
    };
    for k in 0..nz {
        for j in 0..ny {
            boundary(x_quad(0, j, k), cell(0, j, k), false);
            boundary(x_quad(nx, j, k), cell(nx - 1, j, k), true);
        }
    }
    for k in 0..nz {
        for i in 0..nx {
            boundary(y_quad(i, 0, k), cell(i, 0, k), false);
            boundary(y_quad(i, ny, k), cell(i, ny - 1, k), true);
        }
    }
    for j in 0..ny {
        for i in 0..nx {
            boundary(z_quad(i, j, 0), cell(i, j, 0), false);
            boundary(z_quad(i, j, nz), cell(i, j, nz - 1), true);
        }
    }

    PolyMesh::new(points, faces, owner, neighbor, nx * ny * nz)
}

/// 単位立方体 `[0, 1]^3` を `n^3` 分割したメッシュ。
pub fn unit_cube(n: usize) -> Result<PolyMesh, MeshError> {
    structured_box([n, n, n], [1.0, 1.0, 1.0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use sobolev_types::FieldValue;

    #[test]
    fn unit_cube_counts() {
        let mesh = unit_cube(3).unwrap();
        assert_eq!(mesh.n_cells(), 27);
        assert_eq!(mesh.n_points(), 64);
        // 内部面 3 方向 × 2 × 9, 境界面 6 × 9
        assert_eq!(mesh.n_internal_faces(), 54);
        assert_eq!(mesh.n_faces(), 108);
    }

    #[test]
    fn unit_cube_volumes() {
        let mesh = unit_cube(4).unwrap();
        assert!((mesh.total_volume() - 1.0).abs() < 1e-12);
        for &v in mesh.cell_volumes() {
            assert!((v - 1.0 / 64.0).abs() < 1e-14);
        }
    }

    #[test]
    fn every_cell_is_closed() {
        let mesh = structured_box([2, 3, 1], [2.0, 1.0, 0.5]).unwrap();
        for (c, faces) in mesh.cell_faces().iter().enumerate() {
            let sum = faces.iter().fold(Vector::zero(), |acc, &f| {
                let s = mesh.face_areas()[f];
                if mesh.owner()[f] == c { acc + s } else { acc - s }
            });
            assert!(sum.mag() < 1e-13, "cell {c} surface not closed: {sum:?}");
        }
    }

    #[test]
    fn internal_faces_point_from_owner_to_neighbor() {
        let mesh = unit_cube(2).unwrap();
        for f in 0..mesh.n_internal_faces() {
            let d = mesh.cell_centers()[mesh.neighbor()[f]] - mesh.cell_centers()[mesh.owner()[f]];
            assert!(d * mesh.face_areas()[f] > 0.0, "face {f} points backwards");
        }
    }
}
