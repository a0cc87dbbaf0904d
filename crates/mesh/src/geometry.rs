use sobolev_types::FieldValue;
use sobolev_types::tensor::Vector;

/// 面の重心と面積ベクトル。面積ベクトルは owner セルの外向き。
#[derive(Debug, Clone, Copy)]
pub(crate) struct FaceGeometry {
    pub center: Vector,
    pub area: Vector,
}

/// 多角形面の重心と面積ベクトルをファン三角形分割で計算する。
///
/// 頂点は owner 側から見て反時計回りに並んでいる前提で、右手の法則により
/// owner 外向きの面積ベクトルを得る。
///
/// # Panics
///
/// `face` の各要素が `points` の有効なインデックスでない場合。
pub(crate) fn face_geometry(points: &[Vector], face: &[usize]) -> FaceGeometry {
    let n = face.len();

    // 参照点: 面頂点の単純平均
    let p_ref = face.iter().fold(Vector::zero(), |acc, &i| acc + points[i]) / n as f64;

    let mut area = Vector::zero();
    let mut weighted_center = Vector::zero();
    for (k, &i) in face.iter().enumerate() {
        let a = points[i];
        let b = points[face[(k + 1) % n]];
        let tri_area = (a - p_ref).cross(&(b - p_ref)) * 0.5;
        area += tri_area;
        weighted_center += (a + b + p_ref) / 3.0 * tri_area.mag();
    }

    let area_mag = area.mag();
    let center = if area_mag > 1e-30 {
        weighted_center / area_mag
    } else {
        p_ref
    };

    FaceGeometry { center, area }
}

/// 全セルの体積と重心をピラミッド分割で計算する。
///
/// 各面とセル参照点（所属面の重心平均）を頂点とするピラミッドの和をとる。
/// neighbor 側では面積ベクトルを反転して寄与させる。
///
/// # Panics
///
/// `owner` / `neighbor` の要素が `n_cells` 以上の場合、または
/// `neighbor.len() > faces.len()` の場合。
pub(crate) fn cell_geometry(
    faces: &[FaceGeometry],
    owner: &[usize],
    neighbor: &[usize],
    n_cells: usize,
) -> (Vec<f64>, Vec<Vector>) {
    let mut c_ref = vec![Vector::zero(); n_cells];
    let mut count = vec![0usize; n_cells];
    let sides = owner
        .iter()
        .enumerate()
        .map(|(f, &c)| (f, c, 1.0))
        .chain(neighbor.iter().enumerate().map(|(f, &c)| (f, c, -1.0)));

    for (f, c, _) in sides.clone() {
        c_ref[c] += faces[f].center;
        count[c] += 1;
    }
    for (r, &k) in c_ref.iter_mut().zip(&count) {
        if k > 0 {
            *r /= k as f64;
        }
    }

    let mut volumes = vec![0.0_f64; n_cells];
    let mut weighted = vec![Vector::zero(); n_cells];
    for (f, c, sign) in sides {
        let FaceGeometry { center, area } = faces[f];
        let pyr_vol = (area * sign) * (center - c_ref[c]) / 3.0;
        let pyr_center = c_ref[c] * 0.75 + center * 0.25;
        volumes[c] += pyr_vol;
        weighted[c] += pyr_center * pyr_vol;
    }

    let centers = volumes
        .iter()
        .zip(weighted)
        .zip(&c_ref)
        .map(|((&v, w), &r)| if v.abs() > 1e-30 { w / v } else { r })
        .collect();

    (volumes, centers)
}

/// 各セルに属する面インデックスを集める。内部面は両側のセルに現れる。
pub(crate) fn cell_faces(owner: &[usize], neighbor: &[usize], n_cells: usize) -> Vec<Vec<usize>> {
    let mut result = vec![Vec::new(); n_cells];
    for (f, &c) in owner.iter().enumerate() {
        result[c].push(f);
    }
    for (f, &c) in neighbor.iter().enumerate() {
        result[c].push(f);
    }
    result
}
