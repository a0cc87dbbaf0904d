use sobolev_mesh::PolyMesh;
use sobolev_types::tensor::{Tensor, Vector};
use sobolev_types::{FieldValue, HasCurl, HasDiv, HasGrad};

use crate::assembler::BoundaryRule;

/// Green–Gauss 再構成。
///
/// セル平均 `(1/V) Σ_f flux(φ_f, S_f)` を計算する。内部面の値 `φ_f` は
/// 面中心までの距離の逆比で両側のセル値を線形補間する。境界面の値は
/// `rule` に従う。`flux` は [`HasGrad`] / [`HasDiv`] / [`HasCurl`] の
/// `gauss_flux` で、どの演算子を再構成するかを決める。
pub(crate) fn gauss<T, O>(
    mesh: &PolyMesh,
    values: &[T],
    rule: BoundaryRule,
    flux: fn(&T, &Vector) -> O,
) -> Vec<O>
where
    T: FieldValue,
    O: FieldValue,
{
    let owner = mesh.owner();
    let neighbor = mesh.neighbor();
    let areas = mesh.face_areas();
    let centers = mesh.cell_centers();
    let face_centers = mesh.face_centers();

    let mut acc = vec![O::zero(); mesh.n_cells()];

    for (f, (&o, &n)) in owner.iter().zip(neighbor).enumerate() {
        let d_o = (face_centers[f] - centers[o]).mag();
        let d_n = (centers[n] - face_centers[f]).mag();
        let w = d_n / (d_o + d_n);
        let phi = values[o] * w + values[n] * (1.0 - w);
        let q = flux(&phi, &areas[f]);
        acc[o] = acc[o] + q;
        acc[n] = acc[n] - q;
    }

    for f in mesh.n_internal_faces()..mesh.n_faces() {
        let o = owner[f];
        let phi = match rule {
            BoundaryRule::ZeroGradient => values[o],
            BoundaryRule::Homogeneous => T::zero(),
        };
        acc[o] = acc[o] + flux(&phi, &areas[f]);
    }

    acc.into_iter()
        .zip(mesh.cell_volumes())
        .map(|(q, &v)| q * (1.0 / v))
        .collect()
}

pub(crate) fn grad_scalar(mesh: &PolyMesh, values: &[f64], rule: BoundaryRule) -> Vec<Vector> {
    gauss(mesh, values, rule, <f64 as HasGrad>::gauss_flux)
}

pub(crate) fn grad_vector(
    mesh: &PolyMesh,
    values: &[Vector],
    rule: BoundaryRule,
) -> Vec<Tensor> {
    gauss(mesh, values, rule, <Vector as HasGrad>::gauss_flux)
}

pub(crate) fn div_vector(mesh: &PolyMesh, values: &[Vector], rule: BoundaryRule) -> Vec<f64> {
    gauss(mesh, values, rule, <Vector as HasDiv>::gauss_flux)
}

pub(crate) fn div_tensor(
    mesh: &PolyMesh,
    values: &[Tensor],
    rule: BoundaryRule,
) -> Vec<Vector> {
    gauss(mesh, values, rule, <Tensor as HasDiv>::gauss_flux)
}

pub(crate) fn curl_vector(mesh: &PolyMesh, values: &[Vector], rule: BoundaryRule) -> Vec<Vector> {
    gauss(mesh, values, rule, <Vector as HasCurl>::gauss_flux)
}
