/// 3 成分ベクトル `(x, y, z)`。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector([f64; 3]);

impl Vector {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self([x, y, z])
    }

    #[inline]
    pub const fn as_array(&self) -> &[f64; 3] {
        &self.0
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.0[0]
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.0[1]
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.0[2]
    }
}

impl From<[f64; 3]> for Vector {
    fn from(a: [f64; 3]) -> Self {
        Self(a)
    }
}

/// 行優先で格納した 3×3 の 2 階テンソル。
///
/// 成分の並びは `[xx, xy, xz, yx, yy, yz, zx, zy, zz]`。
/// 勾配テンソルでは `T[i][j] = ∂u_i/∂x_j` の規約に従う。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tensor([f64; 9]);

impl Tensor {
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        xx: f64,
        xy: f64,
        xz: f64,
        yx: f64,
        yy: f64,
        yz: f64,
        zx: f64,
        zy: f64,
        zz: f64,
    ) -> Self {
        Self([xx, xy, xz, yx, yy, yz, zx, zy, zz])
    }

    /// 行ベクトルから組み立てる。
    #[inline]
    pub const fn from_rows(rows: [Vector; 3]) -> Self {
        let [r0, r1, r2] = rows;
        Self([
            r0.x(),
            r0.y(),
            r0.z(),
            r1.x(),
            r1.y(),
            r1.z(),
            r2.x(),
            r2.y(),
            r2.z(),
        ])
    }

    #[inline]
    pub const fn as_array(&self) -> &[f64; 9] {
        &self.0
    }

    /// `i` 行目をベクトルとして返す。
    ///
    /// # Panics
    ///
    /// `i >= 3` の場合。
    #[inline]
    pub fn row(&self, i: usize) -> Vector {
        Vector::new(self.0[3 * i], self.0[3 * i + 1], self.0[3 * i + 2])
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        let a = &self.0;
        Self([a[0], a[3], a[6], a[1], a[4], a[7], a[2], a[5], a[8]])
    }

    #[inline]
    pub fn trace(&self) -> f64 {
        self.0[0] + self.0[4] + self.0[8]
    }
}

impl From<[f64; 9]> for Tensor {
    fn from(a: [f64; 9]) -> Self {
        Self(a)
    }
}
