//! 4×4 homogeneous transform builders.
//!
//! Every builder is written in logical `(row, col)` terms for column vectors,
//! `v' = M · v`: translation sits in the last column and the perspective
//! divisor in the last row. Because [`Matrix`] stores column-major, the
//! buffer from [`Matrix::as_slice`] is already in the order a GL-style
//! `uniformMatrix4fv(.., transpose = false, ..)` expects.

use crate::float_types::Real;
use crate::matrix::{Matrix, Matrix3, Matrix4};
use crate::vector::Vector3;

/// `D`×`D` identity.
#[inline]
pub fn identity<const D: usize>() -> Matrix<D, D> {
    Matrix::identity()
}

/// Embed a 3×3 linear block into a 4×4 with `(0, 0, 0, 1)` as the last row
/// and column.
pub(crate) fn affine(block: Matrix3) -> Matrix4 {
    Matrix4::from_fn(|r, c| match (r, c) {
        (3, 3) => 1.0,
        (3, _) | (_, 3) => 0.0,
        _ => block.entry(r, c),
    })
}

/// Counter-clockwise rotation by `angle` radians about `axis` (Rodrigues).
///
/// `axis` is normalised first; a zero axis yields NaNs.
pub fn rotation(axis: Vector3, angle: Real) -> Matrix4 {
    let a = axis.normalise();
    let (x, y, z) = (a.x(), a.y(), a.z());
    let (s, c) = angle.sin_cos();
    let omc = 1.0 - c;

    affine(Matrix3::from_rows([
        [c + x * x * omc, x * y * omc - z * s, x * z * omc + y * s],
        [y * x * omc + z * s, c + y * y * omc, y * z * omc - x * s],
        [z * x * omc - y * s, z * y * omc + x * s, c + z * z * omc],
    ]))
}

/// Scale by `factor` along `axis`, leaving the plane orthogonal to it alone.
///
/// `axis` is normalised first; a zero axis yields NaNs.
pub fn scale(axis: Vector3, factor: Real) -> Matrix4 {
    let a = axis.normalise();
    let (x, y, z) = (a.x(), a.y(), a.z());
    let k = factor - 1.0;

    affine(Matrix3::from_rows([
        [x * x * k + 1.0, x * y * k, x * z * k],
        [x * y * k, y * y * k + 1.0, y * z * k],
        [x * z * k, y * z * k, z * z * k + 1.0],
    ]))
}

/// Identity with `offset` in the last column.
pub fn translation(offset: Vector3) -> Matrix4 {
    let mut m = Matrix4::identity();
    *m.entry_mut(0, 3) = offset.x();
    *m.entry_mut(1, 3) = offset.y();
    *m.entry_mut(2, 3) = offset.z();
    m
}

/// Right-handed perspective projection looking down `-z`, producing
/// `w_clip = -z_view`.
///
/// `fov_x` is the full horizontal field of view in radians and `aspect` is
/// width over height, so the vertical zoom is `aspect * zoom_x`.
pub fn perspective(fov_x: Real, aspect: Real, near: Real, far: Real) -> Matrix4 {
    let zoom_x = 1.0 / (fov_x / 2.0).tan();
    let zoom_y = aspect * zoom_x;
    let depth = far - near;

    Matrix4::from_rows([
        [zoom_x, 0.0, 0.0, 0.0],
        [0.0, zoom_y, 0.0, 0.0],
        [0.0, 0.0, -(far + near) / depth, -(2.0 * near * far) / depth],
        [0.0, 0.0, -1.0, 0.0],
    ])
}

/// Orthographic projection of a `width`×`height` box centred on the view axis.
pub fn orthographic(width: Real, height: Real, near: Real, far: Real) -> Matrix4 {
    let depth = far - near;

    Matrix4::from_rows([
        [2.0 / width, 0.0, 0.0, 0.0],
        [0.0, 2.0 / height, 0.0, 0.0],
        [0.0, 0.0, -2.0 / depth, -(far + near) / depth],
        [0.0, 0.0, 0.0, 1.0],
    ])
}
