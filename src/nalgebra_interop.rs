//! Conversions to and from [`nalgebra`] for callers that already live there.
//!
//! Both sides store column-major, so matrices convert by copying the flat
//! buffer as is.

use crate::float_types::Real;
use crate::matrix::Matrix;
use crate::quaternion::Quaternion;
use nalgebra::SMatrix;

impl<const R: usize, const C: usize> From<Matrix<R, C>> for SMatrix<Real, R, C> {
    fn from(m: Matrix<R, C>) -> Self {
        SMatrix::from_column_slice(m.as_slice())
    }
}

impl<const R: usize, const C: usize> From<SMatrix<Real, R, C>> for Matrix<R, C> {
    fn from(m: SMatrix<Real, R, C>) -> Self {
        Matrix::from_column_slice(m.as_slice())
    }
}

impl From<Quaternion> for nalgebra::Quaternion<Real> {
    fn from(q: Quaternion) -> Self {
        nalgebra::Quaternion::new(q.w, q.x, q.y, q.z)
    }
}

impl From<nalgebra::Quaternion<Real>> for Quaternion {
    fn from(q: nalgebra::Quaternion<Real>) -> Self {
        Quaternion::new(q.w, q.i, q.j, q.k)
    }
}
