//! Column vectors.
//!
//! A vector is nothing more than a [`Matrix`] with one column, so everything a
//! matrix can do (addition, scaling, multiplication by a matrix on the left)
//! works on vectors unchanged. This module adds the operations that only make
//! sense for a single column.

use crate::float_types::{Real, tolerance};
use crate::matrix::Matrix;

pub type Vector<const N: usize> = Matrix<N, 1>;
pub type Vector2 = Vector<2>;
pub type Vector3 = Vector<3>;
pub type Vector4 = Vector<4>;

impl<const N: usize> Matrix<N, 1> {
    /// Σ selfᵢ·otherᵢ
    #[inline]
    pub fn dot(self, other: Self) -> Real {
        self.data[0].iter().zip(&other.data[0]).map(|(a, b)| a * b).sum()
    }

    /// Euclidean length, `sqrt(dot(self, self))`.
    #[inline]
    pub fn length(self) -> Real {
        self.dot(self).sqrt()
    }

    /// `self * (1 / length)`.
    ///
    /// There is no guard for the zero vector: it comes back as NaNs, exactly
    /// as IEEE division produces them. Use [`Matrix::try_normalise`] when the
    /// input can legitimately be zero.
    #[inline]
    pub fn normalise(self) -> Self {
        self * (1.0 / self.length())
    }

    /// [`Matrix::normalise`], or `None` if the length is within
    /// [`tolerance`] of zero (or not finite).
    pub fn try_normalise(self) -> Option<Self> {
        let len = self.length();
        if len <= tolerance() || !len.is_finite() {
            return None;
        }
        Some(self * (1.0 / len))
    }
}

impl Matrix<2, 1> {
    #[inline]
    pub const fn new(x: Real, y: Real) -> Self {
        Self::from_columns([[x, y]])
    }

    #[inline]
    pub const fn x(&self) -> Real {
        self.data[0][0]
    }

    #[inline]
    pub const fn y(&self) -> Real {
        self.data[0][1]
    }
}

impl Matrix<3, 1> {
    #[inline]
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Self::from_columns([[x, y, z]])
    }

    #[inline]
    pub const fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    #[inline]
    pub const fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn x(&self) -> Real {
        self.data[0][0]
    }

    #[inline]
    pub const fn y(&self) -> Real {
        self.data[0][1]
    }

    #[inline]
    pub const fn z(&self) -> Real {
        self.data[0][2]
    }

    /// Right-handed cross product; the result is orthogonal to both inputs.
    #[inline]
    pub const fn cross(self, other: Self) -> Self {
        let (x1, y1, z1) = (self.x(), self.y(), self.z());
        let (x2, y2, z2) = (other.x(), other.y(), other.z());
        Self::new(y1 * z2 - y2 * z1, z1 * x2 - z2 * x1, x1 * y2 - x2 * y1)
    }

    /// Append a homogeneous `w = 1`.
    #[inline]
    pub const fn to_homogeneous(self) -> Vector4 {
        Vector4::new(self.x(), self.y(), self.z(), 1.0)
    }
}

impl Matrix<4, 1> {
    #[inline]
    pub const fn new(x: Real, y: Real, z: Real, w: Real) -> Self {
        Self::from_columns([[x, y, z, w]])
    }

    #[inline]
    pub const fn x(&self) -> Real {
        self.data[0][0]
    }

    #[inline]
    pub const fn y(&self) -> Real {
        self.data[0][1]
    }

    #[inline]
    pub const fn z(&self) -> Real {
        self.data[0][2]
    }

    #[inline]
    pub const fn w(&self) -> Real {
        self.data[0][3]
    }

    /// Drop `w` without dividing by it.
    #[inline]
    pub const fn truncate(self) -> Vector3 {
        Vector3::new(self.x(), self.y(), self.z())
    }
}

/// Σ v1ᵢ·v2ᵢ
#[inline]
pub fn dot<const N: usize>(v1: Vector<N>, v2: Vector<N>) -> Real {
    v1.dot(v2)
}

/// sqrt(dot(v, v))
#[inline]
pub fn length<const N: usize>(v: Vector<N>) -> Real {
    v.length()
}

/// `v / length(v)`; see [`Matrix::normalise`] for the zero-length behaviour.
#[inline]
pub fn normalise<const N: usize>(v: Vector<N>) -> Vector<N> {
    v.normalise()
}

/// `(y1z2−y2z1, z1x2−z2x1, x1y2−x2y1)`
#[inline]
pub const fn cross(v1: Vector3, v2: Vector3) -> Vector3 {
    v1.cross(v2)
}
