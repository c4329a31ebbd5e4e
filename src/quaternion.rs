//! Quaternions for composing and interpolating rotations.
//!
//! Stored as `(w, x, y, z)` with `w` the scalar part. Products compose
//! right-to-left: `(a * b).rotate_vector(v)` rotates by `b` first, then `a`.

use crate::float_types::{PI, Real, tolerance};
use crate::matrix::{Matrix3, Matrix4};
use crate::transform::affine;
use crate::vector::Vector3;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use core::fmt;
use core::ops::{Add, Mul, MulAssign, Neg, Sub};

/// `|w|` at or above this is treated as the identity rotation by
/// [`Quaternion::exponentiate`]: the axis is numerically undefined.
const NEAR_IDENTITY_W: Real = 0.9999;

/// [`Quaternion::slerp`] blends linearly once the inputs are this close.
const SLERP_LINEAR_COS: Real = 0.9999;

/// Rounding slack on a unit dot product before [`Quaternion::angle_between`]
/// treats the inputs as exactly parallel or anti-parallel.
const PARALLEL_SLACK: Real = 4.0 * Real::EPSILON;

/// An element of the quaternion algebra.
///
/// Only [`Quaternion::rotation`] and [`Quaternion::angle_between`] promise a
/// unit result; the arithmetic operators work on any quaternion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub w: Real,
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl Quaternion {
    #[inline]
    pub const fn new(w: Real, x: Real, y: Real, z: Real) -> Self {
        Self { w, x, y, z }
    }

    /// Scalar part `w` and vector part `v`, stored as raw components.
    #[inline]
    pub const fn from_scalar_vector(w: Real, v: Vector3) -> Self {
        Self::new(w, v.x(), v.y(), v.z())
    }

    /// `(1, 0, 0, 0)`
    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// The vector part `(x, y, z)`.
    #[inline]
    pub const fn vector(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn dot(self, other: Self) -> Real {
        self.w * other.w + self.vector().dot(other.vector())
    }

    #[inline]
    pub fn length(self) -> Real {
        self.dot(self).sqrt()
    }

    /// Negate the vector part.
    #[inline]
    pub const fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// `conjugate / |q|²`, which is just the conjugate for a unit quaternion.
    pub fn inverse(self) -> Self {
        let norm_sq = self.dot(self);
        if norm_sq == 1.0 {
            self.conjugate()
        } else {
            self.conjugate() * (1.0 / norm_sq)
        }
    }

    /// Scale to unit length. The zero quaternion comes back as NaNs.
    #[inline]
    pub fn normalise(self) -> Self {
        self * (1.0 / self.length())
    }

    /// Rotation by `angle` radians about `axis` (normalised here).
    pub fn rotation(angle: Real, axis: Vector3) -> Self {
        let (s, c) = (angle / 2.0).sin_cos();
        Self::from_scalar_vector(c, axis.normalise() * s)
    }

    /// Raise the rotation to the power `p`, i.e. scale its angle by `p`.
    ///
    /// Near the identity (`|w| >= 0.9999`) the axis is undefined and the input
    /// is returned unchanged.
    pub fn exponentiate(self, p: Real) -> Self {
        if self.w.abs() >= NEAR_IDENTITY_W {
            return self;
        }
        let half_angle = self.w.acos();
        let new_half_angle = half_angle * p;
        let k = new_half_angle.sin() / half_angle.sin();
        Self::new(new_half_angle.cos(), self.x * k, self.y * k, self.z * k)
    }

    /// The unit quaternion turning the direction of `v1` onto that of `v2`.
    ///
    /// Parallel inputs give the identity. Anti-parallel inputs turn half a
    /// circle about `v1 × (1, 0, 0)`; when `v1` itself lies along the x axis
    /// that product vanishes and `(0, 1, 0)` is used as the reference instead.
    /// Both cases are matched to within a few ulps of the unit dot product, so
    /// even tiny real rotations go through the general formula.
    pub fn angle_between(v1: Vector3, v2: Vector3) -> Self {
        let n1 = v1.normalise();
        let n2 = v2.normalise();
        let d = n1.dot(n2);

        if d >= 1.0 - PARALLEL_SLACK {
            return Self::identity();
        }
        if d <= -1.0 + PARALLEL_SLACK {
            let mut axis = n1.cross(Vector3::x_axis());
            if axis.length() < tolerance() {
                log::debug!("angle_between: {n1:?} lies along the x axis, turning about y instead");
                axis = n1.cross(Vector3::y_axis());
            }
            return Self::rotation(PI, axis);
        }

        Self::from_scalar_vector(1.0 + d, n1.cross(n2)).normalise()
    }

    /// `q · (0, v) · q⁻¹`, keeping the vector part.
    pub fn rotate_vector(self, v: Vector3) -> Vector3 {
        (self * Self::from_scalar_vector(0.0, v) * self.inverse()).vector()
    }

    /// Spherical linear interpolation from `q1` (`t = 0`) to `q2` (`t = 1`)
    /// along the shorter arc.
    ///
    /// If the inputs sit in opposite hemispheres `q1` is negated first, so at
    /// `t = 0` the result is `-q1`, the same rotation.
    pub fn slerp(q1: Self, q2: Self, t: Real) -> Self {
        let mut from = q1;
        let mut cos_omega = q1.dot(q2);
        if cos_omega < 0.0 {
            from = -from;
            cos_omega = -cos_omega;
        }

        let (k1, k2) = if cos_omega > SLERP_LINEAR_COS {
            (1.0 - t, t)
        } else {
            let sin_omega = (1.0 - cos_omega * cos_omega).sqrt();
            let omega = sin_omega.atan2(cos_omega);
            let inv_sin = 1.0 / sin_omega;
            (((1.0 - t) * omega).sin() * inv_sin, (t * omega).sin() * inv_sin)
        };

        from * k1 + q2 * k2
    }

    /// The 4×4 homogeneous rotation matrix of a unit quaternion; equal to
    /// [`crate::transform::rotation`] for the same axis and angle.
    pub fn to_rotation_matrix(self) -> Matrix4 {
        let Quaternion { w, x, y, z } = self;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        let block = Matrix3::from_rows([
            [1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz), 2.0 * (xz + wy)],
            [2.0 * (xy + wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx)],
            [2.0 * (xz - wy), 2.0 * (yz + wx), 1.0 - 2.0 * (xx + yy)],
        ]);
        affine(block)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

/// Hamilton product.
impl Mul for Quaternion {
    type Output = Self;
    fn mul(self, o: Self) -> Self {
        Self::new(
            self.w * o.w - self.x * o.x - self.y * o.y - self.z * o.z,
            self.w * o.x + self.x * o.w + self.y * o.z - self.z * o.y,
            self.w * o.y + self.y * o.w + self.z * o.x - self.x * o.z,
            self.w * o.z + self.z * o.w + self.x * o.y - self.y * o.x,
        )
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, o: Self) {
        *self = *self * o;
    }
}

impl Mul<Real> for Quaternion {
    type Output = Self;
    fn mul(self, s: Real) -> Self {
        Self::new(self.w * s, self.x * s, self.y * s, self.z * s)
    }
}

impl MulAssign<Real> for Quaternion {
    fn mul_assign(&mut self, s: Real) {
        *self = *self * s;
    }
}

impl Add for Quaternion {
    type Output = Self;
    fn add(self, o: Self) -> Self {
        Self::new(self.w + o.w, self.x + o.x, self.y + o.y, self.z + o.z)
    }
}

impl Sub for Quaternion {
    type Output = Self;
    fn sub(self, o: Self) -> Self {
        Self::new(self.w - o.w, self.x - o.x, self.y - o.y, self.z - o.z)
    }
}

impl Neg for Quaternion {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {} ( {} {} {} ) ]", self.w, self.x, self.y, self.z)
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.w.abs_diff_eq(&other.w, epsilon)
            && self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.w.relative_eq(&other.w, epsilon, max_relative)
            && self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl UlpsEq for Quaternion {
    fn default_max_ulps() -> u32 {
        Real::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Real, max_ulps: u32) -> bool {
        self.w.ulps_eq(&other.w, epsilon, max_ulps)
            && self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}
