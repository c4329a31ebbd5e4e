//! Spherical coordinates: radius, heading (azimuth) and elevation.
//!
//! The frame matches the rest of the kernel: heading 0 looks down `+z`,
//! positive heading turns towards `+x`, and positive elevation points towards
//! `-y`.

use crate::float_types::{FRAC_PI_2, PI, Real, TAU};
use crate::vector::{Vector3, Vector4};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use core::fmt;

/// Fraction of π/2 beyond which an elevation counts as sitting on a pole,
/// where heading is meaningless.
const POLE_BAND: Real = 0.9999;

/// A point in spherical coordinates.
///
/// Any values may be stored. Only after [`Polar::canonise`] are they in the
/// canonical ranges: `radius >= 0`, `heading ∈ (-π, π]`,
/// `elevation ∈ [-π/2, π/2]`, and `heading == 0` on the poles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Polar {
    pub radius: Real,
    pub heading: Real,
    pub elevation: Real,
}

impl Polar {
    #[inline]
    pub const fn new(radius: Real, heading: Real, elevation: Real) -> Self {
        Self {
            radius,
            heading,
            elevation,
        }
    }

    /// Bring the angles into their canonical ranges in place.
    ///
    /// 1. A zero radius zeroes both angles and stops.
    /// 2. A negative radius is made positive and both angles are shifted by π.
    /// 3. An elevation past a pole is carried over it: heading flips by π and
    ///    the elevation is reflected back into `[-π/2, π/2]`.
    /// 4. On a pole heading is forced to 0; elsewhere it is wrapped into
    ///    `(-π, π]`.
    ///
    /// Running it twice changes nothing.
    pub fn canonise(&mut self) {
        if self.radius == 0.0 {
            self.heading = 0.0;
            self.elevation = 0.0;
            return;
        }
        if self.radius < 0.0 {
            self.radius = -self.radius;
            self.heading += PI;
            self.elevation += PI;
        }
        if self.elevation.abs() > FRAC_PI_2 {
            let wrapped = (self.elevation + FRAC_PI_2).rem_euclid(TAU);
            if wrapped > PI {
                self.heading += PI;
                self.elevation = 3.0 * FRAC_PI_2 - wrapped;
            } else {
                self.elevation = wrapped - FRAC_PI_2;
            }
        }
        if self.elevation.abs() > FRAC_PI_2 * POLE_BAND {
            self.heading = 0.0;
        } else if self.heading <= -PI || self.heading > PI {
            self.heading = PI - (PI - self.heading).rem_euclid(TAU);
            // rem_euclid can round up to exactly TAU
            if self.heading <= -PI {
                self.heading += TAU;
            }
        }
    }

    /// By-value form of [`Polar::canonise`].
    #[inline]
    pub fn canonised(mut self) -> Self {
        self.canonise();
        self
    }
}

/// Degrees to radians.
#[inline]
pub fn radians(degrees: Real) -> Real {
    degrees * (PI / 180.0)
}

/// Radians to degrees.
#[inline]
pub fn degrees(radians: Real) -> Real {
    radians * (180.0 / PI)
}

/// `(r·cos(e)·sin(h), -r·sin(e), r·cos(e)·cos(h))`
pub fn cartesian3(p: Polar) -> Vector3 {
    let (sin_h, cos_h) = p.heading.sin_cos();
    let (sin_e, cos_e) = p.elevation.sin_cos();
    Vector3::new(
        p.radius * cos_e * sin_h,
        -p.radius * sin_e,
        p.radius * cos_e * cos_h,
    )
}

/// [`cartesian3`] with a homogeneous `w = 1`.
#[inline]
pub fn cartesian4(p: Polar) -> Vector4 {
    cartesian3(p).to_homogeneous()
}

/// Inverse of [`cartesian3`]; the result is already canonised.
///
/// The zero vector maps to `Polar::default()`.
pub fn spherical(v: Vector3) -> Polar {
    let radius = v.length();
    let mut p = Polar::new(
        radius,
        v.x().atan2(v.z()),
        (-v.y() / radius).clamp(-1.0, 1.0).asin(),
    );
    p.canonise();
    p
}

impl From<Polar> for Vector3 {
    fn from(p: Polar) -> Self {
        cartesian3(p)
    }
}

impl From<Vector3> for Polar {
    fn from(v: Vector3) -> Self {
        spherical(v)
    }
}

impl fmt::Display for Polar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {} {} {} )", self.radius, self.heading, self.elevation)
    }
}

impl AbsDiffEq for Polar {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.radius.abs_diff_eq(&other.radius, epsilon)
            && self.heading.abs_diff_eq(&other.heading, epsilon)
            && self.elevation.abs_diff_eq(&other.elevation, epsilon)
    }
}

impl RelativeEq for Polar {
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.radius.relative_eq(&other.radius, epsilon, max_relative)
            && self.heading.relative_eq(&other.heading, epsilon, max_relative)
            && self.elevation.relative_eq(&other.elevation, epsilon, max_relative)
    }
}

impl UlpsEq for Polar {
    fn default_max_ulps() -> u32 {
        Real::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Real, max_ulps: u32) -> bool {
        self.radius.ulps_eq(&other.radius, epsilon, max_ulps)
            && self.heading.ulps_eq(&other.heading, epsilon, max_ulps)
            && self.elevation.ulps_eq(&other.elevation, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_wrap_lands_in_half_open_range() {
        let mut p = Polar::new(1.0, -PI, 0.0);
        p.canonise();
        assert_eq!(p.heading, PI);

        let mut p = Polar::new(1.0, 3.0 * PI, 0.0);
        p.canonise();
        assert_eq!(p.heading, PI);

        let mut p = Polar::new(1.0, -62.83185307179586, 2.0);
        p.canonise();
        assert!(p.heading <= PI);
        assert_eq!(p.canonised(), p);
    }

    #[test]
    fn pole_band_zeroes_heading() {
        let mut p = Polar::new(2.0, 1.0, FRAC_PI_2);
        p.canonise();
        assert_eq!(p.heading, 0.0);
        assert_eq!(p.elevation, FRAC_PI_2);
    }
}
