//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use vesper::{Matrix4, Vector3, float_types::Real};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Apply a 4×4 transform to a point (w = 1) and drop w again.
pub fn transform_point(m: Matrix4, p: Vector3) -> Vector3 {
    (m * p.to_homogeneous()).truncate()
}

/// A well-conditioned 4×4 with no zero entries, handy for inverse checks.
pub fn sample4() -> Matrix4 {
    Matrix4::from_rows([
        [4.0, 3.0, 2.0, 1.0],
        [1.0, 5.0, 2.0, 3.0],
        [2.0, 1.0, 6.0, 2.0],
        [3.0, 2.0, 1.0, 7.0],
    ])
}

/// A spread of directions that avoids the coordinate axes.
pub fn sample_directions() -> Vec<Vector3> {
    vec![
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::new(-0.5, 0.25, 2.0),
        Vector3::new(3.0, -1.0, 0.5),
        Vector3::new(-2.0, -2.0, -1.0),
        Vector3::new(0.1, 4.0, -0.3),
    ]
}
