//! The numeric kernel of a small 3D engine: fixed-size matrices and vectors,
//! quaternions, 4×4 transform builders and spherical coordinates.
//!
//! Every type here is a plain `Copy` value and every operation is a pure
//! function of its inputs, so values can be shared across threads freely.
//!
//! # Layout
//! [`Matrix`] stores its entries **column-major**. [`Matrix::as_slice`] hands
//! out that buffer directly, which is the order GL-style pipelines expect for
//! 4×4 transforms. All builders in [`transform`] are written for column
//! vectors (`M · v`).
//!
//! # Errors
//! Out-of-range indices, bad initialiser lengths and malformed minors are
//! caller bugs and panic with a [`MatrixError`] message (`try_*` twins return
//! it instead). Shape mismatches in arithmetic do not compile. The only
//! runtime failure is [`MatrixError::SingularMatrix`] from
//! [`Matrix::inverse`].
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **nalgebra**: `From` conversions between the kernel types and [`nalgebra`]'s
//!
//! # Example
//! ```
//! use vesper::{transform, Vector3};
//!
//! let m = transform::translation(Vector3::new(1.0, 2.0, 3.0));
//! let p = m * Vector3::new(0.0, 0.0, 0.0).to_homogeneous();
//! assert_eq!(p.truncate(), Vector3::new(1.0, 2.0, 3.0));
//! ```

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod matrix;
pub mod vector;
pub mod transform;
pub mod quaternion;
pub mod polar;

#[cfg(feature = "nalgebra")]
pub mod nalgebra_interop;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::MatrixError;
pub use matrix::{Matrix, Matrix2, Matrix3, Matrix4};
pub use polar::Polar;
pub use quaternion::Quaternion;
pub use vector::{Vector, Vector2, Vector3, Vector4};
