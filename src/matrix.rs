//! Fixed-shape dense matrices.
//!
//! The shape of a [`Matrix`] is part of its type, so adding a 3×3 to a 4×4 or
//! multiplying a 2×3 by a 2×3 is rejected by the compiler instead of at run time.

use crate::errors::{MatrixError, Result};
use crate::float_types::Real;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use core::fmt;
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// A dense `R`×`C` matrix of [`Real`]s.
///
/// # Layout
/// Entries are stored **column-major**: the flat view returned by
/// [`Matrix::as_slice`] holds entry `(r, c)` at index `c * R + r`. A 4×4
/// transform built by [`crate::transform`] can therefore be handed to a
/// GL-style pipeline without transposing.
///
/// Equality (`==`) is exact. Use the [`approx`] traits for tolerant comparisons.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix<const R: usize, const C: usize> {
    pub(crate) data: [[Real; R]; C],
}

pub type Matrix2 = Matrix<2, 2>;
pub type Matrix3 = Matrix<3, 3>;
pub type Matrix4 = Matrix<4, 4>;

impl<const R: usize, const C: usize> Matrix<R, C> {
    const NON_EMPTY: () = assert!(R >= 1 && C >= 1, "a matrix needs at least one row and one column");

    /// The all-zero matrix.
    #[inline]
    pub const fn zeros() -> Self {
        let () = Self::NON_EMPTY;
        Self { data: [[0.0; R]; C] }
    }

    /// Build a matrix from nested row arrays, `rows[r][c]`.
    #[inline]
    pub fn from_rows(rows: [[Real; C]; R]) -> Self {
        Self::from_fn(|r, c| rows[r][c])
    }

    /// Build a matrix from nested column arrays, `columns[c][r]`.
    #[inline]
    pub const fn from_columns(columns: [[Real; R]; C]) -> Self {
        let () = Self::NON_EMPTY;
        Self { data: columns }
    }

    /// Build a matrix by evaluating `f(row, col)` for every entry.
    pub fn from_fn<F: FnMut(usize, usize) -> Real>(mut f: F) -> Self {
        let mut m = Self::zeros();
        for r in 0..R {
            for c in 0..C {
                m.data[c][r] = f(r, c);
            }
        }
        m
    }

    /// Fill from exactly `R * C` values given in row-major order.
    ///
    /// # Panics
    /// With [`MatrixError::WrongInitLength`] if `values.len() != R * C`.
    #[track_caller]
    pub fn from_row_slice(values: &[Real]) -> Self {
        match Self::try_from_row_slice(values) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }

    /// Fallible form of [`Matrix::from_row_slice`].
    pub fn try_from_row_slice(values: &[Real]) -> Result<Self> {
        Self::check_init_length(values)?;
        Ok(Self::from_fn(|r, c| values[r * C + c]))
    }

    /// Fill from exactly `R * C` values given in column-major order, the same
    /// order [`Matrix::as_slice`] returns.
    ///
    /// # Panics
    /// With [`MatrixError::WrongInitLength`] if `values.len() != R * C`.
    #[track_caller]
    pub fn from_column_slice(values: &[Real]) -> Self {
        match Self::check_init_length(values) {
            Ok(()) => Self::from_fn(|r, c| values[c * R + r]),
            Err(e) => panic!("{e}"),
        }
    }

    const fn check_init_length(values: &[Real]) -> Result<()> {
        if values.len() != R * C {
            return Err(MatrixError::WrongInitLength {
                expected: R * C,
                found: values.len(),
            });
        }
        Ok(())
    }

    /// `(rows, columns)`
    #[inline]
    pub const fn shape(&self) -> (usize, usize) {
        (R, C)
    }

    #[inline]
    pub const fn is_square(&self) -> bool {
        R == C
    }

    const fn check_index(row: usize, col: usize) -> Result<()> {
        if row >= R || col >= C {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows: R,
                cols: C,
            });
        }
        Ok(())
    }

    /// Read entry `(row, col)`.
    ///
    /// # Panics
    /// With [`MatrixError::IndexOutOfRange`] if `row >= R` or `col >= C`.
    #[inline]
    #[track_caller]
    pub fn entry(&self, row: usize, col: usize) -> Real {
        match Self::check_index(row, col) {
            Ok(()) => self.data[col][row],
            Err(e) => panic!("{e}"),
        }
    }

    /// Mutable access to entry `(row, col)`.
    ///
    /// # Panics
    /// With [`MatrixError::IndexOutOfRange`] if `row >= R` or `col >= C`.
    #[inline]
    #[track_caller]
    pub fn entry_mut(&mut self, row: usize, col: usize) -> &mut Real {
        match Self::check_index(row, col) {
            Ok(()) => &mut self.data[col][row],
            Err(e) => panic!("{e}"),
        }
    }

    /// Fallible form of [`Matrix::entry`].
    #[inline]
    pub fn try_entry(&self, row: usize, col: usize) -> Result<Real> {
        Self::check_index(row, col).map(|()| self.data[col][row])
    }

    /// Entry `(row, col)`, or `None` when out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Real> {
        self.try_entry(row, col).ok()
    }

    /// Flat, contiguous, **column-major** view of all entries.
    #[inline]
    pub fn as_slice(&self) -> &[Real] {
        self.data.as_flattened()
    }

    /// Mutable counterpart of [`Matrix::as_slice`], same column-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Real] {
        self.data.as_flattened_mut()
    }

    /// Pointer to the first entry of the column-major buffer, for uploading.
    #[inline]
    pub const fn as_ptr(&self) -> *const Real {
        self.data.as_ptr().cast()
    }

    /// Row `r` as a 1×C matrix.
    #[track_caller]
    pub fn row(&self, r: usize) -> Matrix<1, C> {
        Matrix::from_fn(|_, c| self.entry(r, c))
    }

    /// Column `c` as an R×1 vector.
    #[track_caller]
    pub fn column(&self, c: usize) -> Matrix<R, 1> {
        Matrix::from_fn(|r, _| self.entry(r, c))
    }

    /// Apply `f` to every entry.
    pub fn map<F: FnMut(Real) -> Real>(&self, mut f: F) -> Self {
        Self::from_fn(|r, c| f(self.data[c][r]))
    }

    /// Swap rows and columns: `transpose().entry(j, i) == entry(i, j)`.
    pub fn transpose(&self) -> Matrix<C, R> {
        Matrix::from_fn(|r, c| self.data[r][c])
    }

    /// The submatrix left after deleting `row` and `col`.
    ///
    /// Only defined for square matrices of at least 3×3; the output shape must
    /// be one smaller in each dimension, e.g. `m4.minor::<3, 3>(0, 1)`.
    ///
    /// # Panics
    /// With [`MatrixError::NonSquare`] when `R != C`,
    /// [`MatrixError::DimensionMismatch`] when `R < 3` or the requested output
    /// shape is not `(R - 1, C - 1)`, and [`MatrixError::IndexOutOfRange`] for a
    /// bad `row`/`col`.
    #[track_caller]
    pub fn minor<const MR: usize, const MC: usize>(&self, row: usize, col: usize) -> Matrix<MR, MC> {
        match self.try_minor(row, col) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }

    /// Fallible form of [`Matrix::minor`].
    pub fn try_minor<const MR: usize, const MC: usize>(
        &self,
        row: usize,
        col: usize,
    ) -> Result<Matrix<MR, MC>> {
        if R != C {
            return Err(MatrixError::NonSquare { rows: R, cols: C });
        }
        if R < 3 || MR + 1 != R || MC + 1 != C {
            return Err(MatrixError::DimensionMismatch {
                operation: "minor",
                rows: R,
                cols: C,
            });
        }
        Self::check_index(row, col)?;
        Ok(Matrix::from_fn(|r, c| {
            let src_r = if r >= row { r + 1 } else { r };
            let src_c = if c >= col { c + 1 } else { c };
            self.data[src_c][src_r]
        }))
    }
}

impl<const N: usize> Matrix<N, N> {
    /// 1 on the diagonal, 0 elsewhere.
    pub fn identity() -> Self {
        Self::from_fn(|r, c| if r == c { 1.0 } else { 0.0 })
    }

    /// Determinant by Laplace expansion along the first row.
    ///
    /// This is factorial in `N`. It is meant for the 2×2 to 4×4 matrices a
    /// renderer handles; anything bigger wants an LU decomposition instead.
    pub fn determinant(&self) -> Real {
        let all: [usize; N] = core::array::from_fn(|i| i);
        self.laplace(&all, &all)
    }

    /// Signed minor determinant, `(-1)^(row+col) * det(minor(row, col))`.
    ///
    /// # Panics
    /// With [`MatrixError::IndexOutOfRange`] for a bad `row`/`col`.
    #[track_caller]
    pub fn cofactor(&self, row: usize, col: usize) -> Real {
        if let Err(e) = Self::check_index(row, col) {
            panic!("{e}");
        }
        let (rows, n) = Self::indices_without(row);
        let (cols, _) = Self::indices_without(col);
        let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        sign * self.laplace(&rows[..n], &cols[..n])
    }

    /// Inverse through the adjugate: `transpose(cofactors) / determinant`.
    ///
    /// Returns [`MatrixError::SingularMatrix`] when the determinant is zero
    /// (or not finite). Same factorial cost as [`Matrix::determinant`].
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            log::debug!("refusing to invert {}x{} matrix with determinant {}", N, N, det);
            return Err(MatrixError::SingularMatrix);
        }
        let cofactors = Self::from_fn(|r, c| self.cofactor(r, c));
        Ok(cofactors.transpose() * (1.0 / det))
    }

    /// `0..N` with `skip` removed, plus how many indices are left.
    fn indices_without(skip: usize) -> ([usize; N], usize) {
        let mut out = [0; N];
        let mut n = 0;
        for i in (0..N).filter(|&i| i != skip) {
            out[n] = i;
            n += 1;
        }
        (out, n)
    }

    /// Determinant of the square submatrix picked out by `rows` × `cols`.
    ///
    /// A minor is carried as the surviving row/column indices rather than a
    /// copied matrix, which lets the recursion stay inside one const size.
    fn laplace(&self, rows: &[usize], cols: &[usize]) -> Real {
        let at = |r: usize, c: usize| self.data[c][r];
        match (rows, cols) {
            ([], _) => 1.0,
            ([r], [c, ..]) => at(*r, *c),
            ([r0, r1], [c0, c1, ..]) => at(*r0, *c0) * at(*r1, *c1) - at(*r0, *c1) * at(*r1, *c0),
            ([top, rest @ ..], _) => {
                let mut det = 0.0;
                let mut sub = [0; N];
                for (j, &col) in cols.iter().enumerate() {
                    let mut n = 0;
                    for (k, &other) in cols.iter().enumerate() {
                        if k != j {
                            sub[n] = other;
                            n += 1;
                        }
                    }
                    let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
                    det += sign * at(*top, col) * self.laplace(rest, &sub[..n]);
                }
                det
            },
        }
    }
}

impl<const R: usize, const C: usize> Default for Matrix<R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const R: usize, const C: usize> Index<(usize, usize)> for Matrix<R, C> {
    type Output = Real;

    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &Real {
        match Self::check_index(row, col) {
            Ok(()) => &self.data[col][row],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<R, C> {
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Real {
        self.entry_mut(row, col)
    }
}

/* ------------------------------- arithmetic ------------------------------- */

impl<const R: usize, const C: usize> Add for Matrix<R, C> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::from_fn(|r, c| self.data[c][r] + rhs.data[c][r])
    }
}

impl<const R: usize, const C: usize> Sub for Matrix<R, C> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::from_fn(|r, c| self.data[c][r] - rhs.data[c][r])
    }
}

impl<const R: usize, const C: usize> Neg for Matrix<R, C> {
    type Output = Self;
    fn neg(self) -> Self {
        self.map(|x| -x)
    }
}

impl<const R: usize, const C: usize> Mul<Real> for Matrix<R, C> {
    type Output = Self;
    fn mul(self, s: Real) -> Self {
        self.map(|x| x * s)
    }
}

impl<const R: usize, const C: usize> Mul<Matrix<R, C>> for Real {
    type Output = Matrix<R, C>;
    fn mul(self, m: Matrix<R, C>) -> Matrix<R, C> {
        m * self
    }
}

/// `(R, C) × (C, K) → (R, K)`; the inner dimensions must agree at compile time.
impl<const R: usize, const C: usize, const K: usize> Mul<Matrix<C, K>> for Matrix<R, C> {
    type Output = Matrix<R, K>;
    fn mul(self, rhs: Matrix<C, K>) -> Matrix<R, K> {
        Matrix::from_fn(|r, k| (0..C).map(|c| self.data[c][r] * rhs.data[k][c]).sum::<Real>())
    }
}

impl<const R: usize, const C: usize> AddAssign for Matrix<R, C> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const R: usize, const C: usize> SubAssign for Matrix<R, C> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const R: usize, const C: usize> MulAssign<Real> for Matrix<R, C> {
    fn mul_assign(&mut self, s: Real) {
        *self = *self * s;
    }
}

impl<const R: usize, const C: usize> MulAssign<Matrix<C, C>> for Matrix<R, C> {
    fn mul_assign(&mut self, rhs: Matrix<C, C>) {
        *self = *self * rhs;
    }
}

/* ------------------------------- formatting ------------------------------- */

impl<const R: usize, const C: usize> fmt::Display for Matrix<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for r in 0..R {
            if r > 0 {
                write!(f, "\n  ")?;
            }
            for c in 0..C {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.data[c][r])?;
            }
        }
        write!(f, " ]")
    }
}

/* ------------------------------ approximation ----------------------------- */

impl<const R: usize, const C: usize> AbsDiffEq for Matrix<R, C> {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<const R: usize, const C: usize> RelativeEq for Matrix<R, C> {
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<const R: usize, const C: usize> UlpsEq for Matrix<R, C> {
    fn default_max_ulps() -> u32 {
        Real::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Real, max_ulps: u32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn laplace_on_index_subsets_matches_closed_forms() {
        let m = Matrix3::from_rows([[2.0, -3.0, 1.0], [2.0, 0.0, -1.0], [1.0, 4.0, 5.0]]);
        // closed-form 3x3 rule of Sarrus
        let sarrus = 2.0 * (0.0 * 5.0 - (-1.0) * 4.0) - (-3.0) * (2.0 * 5.0 - (-1.0) * 1.0)
            + 1.0 * (2.0 * 4.0 - 0.0 * 1.0);
        assert_eq!(m.determinant(), sarrus);
        assert_eq!(m.laplace(&[1, 2], &[0, 2]), 2.0 * 5.0 - (-1.0) * 1.0);
        assert_eq!(m.laplace(&[], &[]), 1.0);
    }

    #[test]
    fn indices_without_drops_one() {
        let (idx, n) = Matrix4::indices_without(2);
        assert_eq!(&idx[..n], &[0, 1, 3]);
    }

    #[test]
    fn storage_is_column_major() {
        let m = Matrix::<2, 3>::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(m.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(m.data[2][1], 6.0);
    }
}
