//! LUP factorization for square matrices.
//!
//! This module provides [`Lup`], a partial-pivoting LU decomposition with
//! determinant, solve, and inverse operations. It is sized for the small,
//! dense systems that arise from normal equations; no blocking, no SIMD.
//!
//! Singularity is detected during factorization: a pivot below a relative
//! threshold of the input's magnitude is reported as
//! [`LinalgError::Singular`] rather than propagating infinities.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Pivot threshold relative to the largest absolute entry of the input.
const PIVOT_RTOL: f64 = 1e-10;

/// Errors from LUP factorization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinalgError {
    /// Factorization requires a square matrix.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// No usable pivot in the given column; the matrix is singular
    /// (or numerically indistinguishable from singular).
    #[error("matrix is singular: no pivot in column {column}")]
    Singular { column: usize },
}

/// LUP factorization of a square matrix: `P·A = L·U`.
///
/// Stores `L` (unit lower triangle, implicit diagonal) and `U` packed in a
/// single matrix, plus the row permutation.
///
/// # Example
///
/// ```
/// use linfit::linalg::Lup;
/// use ndarray::array;
///
/// let a = array![[4.0, 3.0], [6.0, 3.0]];
/// let lup = Lup::factor(a.view()).unwrap();
/// assert!((lup.det() - -6.0).abs() < 1e-12);
///
/// let x = lup.solve(array![10.0, 12.0].view());
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Lup {
    /// Packed `L` (below diagonal) and `U` (diagonal and above).
    lu: Array2<f64>,
    /// Row permutation: row `i` of the factored system is row `perm[i]`
    /// of the input.
    perm: Vec<usize>,
    /// Number of row swaps performed (determinant sign).
    n_swaps: usize,
}

impl Lup {
    /// Factor a square matrix with partial pivoting.
    ///
    /// # Errors
    ///
    /// [`LinalgError::NotSquare`] for rectangular input,
    /// [`LinalgError::Singular`] when no acceptable pivot exists.
    pub fn factor(matrix: ArrayView2<'_, f64>) -> Result<Self, LinalgError> {
        let (rows, cols) = matrix.dim();
        if rows != cols {
            return Err(LinalgError::NotSquare { rows, cols });
        }
        let n = rows;
        let mut lu = matrix.to_owned();
        let mut perm: Vec<usize> = (0..n).collect();
        let mut n_swaps = 0;

        let scale = matrix.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
        let tolerance = if scale > 0.0 { scale * PIVOT_RTOL } else { PIVOT_RTOL };

        for k in 0..n {
            let mut pivot_row = k;
            let mut pivot_abs = lu[[k, k]].abs();
            for i in (k + 1)..n {
                let candidate = lu[[i, k]].abs();
                if candidate > pivot_abs {
                    pivot_abs = candidate;
                    pivot_row = i;
                }
            }
            if pivot_abs <= tolerance {
                return Err(LinalgError::Singular { column: k });
            }
            if pivot_row != k {
                for j in 0..n {
                    lu.swap([k, j], [pivot_row, j]);
                }
                perm.swap(k, pivot_row);
                n_swaps += 1;
            }

            let pivot = lu[[k, k]];
            for i in (k + 1)..n {
                let factor = lu[[i, k]] / pivot;
                lu[[i, k]] = factor;
                for j in (k + 1)..n {
                    let elimination = factor * lu[[k, j]];
                    lu[[i, j]] -= elimination;
                }
            }
        }

        Ok(Self { lu, perm, n_swaps })
    }

    /// Matrix dimension.
    #[inline]
    pub fn n(&self) -> usize {
        self.lu.nrows()
    }

    /// Determinant of the factored matrix.
    ///
    /// Product of `U`'s diagonal, sign-corrected for row swaps.
    pub fn det(&self) -> f64 {
        let diag_product: f64 = (0..self.n()).map(|i| self.lu[[i, i]]).product();
        if self.n_swaps % 2 == 0 {
            diag_product
        } else {
            -diag_product
        }
    }

    /// Solve `A·x = b` by forward/back substitution.
    ///
    /// # Panics
    ///
    /// Panics if `b` has a different length than the factored matrix.
    pub fn solve(&self, b: ArrayView1<'_, f64>) -> Array1<f64> {
        let n = self.n();
        assert_eq!(b.len(), n, "right-hand side length {} != {}", b.len(), n);

        // Forward: L·y = P·b
        let mut x = Array1::zeros(n);
        for i in 0..n {
            let mut acc = b[self.perm[i]];
            for j in 0..i {
                acc -= self.lu[[i, j]] * x[j];
            }
            x[i] = acc;
        }
        // Back: U·x = y
        for i in (0..n).rev() {
            let mut acc = x[i];
            for j in (i + 1)..n {
                acc -= self.lu[[i, j]] * x[j];
            }
            x[i] = acc / self.lu[[i, i]];
        }
        x
    }

    /// Inverse of the factored matrix, one unit-vector solve per column.
    pub fn inverse(&self) -> Array2<f64> {
        let n = self.n();
        let mut inverse = Array2::zeros((n, n));
        let mut unit = Array1::zeros(n);
        for col in 0..n {
            unit.fill(0.0);
            unit[col] = 1.0;
            let solution = self.solve(unit.view());
            inverse.column_mut(col).assign(&solution);
        }
        inverse
    }
}
