//! Gauss-Jordan reduction and the structural queries derived from it.
//!
//! The reduction walks pivots left to right. After a pivot at `(row, col)`
//! the next one is the first entry, scanning columns `col + 1, …` and within
//! each column rows `row + 1, …`, whose modulus exceeds [`TOLERANCE`]. That
//! row is swapped into place, scaled so the pivot becomes 1, and the pivot
//! column is cleared in every other row, above and below. Row and column of
//! the pivot both strictly increase, so the loop ends after at most
//! `min(m, n)` pivots.
//!
//! [`TOLERANCE`]: crate::math::TOLERANCE

use num_traits::Zero;

use super::Matrix;
use crate::equation::Ero;
use crate::error::{LinalgError, Result};

impl Matrix {
    /// Reduce this matrix in place to reduced row-echelon form.
    ///
    /// Pivots are searched among the coefficient columns only; an augmented
    /// column is carried along by every row operation.
    ///
    /// Fails with [`LinalgError::ReductionPrecondition`] when the first column
    /// is the zero vector: that degenerate case is left to the caller.
    pub fn to_rref(&mut self) -> Result<()> {
        if self.m() == 0 || self.n() == 0 || self.col(1)?.is_zero() {
            return Err(LinalgError::ReductionPrecondition);
        }
        self.reduce(self.n())
    }

    /// Gauss-Jordan over the first `width` columns, where column `n + 1`
    /// stands for the right-hand sides.
    pub(super) fn reduce(&mut self, width: usize) -> Result<()> {
        let (mut row, mut col) = (0, 0);
        while let Some((found, pivot_col)) = self.next_pivot(row, col, width)? {
            row += 1;
            col = pivot_col;
            log::debug!("pivot {row} found at ({found}, {col})");
            self.clear_pivot_column(row, found, col)?;
        }
        Ok(())
    }

    fn next_pivot(&self, row: usize, col: usize, width: usize) -> Result<Option<(usize, usize)>> {
        for c in col + 1..=width {
            for r in row + 1..=self.m() {
                if !self.entry(r, c)?.is_negligible() {
                    return Ok(Some((r, c)));
                }
            }
        }
        Ok(None)
    }

    fn clear_pivot_column(&mut self, row: usize, found: usize, col: usize) -> Result<()> {
        if found != row {
            self.apply_ero(&Ero::swap(row, found)?)?;
        }
        let pivot = self.entry(row, col)?;
        self.apply_ero(&Ero::scale(row, pivot.recip())?)?;
        for r in 1..=self.m() {
            if r == row {
                continue;
            }
            let value = self.entry(r, col)?;
            if !value.is_zero() {
                self.apply_ero(&Ero::add_multiple(r, row, -value)?)?;
            }
        }
        Ok(())
    }

    /// Number of nonzero rows of the reduced form.
    ///
    /// Works on a copy. For an augmented matrix the `b` column takes part in
    /// the pivot search, so this is the rank of `[A | b]`; an all-zero first
    /// column is allowed here.
    pub fn rank(&self) -> Result<usize> {
        let mut reduced = self.clone();
        let width = if self.augmented { self.n() + 1 } else { self.n() };
        reduced.reduce(width)?;

        // zero rows trail in RREF, so stop at the first one
        let rank = reduced
            .system
            .equations()
            .take_while(|eq| {
                if self.augmented {
                    !eq.is_trivial()
                } else {
                    !eq.coefficients().is_zero()
                }
            })
            .count();
        log::debug!("rank of {}x{} matrix (augmented: {}) is {rank}", self.m(), self.n(), self.augmented);
        Ok(rank)
    }

    /// `n - rank` of the coefficient matrix.
    pub fn nullity(&self) -> Result<usize> {
        let rank = if self.augmented {
            self.with_augmented(false).rank()?
        } else {
            self.rank()?
        };
        Ok(self.n() - rank)
    }

    /// `true` when the system `A x = b` has a solution, i.e. augmenting does
    /// not raise the rank.
    pub fn is_consistent(&self) -> Result<bool> {
        Ok(self.rank()? == self.with_augmented(!self.augmented).rank()?)
    }

    /// Copy of this matrix augmented with the zero vector: the system `A x = 0`.
    pub fn homogeneous(&self) -> Result<Matrix> {
        let mut h = self.with_augmented(true);
        for i in 1..=h.m() {
            h.aug_set(i, num_traits::zero())?;
        }
        Ok(h)
    }
}
