//! Matrices as views over a [`LinearSystem`].
//!
//! Entry `(i, j)` of a [`Matrix`] is coefficient `j` of equation `i`, both
//! 1-based. When the matrix is augmented the right-hand sides of the
//! equations form an extra column `b`, reachable through [`Matrix::aug`] and
//! [`Matrix::get_b`]; otherwise the right-hand sides are ignored.
//!
//! `Clone` deep-copies the whole system, so a clone taken before
//! [`Matrix::to_rref`] is unaffected by the reduction.

mod product;
mod rref;
mod super_augmented;

pub use product::{matrix_matrix_product, matrix_vector_product};
pub use super_augmented::SuperAugmentedMatrix;

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::equation::{Ero, LinearEquation, LinearSystem};
use crate::error::{check_dims, check_index, LinalgError, Result};
use crate::math::{Scalar, Vector};

/// An `m × n` matrix, optionally augmented with a column `b`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matrix {
    system: LinearSystem,
    augmented: bool,
}

impl Matrix {
    /// Plain (unaugmented) view over `system`.
    pub fn from_system(system: LinearSystem) -> Self {
        Self {
            system,
            augmented: false,
        }
    }

    /// Matrix with the given rows; shorter rows are zero-padded.
    pub fn from_rows(rows: Vec<Vec<Scalar>>) -> Result<Self> {
        let equations = rows
            .into_iter()
            .map(|row| -> Result<LinearEquation> {
                Ok(LinearEquation::new(Vector::new(row)?, Scalar::zero()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_system(LinearSystem::new(equations)))
    }

    /// Real matrix from rows of floats.
    pub fn from_real<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        Self::from_rows(
            rows.iter()
                .map(|r| r.as_ref().iter().copied().map(Scalar::Real).collect())
                .collect(),
        )
    }

    /// Matrix whose `k`-th column is `columns[k - 1]`.
    pub fn from_columns(columns: &[Vector]) -> Result<Self> {
        let first = columns.first().ok_or_else(|| {
            LinalgError::InvalidOperation("a matrix needs at least one column".into())
        })?;
        let m = first.dim();
        for column in columns {
            check_dims(m, column.dim())?;
        }
        let mut rows = vec![Vec::with_capacity(columns.len()); m];
        for column in columns {
            for (row, &value) in rows.iter_mut().zip(column.iter()) {
                row.push(value);
            }
        }
        Self::from_rows(rows)
    }

    /// The `n × n` identity matrix.
    pub fn identity(n: usize) -> Result<Self> {
        let rows = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| if i == j { Scalar::one() } else { Scalar::zero() })
                    .collect()
            })
            .collect();
        Self::from_rows(rows)
    }

    /// Number of rows.
    #[inline]
    pub fn m(&self) -> usize {
        self.system.m()
    }

    /// Number of coefficient columns (the `b` column is not counted).
    #[inline]
    pub fn n(&self) -> usize {
        self.system.n()
    }

    /// Whether the `b` column is part of the matrix.
    #[inline]
    pub fn is_augmented(&self) -> bool {
        self.augmented
    }

    /// Underlying linear system.
    #[inline]
    pub fn system(&self) -> &LinearSystem {
        &self.system
    }

    /// Deep copy with the augmentation flag set to `augmented`.
    pub fn with_augmented(&self, augmented: bool) -> Matrix {
        Matrix {
            system: self.system.clone(),
            augmented,
        }
    }

    /// Entry `(i, j)`.
    pub fn sub(&self, i: usize, j: usize) -> Result<Scalar> {
        self.system.equation(i)?.coefficients().get(j)
    }

    /// Overwrite entry `(i, j)`.
    pub fn set(&mut self, i: usize, j: usize, value: Scalar) -> Result<()> {
        self.system.equation_mut(i)?.coefficients_mut().set(j, value)
    }

    fn require_augmented(&self) -> Result<()> {
        if !self.augmented {
            return Err(LinalgError::Augmentation("matrix is not augmented".into()));
        }
        Ok(())
    }

    /// Entry `k` of the augmented column.
    pub fn aug(&self, k: usize) -> Result<Scalar> {
        self.require_augmented()?;
        Ok(self.system.equation(k)?.rhs())
    }

    /// Overwrite entry `k` of the augmented column.
    pub fn aug_set(&mut self, k: usize, value: Scalar) -> Result<()> {
        self.require_augmented()?;
        self.system.equation_mut(k)?.set_rhs(value);
        Ok(())
    }

    /// Turn this into the augmented matrix `[A | b]`.
    pub fn augment_with(&mut self, b: &Vector) -> Result<()> {
        if b.dim() != self.m() {
            return Err(LinalgError::Augmentation(format!(
                "augmented column has dimension {}, matrix has {} rows",
                b.dim(),
                self.m()
            )));
        }
        self.augmented = true;
        for (k, &value) in b.iter().enumerate() {
            self.aug_set(k + 1, value)?;
        }
        Ok(())
    }

    /// The augmented column `b`.
    pub fn get_b(&self) -> Result<Vector> {
        self.require_augmented()?;
        Vector::new(self.system.equations().map(LinearEquation::rhs).collect())
    }

    /// Copy of row `i`, coefficients only.
    pub fn row(&self, i: usize) -> Result<Vector> {
        Ok(self.system.equation(i)?.coefficients().clone())
    }

    /// Copy of column `j`.
    ///
    /// A row narrower than the matrix is reported as
    /// [`LinalgError::DimensionMismatch`].
    pub fn col(&self, j: usize) -> Result<Vector> {
        check_index(j, self.n())?;
        let n = self.n();
        let entries = self
            .system
            .equations()
            .map(|eq| {
                eq.coefficients()
                    .components()
                    .get(j - 1)
                    .copied()
                    .ok_or(LinalgError::DimensionMismatch { left: n, right: eq.n() })
            })
            .collect::<Result<Vec<_>>>()?;
        Vector::new(entries)
    }

    /// Apply an elementary row operation in place.
    pub fn apply_ero(&mut self, ero: &Ero) -> Result<()> {
        self.system.apply_ero(ero)
    }

    /// Entry `(i, j)` where column `n + 1` is the right-hand side.
    fn entry(&self, i: usize, j: usize) -> Result<Scalar> {
        if j == self.n() + 1 {
            Ok(self.system.equation(i)?.rhs())
        } else {
            self.sub(i, j)
        }
    }
}

// Symmetric comparison: shape, flag, every coefficient and, when augmented, b.
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.m() == other.m()
            && self.n() == other.n()
            && self.augmented == other.augmented
            && self
                .system
                .equations()
                .zip(other.system.equations())
                .all(|(a, b)| {
                    a.coefficients() == b.coefficients()
                        && (!self.augmented || a.rhs().approx_eq(b.rhs()))
                })
    }
}
