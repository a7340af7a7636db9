//! Linear equations and systems of linear equations.
//!
//! A [`LinearEquation`] is the row `a₁x₁ + … + aₙxₙ = b`. A [`LinearSystem`]
//! owns its equations in an arena and keeps a separate row permutation, so
//! interchanging two rows is an index swap while scaling and elimination
//! write straight into the stored equation. Every equation of a system is
//! zero-padded on the right to the system-wide width once, at construction.

mod ero;

pub use ero::{Ero, EroKind};

use serde::{Deserialize, Serialize};

use crate::error::{check_dims, LinalgError, Result};
use crate::math::{Scalar, Vector};

/// `a₁x₁ + … + aₙxₙ = rhs`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearEquation {
    coefficients: Vector,
    rhs: Scalar,
}

impl LinearEquation {
    /// Equation with the given coefficients and right-hand side.
    pub fn new(coefficients: Vector, rhs: Scalar) -> Self {
        Self { coefficients, rhs }
    }

    /// Real equation from plain floats.
    pub fn from_real(coefficients: &[f64], rhs: f64) -> Result<Self> {
        Ok(Self::new(Vector::from_real(coefficients)?, Scalar::Real(rhs)))
    }

    /// Number of coefficients.
    #[inline]
    pub fn n(&self) -> usize {
        self.coefficients.dim()
    }

    /// Coefficient vector.
    #[inline]
    pub fn coefficients(&self) -> &Vector {
        &self.coefficients
    }

    #[inline]
    pub(crate) fn coefficients_mut(&mut self) -> &mut Vector {
        &mut self.coefficients
    }

    /// Right-hand side.
    #[inline]
    pub fn rhs(&self) -> Scalar {
        self.rhs
    }

    /// Overwrite the right-hand side.
    pub fn set_rhs(&mut self, rhs: Scalar) {
        self.rhs = rhs;
    }

    /// `0 = 0`: every coefficient and the rhs are zero.
    pub fn is_trivial(&self) -> bool {
        self.coefficients.is_zero() && self.rhs.is_negligible()
    }

    /// `0 = b` with `b ≠ 0`: no assignment satisfies it.
    pub fn is_inconsistent(&self) -> bool {
        self.coefficients.is_zero() && !self.rhs.is_negligible()
    }

    /// Coefficient-wise sum, rhs included.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &LinearEquation) -> Result<LinearEquation> {
        Ok(Self::new(
            self.coefficients.add(&other.coefficients)?,
            self.rhs + other.rhs,
        ))
    }

    /// Both sides negated.
    pub fn negate(&self) -> LinearEquation {
        Self::new(self.coefficients.negate(), -self.rhs)
    }

    /// `self - other`
    pub fn subtract(&self, other: &LinearEquation) -> Result<LinearEquation> {
        self.add(&other.negate())
    }

    /// Both sides multiplied by `s`.
    ///
    /// Unlike [`Vector::scalar_multiply`] this never fails on a field
    /// mismatch: a real row scaled by a complex number becomes complex. Row
    /// reduction over ℂ relies on this when a row happens to hold only reals.
    pub fn scalar_multiply(&self, s: Scalar) -> LinearEquation {
        Self::new(self.coefficients.map(|a| a * s), self.rhs * s)
    }

    /// `true` if `v` satisfies the equation, up to tolerance.
    pub fn solves(&self, v: &Vector) -> Result<bool> {
        Ok(self.coefficients.dot_product(v)?.approx_eq(self.rhs))
    }

    /// Same coefficients and rhs, up to tolerance.
    pub fn is_identical(&self, other: &LinearEquation) -> bool {
        self.coefficients == other.coefficients && self.rhs.approx_eq(other.rhs)
    }
}

/// An ordered collection of equations sharing `n` unknowns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SystemParts")]
pub struct LinearSystem {
    rows: Vec<LinearEquation>,
    // order[r] is the arena slot holding row r + 1
    order: Vec<usize>,
    n: usize,
}

impl LinearSystem {
    /// Build a system, zero-padding every equation to the widest one.
    pub fn new(mut equations: Vec<LinearEquation>) -> Self {
        let n = equations.iter().map(LinearEquation::n).max().unwrap_or(0);
        for eq in &mut equations {
            let missing = n - eq.n();
            eq.coefficients.extend_zeros(missing);
        }
        let order = (0..equations.len()).collect();
        Self {
            rows: equations,
            order,
            n,
        }
    }

    /// A system without equations.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of equations.
    #[inline]
    pub fn m(&self) -> usize {
        self.order.len()
    }

    /// Number of unknowns.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    fn slot(&self, i: usize) -> Result<usize> {
        i.checked_sub(1)
            .and_then(|r| self.order.get(r))
            .copied()
            .ok_or(LinalgError::IndexOutOfRange {
                index: i,
                bound: self.m(),
            })
    }

    /// Equation `i`, 1-based.
    pub fn equation(&self, i: usize) -> Result<&LinearEquation> {
        let slot = self.slot(i)?;
        let bound = self.rows.len();
        self.rows
            .get(slot)
            .ok_or(LinalgError::IndexOutOfRange { index: slot + 1, bound })
    }

    /// Mutable equation `i`, 1-based. The caller keeps its width at `n`.
    pub(crate) fn equation_mut(&mut self, i: usize) -> Result<&mut LinearEquation> {
        let slot = self.slot(i)?;
        let bound = self.rows.len();
        self.rows
            .get_mut(slot)
            .ok_or(LinalgError::IndexOutOfRange { index: slot + 1, bound })
    }

    /// Equations in row order.
    pub fn equations(&self) -> impl Iterator<Item = &LinearEquation> + '_ {
        self.order.iter().filter_map(move |&slot| self.rows.get(slot))
    }

    /// A new system holding the current equations followed by `extra`,
    /// padded again from scratch.
    pub fn include_equation(&self, extra: impl IntoIterator<Item = LinearEquation>) -> LinearSystem {
        LinearSystem::new(self.equations().cloned().chain(extra).collect())
    }

    /// `true` if `v` satisfies every equation.
    pub fn solves(&self, v: &Vector) -> Result<bool> {
        check_dims(self.n, v.dim())?;
        for eq in self.equations() {
            if !eq.solves(v)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Same shape and pairwise identical equations, in order.
    pub fn is_identical(&self, other: &LinearSystem) -> bool {
        self.m() == other.m()
            && self.n == other.n
            && self
                .equations()
                .zip(other.equations())
                .all(|(a, b)| a.is_identical(b))
    }

    /// Interchange rows `i` and `j` (1-based, already validated).
    #[inline]
    pub(crate) fn swap_rows(&mut self, i: usize, j: usize) {
        self.order.swap(i - 1, j - 1);
    }
}

/// Wire form of a [`LinearSystem`], checked before it becomes one.
#[derive(Deserialize)]
struct SystemParts {
    rows: Vec<LinearEquation>,
    order: Vec<usize>,
    n: usize,
}

impl TryFrom<SystemParts> for LinearSystem {
    type Error = LinalgError;

    fn try_from(parts: SystemParts) -> Result<Self> {
        let SystemParts { rows, order, n } = parts;
        if let Some(eq) = rows.iter().find(|eq| eq.n() != n) {
            return Err(LinalgError::DimensionMismatch {
                left: n,
                right: eq.n(),
            });
        }
        let mut seen = vec![false; rows.len()];
        let is_permutation = order.len() == rows.len()
            && order.iter().all(|&slot| match seen.get_mut(slot) {
                Some(flag) if !*flag => {
                    *flag = true;
                    true
                }
                _ => false,
            });
        if !is_permutation {
            return Err(LinalgError::InvalidOperation(format!(
                "row order {order:?} is not a permutation of {} rows",
                rows.len()
            )));
        }
        Ok(Self { rows, order, n })
    }
}
