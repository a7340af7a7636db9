//! Elementary row operations.
//!
//! An [`Ero`] can only be obtained through its validating constructors (or by
//! deserializing, which runs the same checks), so a zero scale factor or a
//! row added to itself never reaches [`LinearSystem::apply_ero`].

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use super::LinearSystem;
use crate::error::{LinalgError, Result};
use crate::math::Scalar;

/// The three shapes of elementary row operation. Rows are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EroKind {
    /// Interchange rows `i` and `j`.
    Swap {
        /// First row
        i: usize,
        /// Second row
        j: usize,
    },
    /// Multiply row `i` by the nonzero `k`.
    Scale {
        /// Row
        i: usize,
        /// Factor
        k: Scalar,
    },
    /// `row_i ← row_i + c·row_j`, `i ≠ j`.
    AddMultiple {
        /// Row that changes
        i: usize,
        /// Row that is added
        j: usize,
        /// Multiplier
        c: Scalar,
    },
}

/// A validated elementary row operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EroKind", into = "EroKind")]
pub struct Ero(EroKind);

impl Ero {
    /// Interchange rows `i` and `j`.
    pub fn swap(i: usize, j: usize) -> Result<Self> {
        EroKind::Swap { i, j }.try_into()
    }

    /// Multiply row `i` by `k`; `k` must be nonzero.
    pub fn scale(i: usize, k: Scalar) -> Result<Self> {
        EroKind::Scale { i, k }.try_into()
    }

    /// Add `c` times row `j` to row `i`; `i` and `j` must differ.
    pub fn add_multiple(i: usize, j: usize, c: Scalar) -> Result<Self> {
        EroKind::AddMultiple { i, j, c }.try_into()
    }

    /// The operation this ERO performs.
    #[inline]
    pub fn kind(&self) -> &EroKind {
        &self.0
    }

    fn rows(&self) -> (usize, Option<usize>) {
        match self.0 {
            EroKind::Swap { i, j } | EroKind::AddMultiple { i, j, .. } => (i, Some(j)),
            EroKind::Scale { i, .. } => (i, None),
        }
    }
}

impl TryFrom<EroKind> for Ero {
    type Error = LinalgError;

    fn try_from(kind: EroKind) -> Result<Self> {
        let ero = Ero(kind);
        let (i, j) = ero.rows();
        if i == 0 || j == Some(0) {
            return Err(LinalgError::InvalidEro("rows are numbered from 1".into()));
        }
        match kind {
            EroKind::Scale { k, .. } if k.is_zero() => {
                Err(LinalgError::InvalidEro("scale factor must be nonzero".into()))
            }
            EroKind::AddMultiple { i, j, .. } if i == j => Err(LinalgError::InvalidEro(format!(
                "cannot add a multiple of row {j} to itself"
            ))),
            _ => Ok(ero),
        }
    }
}

impl From<Ero> for EroKind {
    fn from(ero: Ero) -> Self {
        ero.0
    }
}

impl LinearSystem {
    /// Apply `ero` to this system in place.
    ///
    /// Fails with [`LinalgError::InvalidEro`] if a row index exceeds `m`.
    pub fn apply_ero(&mut self, ero: &Ero) -> Result<()> {
        let (i, j) = ero.rows();
        let m = self.m();
        if i > m || j.is_some_and(|j| j > m) {
            return Err(LinalgError::InvalidEro(format!(
                "{:?} addresses a row outside [1, {m}]",
                ero.kind()
            )));
        }
        log::trace!("applying {:?}", ero.kind());

        match *ero.kind() {
            EroKind::Swap { i, j } => self.swap_rows(i, j),
            EroKind::Scale { i, k } => {
                let row = self.equation_mut(i)?;
                *row = row.scalar_multiply(k);
            }
            EroKind::AddMultiple { i, j, c } => {
                let addend = self.equation(j)?.scalar_multiply(c);
                let row = self.equation_mut(i)?;
                *row = row.add(&addend)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equation::LinearEquation;
    use crate::math::Vector;

    fn system() -> LinearSystem {
        LinearSystem::new(vec![
            LinearEquation::from_real(&[1.0, 2.0], 3.0).unwrap(),
            LinearEquation::from_real(&[4.0, 5.0], 6.0).unwrap(),
            LinearEquation::from_real(&[7.0, 8.0], 9.0).unwrap(),
        ])
    }

    fn row(s: &LinearSystem, i: usize) -> (Vector, Scalar) {
        let e = s.equation(i).unwrap();
        (e.coefficients().clone(), e.rhs())
    }

    #[test]
    fn constructors_reject_invalid_operations() {
        assert!(matches!(Ero::scale(1, Scalar::zero()), Err(LinalgError::InvalidEro(_))));
        assert!(matches!(
            Ero::add_multiple(2, 2, Scalar::from(1.0)),
            Err(LinalgError::InvalidEro(_))
        ));
        assert!(Ero::swap(0, 1).is_err());
        assert!(Ero::add_multiple(1, 0, Scalar::from(1.0)).is_err());
        assert!(Ero::swap(2, 2).is_ok());
    }

    #[test]
    fn deserialization_runs_the_same_checks() {
        let scale = Ero::scale(2, Scalar::from(3.0)).unwrap();
        let json = serde_json::to_string(&scale).unwrap();
        assert_eq!(serde_json::from_str::<Ero>(&json).unwrap(), scale);

        let zero_scale = r#"{"Scale":{"i":1,"k":{"Real":0.0}}}"#;
        assert!(serde_json::from_str::<Ero>(zero_scale).is_err());
        assert!(serde_json::from_str::<EroKind>(zero_scale).is_ok());

        let onto_itself = r#"{"AddMultiple":{"i":2,"j":2,"c":{"Real":1.0}}}"#;
        assert!(serde_json::from_str::<Ero>(onto_itself).is_err());
        assert!(serde_json::from_str::<Ero>(r#"{"Swap":{"i":0,"j":1}}"#).is_err());
    }

    #[test]
    fn swap_exchanges_rows() {
        let mut s = system();
        s.apply_ero(&Ero::swap(1, 3).unwrap()).unwrap();
        assert_eq!(row(&s, 1).0, Vector::from_real(&[7.0, 8.0]).unwrap());
        assert_eq!(row(&s, 3).1, Scalar::from(3.0));
        assert_eq!(row(&s, 2).1, Scalar::from(6.0));
    }

    #[test]
    fn scale_multiplies_coefficients_and_rhs() {
        let mut s = system();
        s.apply_ero(&Ero::scale(2, Scalar::from(0.5)).unwrap()).unwrap();
        assert_eq!(row(&s, 2).0, Vector::from_real(&[2.0, 2.5]).unwrap());
        assert_eq!(row(&s, 2).1, Scalar::from(3.0));
    }

    #[test]
    fn add_multiple_leaves_source_row_alone() {
        let mut s = system();
        s.apply_ero(&Ero::add_multiple(3, 1, Scalar::from(-7.0)).unwrap()).unwrap();
        assert_eq!(row(&s, 3).0, Vector::from_real(&[0.0, -6.0]).unwrap());
        assert_eq!(row(&s, 3).1, Scalar::from(-12.0));
        assert_eq!(row(&s, 1).0, Vector::from_real(&[1.0, 2.0]).unwrap());
    }

    #[test]
    fn operations_after_swap_follow_the_permutation() {
        let mut s = system();
        s.apply_ero(&Ero::swap(1, 2).unwrap()).unwrap();
        s.apply_ero(&Ero::scale(1, Scalar::from(2.0)).unwrap()).unwrap();
        assert_eq!(row(&s, 1).0, Vector::from_real(&[8.0, 10.0]).unwrap());
        assert_eq!(row(&s, 2).0, Vector::from_real(&[1.0, 2.0]).unwrap());
    }

    #[test]
    fn rows_outside_the_system_are_rejected() {
        let mut s = system();
        assert!(matches!(
            s.apply_ero(&Ero::swap(1, 4).unwrap()),
            Err(LinalgError::InvalidEro(_))
        ));
        assert!(s.apply_ero(&Ero::scale(9, Scalar::from(1.0)).unwrap()).is_err());
    }
}
