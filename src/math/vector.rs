//! Coordinate vectors over ℝ or ℂ
//!
//! # Model
//! A [`Vector`] is a non-empty, ordered tuple of [`Scalar`]s. Its field is not
//! stored: a vector is complex exactly when one of its components is, so the
//! field can never drift out of sync with the data.
//!
//! Components are addressed 1-based (`get(1)` is the first), matching the
//! usual `x₁, …, xₙ` notation for the unknowns of a linear system.
//!
//! Equality is tolerance based: two vectors are equal when they share a
//! dimension and every pair of components differs by at most [`TOLERANCE`].
//! This is not transitive, so do not use vectors as hash or ordered keys.
//!
//! All operations here return new values; only [`Vector::set`] and
//! [`Vector::extend_zeros`] mutate in place.

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use super::scalar::{Field, Scalar, TOLERANCE};
use crate::error::{check_dims, LinalgError, Result};

/// A vector in `Fⁿ`, `n ≥ 1`.
///
/// Serialized as the plain list of its components; an empty list is
/// rejected on the way back in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<Scalar>", into = "Vec<Scalar>")]
pub struct Vector {
    components: Vec<Scalar>,
}

impl Vector {
    /// Build a vector from its components.
    ///
    /// Fails with [`LinalgError::InvalidOperation`] on an empty list.
    pub fn new(components: Vec<Scalar>) -> Result<Self> {
        if components.is_empty() {
            return Err(LinalgError::InvalidOperation(
                "a vector needs at least one component".into(),
            ));
        }
        Ok(Self { components })
    }

    /// Build a real vector from plain floats.
    pub fn from_real(values: &[f64]) -> Result<Self> {
        Self::new(values.iter().copied().map(Scalar::Real).collect())
    }

    /// Number of components.
    #[inline]
    pub fn dim(&self) -> usize {
        self.components.len()
    }

    /// `Complex` iff any component is complex.
    pub fn field(&self) -> Field {
        if self.components.iter().all(|s| s.is_real()) {
            Field::Real
        } else {
            Field::Complex
        }
    }

    /// Components as a slice (0-based).
    #[inline]
    pub fn components(&self) -> &[Scalar] {
        &self.components
    }

    /// Iterate over the components in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.components.iter()
    }

    /// Component `i`, 1-based.
    pub fn get(&self, i: usize) -> Result<Scalar> {
        let bound = self.dim();
        i.checked_sub(1)
            .and_then(|k| self.components.get(k))
            .copied()
            .ok_or(LinalgError::IndexOutOfRange { index: i, bound })
    }

    /// Overwrite component `i`, 1-based.
    pub fn set(&mut self, i: usize, value: Scalar) -> Result<()> {
        let bound = self.dim();
        let slot = i
            .checked_sub(1)
            .and_then(|k| self.components.get_mut(k))
            .ok_or(LinalgError::IndexOutOfRange { index: i, bound })?;
        *slot = value;
        Ok(())
    }

    /// The zero vector with the same dimension as `self`.
    pub fn zero_vector(&self) -> Vector {
        Vector {
            components: vec![Scalar::zero(); self.dim()],
        }
    }

    /// `true` when every component is within tolerance of zero.
    pub fn is_zero(&self) -> bool {
        self.components.iter().all(|s| s.is_negligible())
    }

    /// Componentwise complex conjugate.
    pub fn conjugate(&self) -> Vector {
        self.map(Scalar::conj)
    }

    /// Same values with every component tagged complex.
    pub fn to_complex(&self) -> Vector {
        self.map(Scalar::promote)
    }

    /// Append `k` zeros to the tail, in place.
    pub fn extend_zeros(&mut self, k: usize) {
        self.components
            .extend(std::iter::repeat_n(Scalar::zero(), k));
    }

    /// `self + other`
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Vector) -> Result<Vector> {
        check_dims(self.dim(), other.dim())?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// `-self`
    pub fn negate(&self) -> Vector {
        self.map(|s| -s)
    }

    /// `self - other`, computed as `self + (-other)`.
    pub fn subtract(&self, other: &Vector) -> Result<Vector> {
        self.add(&other.negate())
    }

    /// `s · self`
    ///
    /// A real vector cannot absorb a complex scalar; promote it with
    /// [`Vector::to_complex`] first if that is intended.
    pub fn scalar_multiply(&self, s: Scalar) -> Result<Vector> {
        if self.field() == Field::Real && s.field() == Field::Complex {
            return Err(LinalgError::FieldMismatch {
                left: Field::Real,
                right: Field::Complex,
            });
        }
        Ok(self.map(|c| c * s))
    }

    #[inline]
    pub(crate) fn map(&self, f: impl Fn(Scalar) -> Scalar) -> Vector {
        Vector {
            components: self.components.iter().copied().map(f).collect(),
        }
    }

    #[inline]
    pub(crate) fn zip_with(&self, other: &Vector, f: impl Fn(Scalar, Scalar) -> Scalar) -> Vector {
        Vector {
            components: self
                .components
                .iter()
                .zip(other.components.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }
}

/// Sum of all `vectors`, accumulated left to right.
///
/// The variadic form of [`Vector::add`]: every operand must share the first
/// one's dimension.
pub fn add_all(vectors: &[Vector]) -> Result<Vector> {
    let (first, rest) = vectors.split_first().ok_or_else(|| {
        LinalgError::InvalidOperation("cannot sum an empty list of vectors".into())
    })?;
    rest.iter().try_fold(first.clone(), |acc, v| acc.add(v))
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.dim() == other.dim()
            && self
                .components
                .iter()
                .zip(other.components.iter())
                .all(|(a, b)| (*a - *b).modulus() <= TOLERANCE)
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

impl TryFrom<Vec<Scalar>> for Vector {
    type Error = LinalgError;

    fn try_from(value: Vec<Scalar>) -> Result<Self> {
        Vector::new(value)
    }
}

impl From<Vector> for Vec<Scalar> {
    fn from(value: Vector) -> Self {
        value.components
    }
}
