//! Inner-product geometry on [`Vector`]
//!
//! The standard inner product `⟨w, z⟩ = Σ wᵢ·conj(zᵢ)` is conjugate-linear in
//! its second argument and reduces to the dot product on real vectors. Norms,
//! angles and projections are all derived from it.

use num_traits::Zero;

use super::scalar::{Field, Scalar, TOLERANCE};
use super::vector::Vector;
use crate::error::{check_dims, LinalgError, Result};

fn zero_vector_error(op: &str) -> LinalgError {
    LinalgError::InvalidOperation(format!("{op} is undefined for the zero vector"))
}

impl Vector {
    /// `Σ vᵢ·wᵢ`, without conjugation.
    pub fn dot_product(&self, w: &Vector) -> Result<Scalar> {
        check_dims(self.dim(), w.dim())?;
        Ok(self.iter().zip(w.iter()).map(|(&a, &b)| a * b).sum())
    }

    /// `⟨self, z⟩ = self · conj(z)`
    pub fn inner_product(&self, z: &Vector) -> Result<Scalar> {
        self.dot_product(&z.conjugate())
    }

    /// Euclidean length.
    ///
    /// For complex vectors the self inner product must be real; a noticeable
    /// imaginary part means the arithmetic went wrong somewhere upstream.
    pub fn norm(&self) -> Result<f64> {
        match self.field() {
            Field::Real => Ok(self.dot_product(self)?.re().sqrt()),
            Field::Complex => {
                let ip = self.inner_product(self)?;
                if ip.im().abs() > TOLERANCE {
                    return Err(LinalgError::InvalidOperation(format!(
                        "self inner product has imaginary part {}",
                        ip.im()
                    )));
                }
                Ok(ip.re().sqrt())
            }
        }
    }

    /// Unit vector in the direction of `self`.
    pub fn normalize(&self) -> Result<Vector> {
        if self.is_zero() {
            return Err(zero_vector_error("normalize"));
        }
        self.scalar_multiply(Scalar::Real(self.norm()?.recip()))
    }

    /// `true` when the dot product is exactly zero.
    pub fn is_orthogonal(&self, w: &Vector) -> Result<bool> {
        Ok(self.dot_product(w)?.is_zero())
    }

    /// Angle between `self` and `w` in `[0, π]`.
    pub fn angle(&self, w: &Vector) -> Result<f64> {
        if self.is_zero() || w.is_zero() {
            return Err(zero_vector_error("angle"));
        }
        let cos = self.inner_product(w)?.re() / (self.norm()? * w.norm()?);
        // rounding can push |cos| slightly past 1
        Ok(cos.clamp(-1.0, 1.0).acos())
    }

    /// Projection of `self` onto `w`: `⟨self, w⟩ / ⟨w, w⟩ · w`.
    pub fn proj(&self, w: &Vector) -> Result<Vector> {
        let (left, right) = (self.field(), w.field());
        if left != right {
            return Err(LinalgError::FieldMismatch { left, right });
        }
        check_dims(self.dim(), w.dim())?;
        if w.is_zero() {
            return Err(zero_vector_error("projection onto a vector"));
        }
        let coefficient = self.inner_product(w)? / w.inner_product(w)?;
        w.scalar_multiply(coefficient)
    }

    /// Signed length of `self` along `w`: `‖self‖·cos(angle(self, w))`.
    pub fn component(&self, w: &Vector) -> Result<f64> {
        check_dims(self.dim(), w.dim())?;
        if w.is_zero() {
            return Err(zero_vector_error("component along a vector"));
        }
        if self.is_zero() {
            return Ok(0.0);
        }
        Ok(self.norm()? * self.angle(w)?.cos())
    }

    /// What is left of `self` after removing its projection onto `w`.
    pub fn perp(&self, w: &Vector) -> Result<Vector> {
        self.subtract(&self.proj(w)?)
    }

    /// Cross product of two vectors in ℝ³.
    pub fn cross_product(&self, w: &Vector) -> Result<Vector> {
        let (&[u0, u1, u2], &[v0, v1, v2]) = (self.components(), w.components()) else {
            return Err(LinalgError::InvalidOperation(format!(
                "cross product needs two vectors in R^3, got dimensions {} and {}",
                self.dim(),
                w.dim()
            )));
        };
        if self.field() != Field::Real || w.field() != Field::Real {
            return Err(LinalgError::InvalidOperation(
                "cross product is only defined over the reals".into(),
            ));
        }
        Vector::new(vec![
            u1 * v2 - u2 * v1,
            u2 * v0 - u0 * v2,
            u0 * v1 - u1 * v0,
        ])
    }

    /// `true` when one vector is a scalar multiple of the other.
    ///
    /// A zero vector is a multiple of anything. Otherwise every pair of
    /// components must agree with a single ratio `vᵢ / wᵢ` up to tolerance;
    /// an exact zero facing a nonzero entry rules the pair out.
    pub fn is_scalar_multiple(&self, w: &Vector) -> Result<bool> {
        check_dims(self.dim(), w.dim())?;
        if self.is_zero() || w.is_zero() {
            return Ok(true);
        }
        let mut ratio: Option<Scalar> = None;
        for (&a, &b) in self.iter().zip(w.iter()) {
            match (a.is_zero(), b.is_zero()) {
                (true, true) => continue,
                (true, false) | (false, true) => return Ok(false),
                (false, false) => {}
            }
            let r = a / b;
            match ratio {
                None => ratio = Some(r),
                Some(m) if !m.approx_eq(r) => return Ok(false),
                Some(_) => {}
            }
        }
        if ratio.is_none() {
            // both vectors nonzero, so some pair had two nonzero entries
            return Err(LinalgError::InvalidOperation(
                "no ratio found between two nonzero vectors".into(),
            ));
        }
        Ok(true)
    }
}
