//! Scalars over ℝ or ℂ
//!
//! A [`Scalar`] carries its field as a runtime tag. Arithmetic between two
//! reals stays real; as soon as one operand is complex the result is complex,
//! even when its imaginary part happens to vanish. This mirrors the way a
//! vector's field is derived from its components: one complex entry makes the
//! whole vector complex.

use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_complex::Complex64;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

/// Absolute threshold below which two values are treated as equal,
/// and a single value is treated as zero.
pub const TOLERANCE: f64 = 1e-4;

/// The scalar domain of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// ℝ
    Real,
    /// ℂ
    Complex,
}

/// A real or complex number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Scalar {
    /// Real number.
    Real(f64),
    /// Complex number.
    Complex(Complex64),
}

impl Scalar {
    /// Complex scalar `re + im·i`.
    #[inline]
    pub fn complex(re: f64, im: f64) -> Self {
        Scalar::Complex(Complex64::new(re, im))
    }

    /// Field this scalar belongs to.
    #[inline]
    pub fn field(self) -> Field {
        match self {
            Scalar::Real(_) => Field::Real,
            Scalar::Complex(_) => Field::Complex,
        }
    }

    /// `true` for the `Real` variant.
    #[inline]
    pub fn is_real(self) -> bool {
        matches!(self, Scalar::Real(_))
    }

    /// Real part.
    #[inline]
    pub fn re(self) -> f64 {
        match self {
            Scalar::Real(a) => a,
            Scalar::Complex(z) => z.re,
        }
    }

    /// Imaginary part (zero for reals).
    #[inline]
    pub fn im(self) -> f64 {
        match self {
            Scalar::Real(_) => 0.0,
            Scalar::Complex(z) => z.im,
        }
    }

    /// Widen to a complex number.
    #[inline]
    pub fn to_complex(self) -> Complex64 {
        match self {
            Scalar::Real(a) => Complex64::new(a, 0.0),
            Scalar::Complex(z) => z,
        }
    }

    /// Same value, tagged complex.
    #[inline]
    pub fn promote(self) -> Self {
        Scalar::Complex(self.to_complex())
    }

    /// Complex conjugate; identity on reals.
    #[inline]
    pub fn conj(self) -> Self {
        match self {
            Scalar::Real(a) => Scalar::Real(a),
            Scalar::Complex(z) => Scalar::Complex(z.conj()),
        }
    }

    /// Absolute value for reals, modulus `sqrt(re² + im²)` for complex numbers.
    #[inline]
    pub fn modulus(self) -> f64 {
        match self {
            Scalar::Real(a) => a.abs(),
            Scalar::Complex(z) => z.norm(),
        }
    }

    /// Multiplicative inverse.
    #[inline]
    pub fn recip(self) -> Self {
        Scalar::one() / self
    }

    /// `|self - other| <= TOLERANCE`
    #[inline]
    pub fn approx_eq(self, other: Scalar) -> bool {
        (self - other).modulus() <= TOLERANCE
    }

    /// `|self| <= TOLERANCE`
    #[inline]
    pub fn is_negligible(self) -> bool {
        self.modulus() <= TOLERANCE
    }
}

// Exact value comparison: `Real(1.0) == Complex(1 + 0i)`.
impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        let same = |a: f64, b: f64| a.partial_cmp(&b) == Some(Ordering::Equal);
        match (*self, *other) {
            (Scalar::Real(a), Scalar::Real(b)) => same(a, b),
            (a, b) => {
                let (x, y) = (a.to_complex(), b.to_complex());
                same(x.re, y.re) && same(x.im, y.im)
            }
        }
    }
}

macro_rules! scalar_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Scalar {
            type Output = Scalar;

            #[inline]
            fn $method(self, rhs: Scalar) -> Scalar {
                match (self, rhs) {
                    (Scalar::Real(a), Scalar::Real(b)) => Scalar::Real(a $op b),
                    (a, b) => Scalar::Complex(a.to_complex() $op b.to_complex()),
                }
            }
        }
    };
}

scalar_binop!(Add, add, +);
scalar_binop!(Sub, sub, -);
scalar_binop!(Mul, mul, *);
scalar_binop!(Div, div, /);

impl Neg for Scalar {
    type Output = Scalar;

    #[inline]
    fn neg(self) -> Scalar {
        match self {
            Scalar::Real(a) => Scalar::Real(-a),
            Scalar::Complex(z) => Scalar::Complex(-z),
        }
    }
}

impl Zero for Scalar {
    #[inline]
    fn zero() -> Self {
        Scalar::Real(0.0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        match self {
            Scalar::Real(a) => a.is_zero(),
            Scalar::Complex(z) => z.is_zero(),
        }
    }
}

impl One for Scalar {
    #[inline]
    fn one() -> Self {
        Scalar::Real(1.0)
    }
}

impl Sum for Scalar {
    fn sum<I: Iterator<Item = Scalar>>(iter: I) -> Self {
        iter.fold(Scalar::zero(), |acc, x| acc + x)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Real(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Real(f64::from(value))
    }
}

impl From<Complex64> for Scalar {
    fn from(value: Complex64) -> Self {
        Scalar::Complex(value)
    }
}
