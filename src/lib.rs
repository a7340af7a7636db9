//! Vectors, linear systems and Gauss-Jordan reduction over ℝ and ℂ.
//!
//! Data flows leaf first: [`Vector`] → [`LinearEquation`] → [`LinearSystem`]
//! → [`Matrix`] → the reduction engine ([`Matrix::to_rref`], [`Matrix::rank`],
//! [`Matrix::nullity`], [`Matrix::is_consistent`], [`SuperAugmentedMatrix`]).
//!
//! Floating-point comparisons go through the fixed absolute [`TOLERANCE`].
//! Row operations and reduction mutate their argument; everything else
//! returns a new value. Clone a matrix first to keep the original.
//!
//! ```
//! use linsys::{Matrix, Vector};
//!
//! let mut a = Matrix::from_real(&[[1.0, -2.0, -1.0], [2.0, -4.0, 1.0]])?;
//! a.augment_with(&Vector::from_real(&[1.0, 5.0])?)?;
//! assert!(a.is_consistent()?);
//! a.to_rref()?;
//! assert_eq!(a.get_b()?, Vector::from_real(&[2.0, 1.0])?);
//! # Ok::<(), linsys::LinalgError>(())
//! ```

mod equation;
mod error;
mod math;
mod matrix;

pub use equation::{Ero, EroKind, LinearEquation, LinearSystem};
pub use error::{LinalgError, Result};
pub use math::*;
pub use matrix::{matrix_matrix_product, matrix_vector_product, Matrix, SuperAugmentedMatrix};
