//! Scalars, vectors and the inner-product geometry built on them.

mod metric;
mod scalar;
mod vector;

pub use scalar::{Field, Scalar, TOLERANCE};
pub use vector::{add_all, Vector};
