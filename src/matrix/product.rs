//! Matrix products expressed through columns.
//!
//! `A v` is the linear combination of the columns of `A` weighted by the
//! components of `v`, and column `i` of `A B` is `A` applied to column `i` of
//! `B`. Both reuse the vector arithmetic directly.

use super::Matrix;
use crate::error::{check_dims, LinalgError, Result};
use crate::math::{add_all, Vector};

fn require_plain(a: &Matrix) -> Result<()> {
    if a.is_augmented() {
        return Err(LinalgError::Augmentation(
            "products are defined on unaugmented matrices".into(),
        ));
    }
    Ok(())
}

/// `A v`, for an unaugmented `A` with `v.dim() == A.n()`.
pub fn matrix_vector_product(a: &Matrix, v: &Vector) -> Result<Vector> {
    require_plain(a)?;
    check_dims(a.n(), v.dim())?;
    let terms = (1..=a.n())
        .map(|i| {
            let weight = v.get(i)?;
            let column = a.col(i)?;
            // a real column of a complex product has to widen first
            let column = if weight.is_real() {
                column
            } else {
                column.to_complex()
            };
            column.scalar_multiply(weight)
        })
        .collect::<Result<Vec<_>>>()?;
    add_all(&terms)
}

/// `A B`, for unaugmented `A`, `B` with `A.n() == B.m()`.
pub fn matrix_matrix_product(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    require_plain(a)?;
    require_plain(b)?;
    check_dims(a.n(), b.m())?;
    let columns = (1..=b.n())
        .map(|i| matrix_vector_product(a, &b.col(i)?))
        .collect::<Result<Vec<_>>>()?;
    Matrix::from_columns(&columns)
}
