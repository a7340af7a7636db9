//! Error types for vector, system and matrix operations.
//!
//! Every variant is a precondition violation: the kernel performs no I/O,
//! so a failure always means the caller drove it with invalid operands.

use thiserror::Error;

use crate::math::Field;

/// Errors raised by the linear algebra kernel.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Binary operation on operands of differing length.
    #[error("Dimension mismatch: left={left}, right={right}")]
    DimensionMismatch {
        /// Dimension of the left operand
        left: usize,
        /// Dimension of the right operand
        right: usize,
    },

    /// Operands live over different fields.
    #[error("Field mismatch: left={left:?}, right={right:?}")]
    FieldMismatch {
        /// Field of the left operand
        left: Field,
        /// Field of the right operand
        right: Field,
    },

    /// Operation undefined for the given operands (zero vector, wrong shape, ...).
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Elementary row operation violates its preconditions.
    #[error("Invalid elementary row operation: {0}")]
    InvalidEro(String),

    /// Augmented column accessed on a plain matrix, or augmentation of the wrong size.
    #[error("Augmentation error: {0}")]
    Augmentation(String),

    /// `to_rref` called on a matrix whose first column is entirely zero.
    #[error("Cannot reduce: first column is the zero vector")]
    ReductionPrecondition,

    /// 1-based index outside `[1, bound]`.
    #[error("Index {index} out of range [1, {bound}]")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Largest valid index
        bound: usize,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, LinalgError>;

/// Checks that `index` is a valid 1-based position in `[1, bound]`.
pub(crate) fn check_index(index: usize, bound: usize) -> Result<()> {
    if index == 0 || index > bound {
        return Err(LinalgError::IndexOutOfRange { index, bound });
    }
    Ok(())
}

/// Checks that two operands share a dimension.
pub(crate) fn check_dims(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(LinalgError::DimensionMismatch { left, right });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_bounds_are_one_based() {
        assert!(check_index(1, 3).is_ok());
        assert!(check_index(3, 3).is_ok());
        assert_eq!(
            check_index(0, 3),
            Err(LinalgError::IndexOutOfRange { index: 0, bound: 3 })
        );
        assert!(check_index(4, 3).is_err());
    }

    #[test]
    fn messages_name_the_operands() {
        let err = check_dims(2, 3).unwrap_err();
        assert_eq!(err.to_string(), "Dimension mismatch: left=2, right=3");
        assert_eq!(
            LinalgError::ReductionPrecondition.to_string(),
            "Cannot reduce: first column is the zero vector"
        );
    }
}
