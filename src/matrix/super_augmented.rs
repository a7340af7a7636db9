//! One coefficient matrix paired with several right-hand sides.

use serde::{Deserialize, Serialize};

use super::Matrix;
use crate::error::{check_dims, LinalgError, Result};
use crate::math::Vector;

/// `[A | B]`: solves `A x_k = b_k` for every column `b_k` of `B` at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuperAugmentedMatrix {
    lhs: Matrix,
    rhs: Matrix,
}

impl SuperAugmentedMatrix {
    /// Pair `lhs` with the right-hand-side block `rhs`.
    ///
    /// Both must be unaugmented and have the same number of rows.
    pub fn new(lhs: Matrix, rhs: Matrix) -> Result<Self> {
        if lhs.is_augmented() || rhs.is_augmented() {
            return Err(LinalgError::Augmentation(
                "both blocks of a super-augmented matrix must be unaugmented".into(),
            ));
        }
        check_dims(lhs.m(), rhs.m())?;
        Ok(Self { lhs, rhs })
    }

    /// Coefficient block.
    pub fn lhs(&self) -> &Matrix {
        &self.lhs
    }

    /// Right-hand-side block.
    pub fn rhs(&self) -> &Matrix {
        &self.rhs
    }

    /// Number of rows.
    pub fn m(&self) -> usize {
        self.lhs.m()
    }

    /// Number of coefficient columns.
    pub fn n(&self) -> usize {
        self.lhs.n()
    }

    /// Reduce in place so that `lhs` is in RREF and every column of `rhs` is
    /// expressed against its pivots.
    ///
    /// Each right-hand side is reduced alongside its own copy of `lhs`; the
    /// pivot search never looks at `b`, so all copies pivot identically and
    /// the collected columns line up with the final reduction of `lhs`.
    pub fn to_rref(&mut self) -> Result<()> {
        let columns = self.reduced_columns()?;
        self.lhs.to_rref()?;
        self.rhs = Matrix::from_columns(&columns)?;
        log::debug!(
            "reduced {}x{} system with {} right-hand sides",
            self.m(),
            self.n(),
            columns.len()
        );
        Ok(())
    }

    fn reduce_column(&self, k: usize) -> Result<Vector> {
        let mut single = self.lhs.clone();
        single.augment_with(&self.rhs.col(k)?)?;
        single.to_rref()?;
        single.get_b()
    }

    #[cfg(not(feature = "rayon"))]
    fn reduced_columns(&self) -> Result<Vec<Vector>> {
        (1..=self.rhs.n()).map(|k| self.reduce_column(k)).collect()
    }

    #[cfg(feature = "rayon")]
    fn reduced_columns(&self) -> Result<Vec<Vector>> {
        use rayon::prelude::*;

        (1..=self.rhs.n())
            .into_par_iter()
            .map(|k| self.reduce_column(k))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lhs() -> Matrix {
        Matrix::from_real(&[
            [1.0, -2.0, -1.0, 3.0],
            [2.0, -4.0, 1.0, 0.0],
            [1.0, -2.0, 2.0, -3.0],
        ])
        .unwrap()
    }

    fn rhs() -> Matrix {
        Matrix::from_real(&[
            [1.0, 1.0, -1.0, 0.0],
            [5.0, 2.0, 4.0, 0.0],
            [4.0, 3.0, 5.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn every_column_is_reduced_against_the_same_pivots() {
        let mut sam = SuperAugmentedMatrix::new(lhs(), rhs()).unwrap();
        sam.to_rref().unwrap();

        let mut reduced = lhs();
        reduced.to_rref().unwrap();
        assert_eq!(sam.lhs(), &reduced);

        let expected = Matrix::from_real(&[
            [2.0, 1.0, 1.0, 0.0],
            [1.0, 0.0, 2.0, 0.0],
            [0.0, 2.0, 0.0, 0.0],
        ])
        .unwrap();
        assert_eq!(sam.rhs(), &expected);
        assert_eq!((sam.m(), sam.n()), (3, 4));
    }

    #[test]
    fn columns_match_single_rhs_reduction() {
        let mut sam = SuperAugmentedMatrix::new(lhs(), rhs()).unwrap();
        sam.to_rref().unwrap();
        for k in 1..=rhs().n() {
            let mut single = lhs();
            single.augment_with(&rhs().col(k).unwrap()).unwrap();
            let consistent = single.is_consistent().unwrap();
            single.to_rref().unwrap();
            assert_eq!(sam.rhs().col(k).unwrap(), single.get_b().unwrap());

            let mut recombined = sam.lhs().clone();
            recombined.augment_with(&sam.rhs().col(k).unwrap()).unwrap();
            assert_eq!(recombined.is_consistent().unwrap(), consistent);
        }
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel_reduction_keeps_column_order() {
        use rand::{Rng, SeedableRng};
        use rand_xoshiro::Xoshiro256PlusPlus;

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);
        let rows: Vec<Vec<f64>> = (0..3)
            .map(|_| (0..32).map(|_| f64::from(rng.gen_range(-5_i32..=5))).collect())
            .collect();
        let block = Matrix::from_real(&rows).unwrap();

        let mut sam = SuperAugmentedMatrix::new(lhs(), block.clone()).unwrap();
        sam.to_rref().unwrap();
        assert_eq!(sam.rhs().n(), 32);
        for k in 1..=block.n() {
            let mut single = lhs();
            single.augment_with(&block.col(k).unwrap()).unwrap();
            single.to_rref().unwrap();
            assert_eq!(sam.rhs().col(k).unwrap(), single.get_b().unwrap());
        }
    }

    #[test]
    fn construction_checks_blocks() {
        let short = Matrix::from_real(&[[1.0]]).unwrap();
        assert!(matches!(
            SuperAugmentedMatrix::new(lhs(), short),
            Err(LinalgError::DimensionMismatch { left: 3, right: 1 })
        ));
        let mut augmented = lhs();
        augmented
            .augment_with(&Vector::from_real(&[1.0, 2.0, 3.0]).unwrap())
            .unwrap();
        assert!(matches!(
            SuperAugmentedMatrix::new(augmented, rhs()),
            Err(LinalgError::Augmentation(_))
        ));
    }

    #[test]
    fn zero_first_column_leaves_matrix_untouched() {
        let degenerate = Matrix::from_real(&[[0.0, 1.0], [0.0, 1.0], [0.0, 1.0]]).unwrap();
        let mut sam = SuperAugmentedMatrix::new(degenerate, rhs()).unwrap();
        assert_eq!(sam.to_rref(), Err(LinalgError::ReductionPrecondition));
        assert_eq!(sam.rhs(), &rhs());
    }
}
