//! Two-valued lattice for flat morphology.

use morpho_core::{Lattice, LatticeError, LatticeProduct, LatticeQuotient};

/// The boolean lattice `false < true`.
///
/// This is classical binary morphology: a structuring-element level of
/// `true` marks an offset as part of the kernel. The self-product's
/// `add` is conjunction, so dilation becomes "any marked offset hits a
/// set point"; the self-quotient's `subtract` is the order test
/// `b ≤ a`, so erosion becomes "every marked offset lands on a set
/// point".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BooleanLattice;

impl BooleanLattice {
    /// Create the boolean lattice.
    pub fn new() -> Self {
        Self
    }
}

impl Lattice for BooleanLattice {
    type Level = bool;

    fn bot(&self) -> bool {
        false
    }

    fn top(&self) -> bool {
        true
    }

    fn le(&self, a: &bool, b: &bool) -> Result<bool, LatticeError> {
        Ok(!*a || *b)
    }

    fn join(&self, a: &bool, b: &bool) -> Result<bool, LatticeError> {
        Ok(*a || *b)
    }

    fn meet(&self, a: &bool, b: &bool) -> Result<bool, LatticeError> {
        Ok(*a && *b)
    }
}

impl LatticeProduct for BooleanLattice {
    type Output = BooleanLattice;

    fn product(&self, _rhs: &BooleanLattice) -> Result<BooleanLattice, LatticeError> {
        Ok(BooleanLattice)
    }

    fn add(&self, a: &bool, b: &bool) -> Result<bool, LatticeError> {
        Ok(*a && *b)
    }
}

impl LatticeQuotient for BooleanLattice {
    type Output = BooleanLattice;

    fn quotient(&self, _rhs: &BooleanLattice) -> Result<BooleanLattice, LatticeError> {
        Ok(BooleanLattice)
    }

    fn subtract(&self, a: &bool, b: &bool) -> Result<bool, LatticeError> {
        // b ≤ a: an unmarked offset imposes no constraint.
        Ok(!*b || *a)
    }
}
