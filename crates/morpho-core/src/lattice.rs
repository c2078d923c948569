//! The [`Lattice`] trait family: bounded ordered value domains and the
//! product/quotient combinators that pair them for dilation and erosion.

use crate::error::LatticeError;
use std::fmt;

/// A bounded partially ordered value domain.
///
/// Implementations must guarantee `bot() ≤ x ≤ top()` for every level
/// `x`, and that [`join`](Self::join) (supremum) and
/// [`meet`](Self::meet) (infimum) are commutative, associative,
/// idempotent, and order-consistent: `join(a, b) ≥ a, b` and
/// `meet(a, b) ≤ a, b`. The dilation and erosion results are
/// independent of iteration order exactly because of these laws; the
/// compliance tests in `morpho-lattices` verify them directly.
///
/// All comparison and combination methods return `Result` so that
/// lattices whose level variant is chosen at runtime can report
/// [`LatticeError::TypeMismatch`]. Statically-typed lattices never
/// fail.
pub trait Lattice: Clone + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// The value type held at each point or shift.
    type Level: Clone + fmt::Debug + PartialEq + Send + Sync + 'static;

    /// The least level: `bot() ≤ x` for all `x`.
    fn bot(&self) -> Self::Level;

    /// The greatest level: `x ≤ top()` for all `x`.
    fn top(&self) -> Self::Level;

    /// Partial order test: `a ≤ b`.
    fn le(&self, a: &Self::Level, b: &Self::Level) -> Result<bool, LatticeError>;

    /// Least upper bound of `a` and `b`.
    fn join(&self, a: &Self::Level, b: &Self::Level) -> Result<Self::Level, LatticeError>;

    /// Greatest lower bound of `a` and `b`.
    fn meet(&self, a: &Self::Level, b: &Self::Level) -> Result<Self::Level, LatticeError>;
}

/// Pairing of an image lattice with a structuring-element lattice for
/// dilation.
///
/// `Output` is the lattice of the dilated image's values. [`add`]
/// combines one image level with one structuring-element level; the
/// dilation loop folds the per-offset results with the output
/// lattice's `join`. `add` need not be the algebraic inverse of the
/// quotient's `subtract` — a boolean-gated pairing may zero out a
/// value on `add` and compare-and-booleanize on `subtract`.
///
/// [`add`]: Self::add
pub trait LatticeProduct<Rhs: Lattice = Self>: Lattice {
    /// The lattice of the dilation output.
    type Output: Lattice;

    /// Construct the output lattice for this pairing.
    ///
    /// Fails with [`LatticeError::UnsupportedCombination`] on
    /// runtime-paired lattices whose current variants do not combine.
    fn product(&self, rhs: &Rhs) -> Result<Self::Output, LatticeError>;

    /// Combine an image level with a structuring-element level.
    fn add(
        &self,
        a: &Self::Level,
        b: &Rhs::Level,
    ) -> Result<<Self::Output as Lattice>::Level, LatticeError>;
}

/// Pairing of an image lattice with a structuring-element lattice for
/// erosion.
///
/// Dual of [`LatticeProduct`]: `Output` is the lattice of the eroded
/// image's values, [`subtract`] combines one image level with one
/// structuring-element level, and the erosion loop folds the results
/// with the output lattice's `meet`.
///
/// [`subtract`]: Self::subtract
pub trait LatticeQuotient<Rhs: Lattice = Self>: Lattice {
    /// The lattice of the erosion output.
    type Output: Lattice;

    /// Construct the output lattice for this pairing.
    ///
    /// Fails with [`LatticeError::UnsupportedCombination`] on
    /// runtime-paired lattices whose current variants do not combine.
    fn quotient(&self, rhs: &Rhs) -> Result<Self::Output, LatticeError>;

    /// Combine an image level with a structuring-element level.
    fn subtract(
        &self,
        a: &Self::Level,
        b: &Rhs::Level,
    ) -> Result<<Self::Output as Lattice>::Level, LatticeError>;
}
