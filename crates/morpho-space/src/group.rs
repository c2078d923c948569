//! The core `Group` trait and `dyn Group` downcast support.

use crate::error::SpaceError;
use morpho_core::{AxisIndices, Offset};
use smallvec::SmallVec;
use std::any::Any;

/// A finite, deterministically ordered set of offsets acting on a
/// space.
///
/// Structuring elements are total mappings from a group's offsets to
/// lattice levels. The dilation loop reads each offset through
/// [`negate`](Self::negate) before acting on the image's space; the
/// erosion loop applies offsets directly.
///
/// # Contract
///
/// - Two calls to `canonical_ordering` on the same instance return the
///   same sequence, with exactly [`shift_count`](Self::shift_count)
///   unique entries enumerated row-major over
///   [`axis_sizes`](Self::axis_sizes) (last axis fastest).
/// - `point + shift + negate(shift)` is expected to return to `point`
///   under the paired space's action. This is a caller-level
///   expectation: a group enumerating offsets `0..n` need not contain
///   the negation of each member.
/// - `resolve` yields one array index per axis for any enumerated
///   offset, or fails with [`SpaceError::OutOfBounds`].
pub trait Group: Any + Send + Sync + 'static {
    /// Number of axes.
    fn ndim(&self) -> usize;

    /// Total number of offsets in the group.
    fn shift_count(&self) -> usize;

    /// Per-axis sizes of the backing array a structuring element over
    /// this group must have.
    fn axis_sizes(&self) -> SmallVec<[usize; 4]>;

    /// All offsets in deterministic canonical order.
    fn canonical_ordering(&self) -> Vec<Offset>;

    /// The additive inverse of `shift`.
    fn negate(&self, shift: &Offset) -> Offset;

    /// Per-axis array indices for `shift`, or
    /// [`SpaceError::OutOfBounds`] if it lies outside the enumerated
    /// range.
    fn resolve(&self, shift: &Offset) -> Result<AxisIndices, SpaceError>;

    /// Returns `true` if `self` and `other` are the same concrete type
    /// with identical behavioral parameters.
    fn structure_eq(&self, other: &dyn Group) -> bool;
}

impl dyn Group {
    /// Attempt to downcast a trait object to a concrete group type.
    pub fn downcast_ref<T: Group>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}
