//! The core `Space` trait and `dyn Space` downcast support.

use crate::error::SpaceError;
use morpho_core::{AxisIndices, Coord, Offset};
use smallvec::SmallVec;
use std::any::Any;

/// A finite, deterministically ordered coordinate domain carrying a
/// group action.
///
/// Images are total mappings from a space's coordinates to lattice
/// levels; the dilation and erosion loops walk
/// [`canonical_ordering`](Self::canonical_ordering) and probe shifted
/// coordinates through [`act`](Self::act) and
/// [`resolve`](Self::resolve).
///
/// # Object safety
///
/// The trait is designed for use as `dyn Space`: images hold an
/// `Arc<dyn Space>`, and product spaces hold boxed components. Use
/// `downcast_ref` for opt-in specialization on concrete backends.
///
/// # Contract
///
/// - Two calls to `canonical_ordering` on the same instance return the
///   same sequence, with exactly [`cell_count`](Self::cell_count)
///   unique entries enumerated row-major over
///   [`axis_sizes`](Self::axis_sizes) (last axis fastest).
/// - `act` is total: it must produce a coordinate for any input pair,
///   even when the result lies outside the extent. Validity is checked
///   separately by `resolve`.
/// - `resolve` yields one array index per axis, each strictly below
///   the corresponding entry of `axis_sizes`, or fails with
///   [`SpaceError::OutOfBounds`].
pub trait Space: Any + Send + Sync + 'static {
    /// Number of axes.
    fn ndim(&self) -> usize;

    /// Total number of coordinates in the space.
    fn cell_count(&self) -> usize;

    /// Per-axis sizes of the backing array an image over this space
    /// must have.
    fn axis_sizes(&self) -> SmallVec<[usize; 4]>;

    /// All coordinates in deterministic canonical order.
    fn canonical_ordering(&self) -> Vec<Coord>;

    /// Apply `shift` to `point`.
    ///
    /// Total — the result may lie outside the declared extent.
    fn act(&self, point: &Coord, shift: &Offset) -> Coord;

    /// Per-axis array indices for `point`, or
    /// [`SpaceError::OutOfBounds`] if it lies outside the extent.
    fn resolve(&self, point: &Coord) -> Result<AxisIndices, SpaceError>;

    /// Returns `true` if `self` and `other` are the same concrete type
    /// with identical behavioral parameters.
    ///
    /// Implementors should downcast `other` to `Self` and compare all
    /// behavior-relevant fields; return `false` if the downcast fails.
    fn topology_eq(&self, other: &dyn Space) -> bool;
}

impl dyn Space {
    /// Attempt to downcast a trait object to a concrete space type.
    pub fn downcast_ref<T: Space>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}
