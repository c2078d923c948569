//! Bounded 1-axis space.

use crate::error::SpaceError;
use crate::space::Space;
use morpho_core::{AxisIndices, Coord, Offset};
use smallvec::{smallvec, SmallVec};

/// A bounded line of `len` coordinates `[0], [1], ..., [len - 1]`.
///
/// The action adds the offset without wrapping, so shifted coordinates
/// can leave the extent; [`resolve`](Space::resolve) reports those as
/// out of bounds. This is the boundary behavior the morphology
/// operators rely on: contributions from outside the line are skipped.
///
/// # Examples
///
/// ```
/// use morpho_space::{Line, Space};
/// use smallvec::smallvec;
///
/// let line = Line::new(5).unwrap();
/// assert_eq!(line.cell_count(), 5);
///
/// let shifted = line.act(&smallvec![4], &smallvec![2]);
/// assert_eq!(shifted.as_slice(), &[6]);
/// assert!(line.resolve(&shifted).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Line {
    len: u32,
}

impl Line {
    /// Maximum length: coordinates use `i32`, so `len` must fit.
    pub const MAX_LEN: u32 = i32::MAX as u32;

    /// Create a line with `len` coordinates.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if `len == 0`, or
    /// `Err(SpaceError::DimensionTooLarge)` if `len > i32::MAX`.
    pub fn new(len: u32) -> Result<Self, SpaceError> {
        check_1d_len(len)?;
        Ok(Self { len })
    }

    /// Number of coordinates.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Always returns `false` — construction rejects `len == 0`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

// ── pub(crate) helpers shared with Circle ────────────────────────────

/// Validate a 1-axis length parameter.
pub(crate) fn check_1d_len(len: u32) -> Result<(), SpaceError> {
    if len == 0 {
        return Err(SpaceError::EmptySpace);
    }
    if len > i32::MAX as u32 {
        return Err(SpaceError::DimensionTooLarge {
            name: "len",
            value: len,
            max: i32::MAX as u32,
        });
    }
    Ok(())
}

/// Canonical ordering for a 1-axis domain: `[0], [1], ..., [len-1]`.
pub(crate) fn canonical_ordering_1d(len: u32) -> Vec<Coord> {
    (0..len as i32).map(|i| smallvec![i]).collect()
}

/// Check that a coordinate is one-dimensional and within `[0, len)`.
pub(crate) fn check_1d_bounds(coord: &Coord, len: u32) -> Result<i32, SpaceError> {
    if coord.len() != 1 {
        return Err(SpaceError::OutOfBounds {
            coord: coord.clone(),
            bounds: format!("expected 1 axis, got {}", coord.len()),
        });
    }
    let i = coord[0];
    if i < 0 || i >= len as i32 {
        return Err(SpaceError::OutOfBounds {
            coord: coord.clone(),
            bounds: format!("[0, {len})"),
        });
    }
    Ok(i)
}

impl Space for Line {
    fn ndim(&self) -> usize {
        1
    }

    fn cell_count(&self) -> usize {
        self.len as usize
    }

    fn axis_sizes(&self) -> SmallVec<[usize; 4]> {
        smallvec![self.len as usize]
    }

    fn canonical_ordering(&self) -> Vec<Coord> {
        canonical_ordering_1d(self.len)
    }

    fn act(&self, point: &Coord, shift: &Offset) -> Coord {
        smallvec![point[0] + shift[0]]
    }

    fn resolve(&self, point: &Coord) -> Result<AxisIndices, SpaceError> {
        let i = check_1d_bounds(point, self.len)?;
        Ok(smallvec![i as usize])
    }

    fn topology_eq(&self, other: &dyn Space) -> bool {
        (other as &dyn std::any::Any)
            .downcast_ref::<Self>()
            .is_some_and(|o| self.len == o.len)
    }
}
