//! Cyclic shift group for circles.

use crate::error::SpaceError;
use crate::group::Group;
use crate::line;
use morpho_core::{AxisIndices, Offset};
use smallvec::{smallvec, SmallVec};

/// The cyclic shifts `[0], [1], ..., [len - 1]` acting on a
/// [`Circle`](crate::Circle) of the same length.
///
/// Negation reduces modulo `len`, so the group is closed: the inverse
/// of every enumerated shift is itself enumerated. The canonical use
/// is the 12 semitone transpositions of the pitch-class circle.
#[derive(Debug, Clone)]
pub struct CyclicShifts {
    len: u32,
}

impl CyclicShifts {
    /// Create the cyclic shift group with offsets `0..len` mod `len`.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if `len == 0`, or
    /// `Err(SpaceError::DimensionTooLarge)` if `len > i32::MAX`.
    pub fn new(len: u32) -> Result<Self, SpaceError> {
        line::check_1d_len(len)?;
        Ok(Self { len })
    }

    /// Number of offsets.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Always returns `false` — construction rejects `len == 0`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Group for CyclicShifts {
    fn ndim(&self) -> usize {
        1
    }

    fn shift_count(&self) -> usize {
        self.len as usize
    }

    fn axis_sizes(&self) -> SmallVec<[usize; 4]> {
        smallvec![self.len as usize]
    }

    fn canonical_ordering(&self) -> Vec<Offset> {
        line::canonical_ordering_1d(self.len)
    }

    fn negate(&self, shift: &Offset) -> Offset {
        smallvec![(-shift[0]).rem_euclid(self.len as i32)]
    }

    fn resolve(&self, shift: &Offset) -> Result<AxisIndices, SpaceError> {
        if shift.len() != 1 {
            return Err(SpaceError::OutOfBounds {
                coord: shift.clone(),
                bounds: format!("expected 1 axis, got {}", shift.len()),
            });
        }
        Ok(smallvec![shift[0].rem_euclid(self.len as i32) as usize])
    }

    fn structure_eq(&self, other: &dyn Group) -> bool {
        (other as &dyn std::any::Any)
            .downcast_ref::<Self>()
            .is_some_and(|o| self.len == o.len)
    }
}
