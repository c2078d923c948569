//! Cyclic 1-axis space (modular wrap, never out of bounds).

use crate::error::SpaceError;
use crate::line;
use crate::space::Space;
use morpho_core::{AxisIndices, Coord, Offset};
use smallvec::{smallvec, SmallVec};

/// A circle of `len` coordinates with modular arithmetic.
///
/// The action reduces modulo `len`, so every shifted coordinate stays
/// on the circle and [`resolve`](Space::resolve) never fails. The
/// canonical use is the 12-coordinate pitch-class circle.
///
/// # Examples
///
/// ```
/// use morpho_space::{Circle, Space};
/// use smallvec::smallvec;
///
/// let circle = Circle::new(12).unwrap();
/// let shifted = circle.act(&smallvec![10], &smallvec![4]);
/// assert_eq!(shifted.as_slice(), &[2]);
/// assert_eq!(circle.resolve(&shifted).unwrap().as_slice(), &[2]);
/// ```
#[derive(Debug, Clone)]
pub struct Circle {
    len: u32,
}

impl Circle {
    /// Maximum length: coordinates use `i32`, so `len` must fit.
    pub const MAX_LEN: u32 = i32::MAX as u32;

    /// Create a circle with `len` coordinates.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if `len == 0`, or
    /// `Err(SpaceError::DimensionTooLarge)` if `len > i32::MAX`.
    pub fn new(len: u32) -> Result<Self, SpaceError> {
        line::check_1d_len(len)?;
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

impl Space for Circle {
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
        line::canonical_ordering_1d(self.len)
    }

    fn act(&self, point: &Coord, shift: &Offset) -> Coord {
        smallvec![(point[0] + shift[0]).rem_euclid(self.len as i32)]
    }

    fn resolve(&self, point: &Coord) -> Result<AxisIndices, SpaceError> {
        if point.len() != 1 {
            return Err(SpaceError::OutOfBounds {
                coord: point.clone(),
                bounds: format!("expected 1 axis, got {}", point.len()),
            });
        }
        Ok(smallvec![point[0].rem_euclid(self.len as i32) as usize])
    }

    fn topology_eq(&self, other: &dyn Space) -> bool {
        (other as &dyn std::any::Any)
            .downcast_ref::<Self>()
            .is_some_and(|o| self.len == o.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn c(i: i32) -> Coord {
        smallvec![i]
    }

    // ── Action tests ────────────────────────────────────────────

    #[test]
    fn act_interior() {
        let s = Circle::new(12).unwrap();
        assert_eq!(s.act(&c(3), &c(4)), c(7));
    }

    #[test]
    fn act_wraps_forward() {
        let s = Circle::new(12).unwrap();
        assert_eq!(s.act(&c(10), &c(4)), c(2));
    }

    #[test]
    fn act_wraps_backward() {
        let s = Circle::new(12).unwrap();
        assert_eq!(s.act(&c(1), &c(-4)), c(9));
    }

    // ── Resolution tests ────────────────────────────────────────

    #[test]
    fn resolve_never_out_of_bounds() {
        let s = Circle::new(12).unwrap();
        assert_eq!(s.resolve(&c(25)).unwrap().as_slice(), &[1]);
        assert_eq!(s.resolve(&c(-1)).unwrap().as_slice(), &[11]);
    }

    #[test]
    fn resolve_wrong_rank() {
        let s = Circle::new(12).unwrap();
        let coord: Coord = smallvec![1, 2];
        assert!(matches!(
            s.resolve(&coord),
            Err(SpaceError::OutOfBounds { .. })
        ));
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_zero_len_returns_error() {
        assert!(matches!(Circle::new(0), Err(SpaceError::EmptySpace)));
    }

    // ── Compliance ──────────────────────────────────────────────

    #[test]
    fn compliance_full() {
        let s = Circle::new(12).unwrap();
        compliance::run_space_compliance(&s);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn act_then_unact_returns(len in 1u32..50, p in 0i32..50, s in -50i32..50) {
            let p = p % len as i32;
            let circle = Circle::new(len).unwrap();
            let shifted = circle.act(&c(p), &c(s));
            let back = circle.act(&shifted, &c(-s));
            prop_assert_eq!(back, c(p));
        }

        #[test]
        fn act_stays_on_circle(len in 1u32..50, p in -100i32..100, s in -100i32..100) {
            let circle = Circle::new(len).unwrap();
            let shifted = circle.act(&c(p), &c(s));
            prop_assert!(shifted[0] >= 0 && shifted[0] < len as i32);
        }
    }
}
