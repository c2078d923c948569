//! Integer translation group for bounded lines.

use crate::error::SpaceError;
use crate::group::Group;
use crate::line;
use morpho_core::{AxisIndices, Offset};
use smallvec::{smallvec, SmallVec};

/// The translation offsets `[0], [1], ..., [len - 1]` acting on a
/// [`Line`](crate::Line).
///
/// Negation flips the sign without reduction, so `negate` can produce
/// an offset outside the enumerated range. That is intentional: the
/// dilation loop applies negated offsets to the image's space, never
/// back to the group's own array, and the paired space decides whether
/// the shifted coordinate is in bounds.
#[derive(Debug, Clone)]
pub struct Translations {
    len: u32,
}

impl Translations {
    /// Create the translation group with offsets `0..len`.
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

impl Group for Translations {
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
        smallvec![-shift[0]]
    }

    fn resolve(&self, shift: &Offset) -> Result<AxisIndices, SpaceError> {
        let i = line::check_1d_bounds(shift, self.len)?;
        Ok(smallvec![i as usize])
    }

    fn structure_eq(&self, other: &dyn Group) -> bool {
        (other as &dyn std::any::Any)
            .downcast_ref::<Self>()
            .is_some_and(|o| self.len == o.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;

    fn o(i: i32) -> Offset {
        smallvec![i]
    }

    #[test]
    fn ordering_ascending() {
        let g = Translations::new(3).unwrap();
        assert_eq!(g.canonical_ordering(), vec![o(0), o(1), o(2)]);
    }

    #[test]
    fn negate_flips_sign() {
        let g = Translations::new(3).unwrap();
        assert_eq!(g.negate(&o(2)), o(-2));
        assert_eq!(g.negate(&o(0)), o(0));
    }

    #[test]
    fn negate_involutive() {
        let g = Translations::new(5).unwrap();
        for s in g.canonical_ordering() {
            assert_eq!(g.negate(&g.negate(&s)), s);
        }
    }

    #[test]
    fn resolve_enumerated_offsets() {
        let g = Translations::new(4).unwrap();
        assert_eq!(g.resolve(&o(3)).unwrap().as_slice(), &[3]);
        assert!(matches!(
            g.resolve(&o(-1)),
            Err(SpaceError::OutOfBounds { .. })
        ));
        assert!(matches!(
            g.resolve(&o(4)),
            Err(SpaceError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn new_zero_len_returns_error() {
        assert!(matches!(Translations::new(0), Err(SpaceError::EmptySpace)));
    }

    #[test]
    fn compliance_full() {
        let g = Translations::new(8).unwrap();
        compliance::run_group_compliance(&g);
    }
}
