//! The unified operator-level error type.

use morpho_core::LatticeError;
use morpho_space::SpaceError;
use std::error::Error;
use std::fmt;

/// Errors from container construction or operator execution.
///
/// `ShapeMismatch` originates here; space and lattice failures are
/// wrapped so the operators can return a single error type while
/// preserving the underlying cause.
#[derive(Clone, Debug, PartialEq)]
pub enum MorphError {
    /// An array's declared shape disagrees with the owning space's or
    /// group's axis sizes, or the element count disagrees with the
    /// shape. Raised at construction, before any operator runs.
    ShapeMismatch {
        /// The shape the space or group declares.
        expected: Vec<usize>,
        /// The shape (or flat length) the caller supplied.
        found: Vec<usize>,
    },
    /// A coordinate failed to resolve.
    Space(SpaceError),
    /// A lattice combination or comparison failed.
    Lattice(LatticeError),
}

impl fmt::Display for MorphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { expected, found } => {
                write!(f, "array shape {found:?} does not match declared sizes {expected:?}")
            }
            Self::Space(e) => write!(f, "space error: {e}"),
            Self::Lattice(e) => write!(f, "lattice error: {e}"),
        }
    }
}

impl Error for MorphError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ShapeMismatch { .. } => None,
            Self::Space(e) => Some(e),
            Self::Lattice(e) => Some(e),
        }
    }
}

impl From<SpaceError> for MorphError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<LatticeError> for MorphError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shape_mismatch() {
        let e = MorphError::ShapeMismatch {
            expected: vec![12, 8],
            found: vec![8, 12],
        };
        assert_eq!(
            e.to_string(),
            "array shape [8, 12] does not match declared sizes [12, 8]"
        );
    }

    #[test]
    fn source_chains_space_error() {
        let e = MorphError::from(SpaceError::EmptySpace);
        assert!(e.source().is_some());
    }
}
