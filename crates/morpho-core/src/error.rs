//! Error types for lattice algebra.

use std::fmt;

/// Errors arising from lattice combination or level comparison.
///
/// Statically-typed lattices never produce these: the generic bounds on
/// [`crate::LatticeProduct`] and [`crate::LatticeQuotient`] rule out
/// undefined pairings at compile time. Runtime-paired lattices (sum
/// types over several level variants) surface them when handed a
/// pairing or a level variant they do not define.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// Two levels from incompatible lattice variants were compared or
    /// combined.
    TypeMismatch {
        /// The level variant the operation expected.
        expected: &'static str,
        /// The level variant it received.
        found: &'static str,
    },
    /// The lattice pairing has no defined product or quotient.
    UnsupportedCombination {
        /// Left-hand (image-side) lattice.
        lhs: &'static str,
        /// Right-hand (structuring-element-side) lattice.
        rhs: &'static str,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { expected, found } => {
                write!(f, "level type mismatch: expected {expected}, found {found}")
            }
            Self::UnsupportedCombination { lhs, rhs } => {
                write!(f, "no lattice combinator defined for {lhs} with {rhs}")
            }
        }
    }
}

impl std::error::Error for LatticeError {}
