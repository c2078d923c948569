//! Runtime-paired sum of the concrete lattices.
//!
//! [`DynLattice`] is for callers that pick their value domain at
//! runtime (a file loader, a REPL). It trades the compile-time pairing
//! guarantees of the statically-typed lattices for runtime checks:
//! combining levels from different variants fails with
//! [`LatticeError::TypeMismatch`], and a pairing neither variant
//! defines fails with [`LatticeError::UnsupportedCombination`].

use crate::boolean::BooleanLattice;
use crate::rhythmic::{RhythmLevel, RhythmicLattice};
use morpho_core::{Lattice, LatticeError, LatticeProduct, LatticeQuotient};
use std::fmt;

/// A level drawn from one of the concrete lattices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DynLevel {
    /// A boolean level.
    Boolean(bool),
    /// A rhythmic level.
    Rhythm(RhythmLevel),
}

impl DynLevel {
    fn variant(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Rhythm(_) => "rhythmic",
        }
    }

    fn as_boolean(&self) -> Result<bool, LatticeError> {
        match self {
            Self::Boolean(v) => Ok(*v),
            other => Err(LatticeError::TypeMismatch {
                expected: "boolean",
                found: other.variant(),
            }),
        }
    }

    fn as_rhythm(&self) -> Result<RhythmLevel, LatticeError> {
        match self {
            Self::Rhythm(v) => Ok(*v),
            other => Err(LatticeError::TypeMismatch {
                expected: "rhythmic",
                found: other.variant(),
            }),
        }
    }
}

// Booleans render as 0/1, rhythms with their glyphs.
impl fmt::Display for DynLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(false) => write!(f, "0"),
            Self::Boolean(true) => write!(f, "1"),
            Self::Rhythm(level) => write!(f, "{level}"),
        }
    }
}

/// A lattice chosen at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DynLattice {
    /// The boolean lattice.
    Boolean(BooleanLattice),
    /// The rhythmic lattice.
    Rhythmic(RhythmicLattice),
}

impl DynLattice {
    /// The boolean variant.
    pub fn boolean() -> Self {
        Self::Boolean(BooleanLattice)
    }

    /// The rhythmic variant.
    pub fn rhythmic() -> Self {
        Self::Rhythmic(RhythmicLattice)
    }

    fn variant(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Rhythmic(_) => "rhythmic",
        }
    }
}

impl Lattice for DynLattice {
    type Level = DynLevel;

    fn bot(&self) -> DynLevel {
        match self {
            Self::Boolean(l) => DynLevel::Boolean(l.bot()),
            Self::Rhythmic(l) => DynLevel::Rhythm(l.bot()),
        }
    }

    fn top(&self) -> DynLevel {
        match self {
            Self::Boolean(l) => DynLevel::Boolean(l.top()),
            Self::Rhythmic(l) => DynLevel::Rhythm(l.top()),
        }
    }

    fn le(&self, a: &DynLevel, b: &DynLevel) -> Result<bool, LatticeError> {
        match self {
            Self::Boolean(l) => l.le(&a.as_boolean()?, &b.as_boolean()?),
            Self::Rhythmic(l) => l.le(&a.as_rhythm()?, &b.as_rhythm()?),
        }
    }

    fn join(&self, a: &DynLevel, b: &DynLevel) -> Result<DynLevel, LatticeError> {
        match self {
            Self::Boolean(l) => Ok(DynLevel::Boolean(l.join(&a.as_boolean()?, &b.as_boolean()?)?)),
            Self::Rhythmic(l) => Ok(DynLevel::Rhythm(l.join(&a.as_rhythm()?, &b.as_rhythm()?)?)),
        }
    }

    fn meet(&self, a: &DynLevel, b: &DynLevel) -> Result<DynLevel, LatticeError> {
        match self {
            Self::Boolean(l) => Ok(DynLevel::Boolean(l.meet(&a.as_boolean()?, &b.as_boolean()?)?)),
            Self::Rhythmic(l) => Ok(DynLevel::Rhythm(l.meet(&a.as_rhythm()?, &b.as_rhythm()?)?)),
        }
    }
}

impl LatticeProduct for DynLattice {
    type Output = DynLattice;

    fn product(&self, rhs: &DynLattice) -> Result<DynLattice, LatticeError> {
        match (self, rhs) {
            (Self::Boolean(_), Self::Boolean(_)) => Ok(DynLattice::boolean()),
            // A boolean on either side gates the rhythmic value.
            (Self::Boolean(_), Self::Rhythmic(_)) | (Self::Rhythmic(_), Self::Boolean(_)) => {
                Ok(DynLattice::rhythmic())
            }
            (Self::Rhythmic(_), Self::Rhythmic(_)) => Err(LatticeError::UnsupportedCombination {
                lhs: self.variant(),
                rhs: rhs.variant(),
            }),
        }
    }

    fn add(&self, a: &DynLevel, b: &DynLevel) -> Result<DynLevel, LatticeError> {
        match (a, b) {
            (DynLevel::Boolean(x), DynLevel::Boolean(y)) => Ok(DynLevel::Boolean(*x && *y)),
            (DynLevel::Boolean(x), DynLevel::Rhythm(y)) => Ok(DynLevel::Rhythm(if *x {
                *y
            } else {
                RhythmLevel::Rest
            })),
            (DynLevel::Rhythm(x), DynLevel::Boolean(y)) => Ok(DynLevel::Rhythm(if *y {
                *x
            } else {
                RhythmLevel::Rest
            })),
            (DynLevel::Rhythm(_), DynLevel::Rhythm(_)) => {
                Err(LatticeError::UnsupportedCombination {
                    lhs: a.variant(),
                    rhs: b.variant(),
                })
            }
        }
    }
}

impl LatticeQuotient for DynLattice {
    type Output = DynLattice;

    fn quotient(&self, rhs: &DynLattice) -> Result<DynLattice, LatticeError> {
        match (self, rhs) {
            (Self::Boolean(_), Self::Boolean(_)) => Ok(DynLattice::boolean()),
            (Self::Rhythmic(_), Self::Rhythmic(_)) => Ok(DynLattice::boolean()),
            _ => Err(LatticeError::UnsupportedCombination {
                lhs: self.variant(),
                rhs: rhs.variant(),
            }),
        }
    }

    fn subtract(&self, a: &DynLevel, b: &DynLevel) -> Result<DynLevel, LatticeError> {
        match (a, b) {
            (DynLevel::Boolean(x), DynLevel::Boolean(y)) => Ok(DynLevel::Boolean(!*y || *x)),
            (DynLevel::Rhythm(x), DynLevel::Rhythm(y)) => Ok(DynLevel::Boolean(x >= y)),
            _ => Err(LatticeError::UnsupportedCombination {
                lhs: a.variant(),
                rhs: b.variant(),
            }),
        }
    }
}
