//! Three-valued onset-strength lattice and its boolean pairings.

use crate::boolean::BooleanLattice;
use morpho_core::{Lattice, LatticeError, LatticeProduct, LatticeQuotient};
use std::fmt;

/// Onset strength at one grid cell: `Rest < SoftOnset < Onset`.
///
/// Renders as `-`, `·`, `x` respectively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RhythmLevel {
    /// Nothing sounds.
    Rest,
    /// A sustained or weak attack.
    SoftOnset,
    /// A full attack.
    Onset,
}

impl RhythmLevel {
    /// Decode the conventional numeric encoding `0`, `1`, `2`.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Rest),
            1 => Some(Self::SoftOnset),
            2 => Some(Self::Onset),
            _ => None,
        }
    }

    /// The numeric encoding of this level.
    pub fn code(&self) -> u8 {
        match self {
            Self::Rest => 0,
            Self::SoftOnset => 1,
            Self::Onset => 2,
        }
    }
}

impl fmt::Display for RhythmLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self {
            Self::Rest => '-',
            Self::SoftOnset => '·',
            Self::Onset => 'x',
        };
        write!(f, "{glyph}")
    }
}

/// The totally ordered lattice over [`RhythmLevel`].
///
/// On its own it supplies `join`/`meet` as max/min. Its pairings do
/// the morphological work: a boolean structuring element gates a
/// rhythmic image on the dilation side ([`LatticeProduct`]), and
/// eroding a rhythmic image by a rhythmic kernel booleanizes — the
/// output says whether the kernel's demands were met, not how loudly
/// ([`LatticeQuotient`]). `add` and `subtract` are deliberately not
/// inverses of one another.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RhythmicLattice;

impl RhythmicLattice {
    /// Create the rhythmic lattice.
    pub fn new() -> Self {
        Self
    }

    /// Decode a slice of numeric codes into levels.
    ///
    /// Returns `None` if any code is outside `0..=2`.
    pub fn levels_from_codes(codes: &[u8]) -> Option<Vec<RhythmLevel>> {
        codes.iter().map(|&c| RhythmLevel::from_code(c)).collect()
    }
}

impl Lattice for RhythmicLattice {
    type Level = RhythmLevel;

    fn bot(&self) -> RhythmLevel {
        RhythmLevel::Rest
    }

    fn top(&self) -> RhythmLevel {
        RhythmLevel::Onset
    }

    fn le(&self, a: &RhythmLevel, b: &RhythmLevel) -> Result<bool, LatticeError> {
        Ok(a <= b)
    }

    fn join(&self, a: &RhythmLevel, b: &RhythmLevel) -> Result<RhythmLevel, LatticeError> {
        Ok((*a).max(*b))
    }

    fn meet(&self, a: &RhythmLevel, b: &RhythmLevel) -> Result<RhythmLevel, LatticeError> {
        Ok((*a).min(*b))
    }
}

/// A boolean gate on the structuring-element side: `true` passes the
/// image level through, `false` silences it.
impl LatticeProduct<BooleanLattice> for RhythmicLattice {
    type Output = RhythmicLattice;

    fn product(&self, _rhs: &BooleanLattice) -> Result<RhythmicLattice, LatticeError> {
        Ok(RhythmicLattice)
    }

    fn add(&self, a: &RhythmLevel, b: &bool) -> Result<RhythmLevel, LatticeError> {
        Ok(if *b { *a } else { RhythmLevel::Rest })
    }
}

/// A boolean gate on the image side: a `true` activation stamps the
/// kernel level into the output, `false` stamps silence.
impl LatticeProduct<RhythmicLattice> for BooleanLattice {
    type Output = RhythmicLattice;

    fn product(&self, _rhs: &RhythmicLattice) -> Result<RhythmicLattice, LatticeError> {
        Ok(RhythmicLattice)
    }

    fn add(&self, a: &bool, b: &RhythmLevel) -> Result<RhythmLevel, LatticeError> {
        Ok(if *a { *b } else { RhythmLevel::Rest })
    }
}

/// Compare-and-booleanize: the output level records whether the image
/// met the kernel's demand (`a ≥ b`).
impl LatticeQuotient for RhythmicLattice {
    type Output = BooleanLattice;

    fn quotient(&self, _rhs: &RhythmicLattice) -> Result<BooleanLattice, LatticeError> {
        Ok(BooleanLattice)
    }

    fn subtract(&self, a: &RhythmLevel, b: &RhythmLevel) -> Result<bool, LatticeError> {
        Ok(a >= b)
    }
}
