//! Morpho: mathematical morphology over abstract spaces and lattices.
//!
//! Classical morphology dilates and erodes binary pixel grids. Morpho
//! keeps the two operators but swaps every fixed ingredient for a
//! trait: the pixel grid becomes any finite [`space::Space`] acted on
//! by a [`space::Group`] of shifts, and the binary values become any
//! [`types::Lattice`], with cross-lattice combination described by
//! [`types::LatticeProduct`] and [`types::LatticeQuotient`].
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Morpho sub-crates. For most users, adding `morpho` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use morpho::prelude::*;
//! use std::sync::Arc;
//!
//! // A 16-cell boolean signal with a two-cell pulse and a stray blip.
//! let mut data = vec![false; 16];
//! data[3] = true;
//! data[4] = true;
//! data[11] = true;
//! let space: Arc<dyn Space> = Arc::new(Line::new(16).unwrap());
//! let signal = Image::new(space, BooleanLattice, &[16], data).unwrap();
//!
//! // A two-cell probe: opening removes anything narrower.
//! let group: Arc<dyn Group> = Arc::new(Translations::new(2).unwrap());
//! let probe =
//!     StructuringElement::new(group, BooleanLattice, &[2], vec![true, true]).unwrap();
//!
//! let opened = dilation(&erosion(&signal, &probe).unwrap(), &probe).unwrap();
//! assert!(opened.data()[3] && opened.data()[4]);
//! assert!(!opened.data()[11]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `morpho-core` | Coordinate types, lattice traits, lattice errors |
//! | [`space`] | `morpho-space` | Space and group traits, concrete backends, products |
//! | [`lattices`] | `morpho-lattices` | Boolean, rhythmic, and runtime-paired lattices |
//! | [`ops`] | `morpho-ops` | Images, structuring elements, dilation, erosion |
//! | [`music`] | `morpho-music` | Chroma rolls and chord kernels on the pitch cylinder |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinate types and the lattice trait family (`morpho-core`).
///
/// [`types::Lattice`] supplies `bot`/`top`/`le`/`join`/`meet`;
/// [`types::LatticeProduct`] and [`types::LatticeQuotient`] describe the
/// cross-lattice pairings the operators combine values with.
pub use morpho_core as types;

/// Spaces, groups, and their products (`morpho-space`).
///
/// Provides the [`space::Space`] and [`space::Group`] traits and
/// concrete backends: [`space::Line`], [`space::Circle`],
/// [`space::Translations`], [`space::CyclicShifts`],
/// [`space::ProductSpace`], and [`space::ProductGroup`].
pub use morpho_space as space;

/// Concrete lattices (`morpho-lattices`).
///
/// [`lattices::BooleanLattice`] for classical binary morphology,
/// [`lattices::RhythmicLattice`] for three-valued onset strengths, and
/// [`lattices::DynLattice`] when the value domain is picked at runtime.
pub use morpho_lattices as lattices;

/// Containers and operators (`morpho-ops`).
///
/// [`ops::Image`] and [`ops::StructuringElement`] pair an array with
/// its space or group; [`ops::dilation`] and [`ops::erosion`] are the
/// two adjoint sweeps.
pub use morpho_ops as ops;

/// Musical containers on the pitch-class cylinder (`morpho-music`).
///
/// [`music::ChromaRoll`] and [`music::ChordKernel`] wrap images and
/// structuring elements for chord detection and chord-shaped
/// denoising.
pub use morpho_music as music;

/// Common imports for typical Morpho usage.
///
/// ```rust
/// use morpho::prelude::*;
/// ```
///
/// This imports the trait family, the concrete spaces, groups, and
/// lattices, the containers, and the two operators.
pub mod prelude {
    // Coordinate types and lattice traits
    pub use morpho_core::{
        Coord, Lattice, LatticeError, LatticeProduct, LatticeQuotient, Offset,
    };

    // Spaces and groups
    pub use morpho_space::{
        Circle, CyclicShifts, Group, Line, ProductGroup, ProductSpace, Space, SpaceError,
        Translations,
    };

    // Lattices
    pub use morpho_lattices::{
        BooleanLattice, DynLattice, DynLevel, RhythmLevel, RhythmicLattice,
    };

    // Containers and operators
    pub use morpho_ops::{dilation, erosion, Image, MorphError, StructuringElement};

    // Musical containers
    pub use morpho_music::{ChordActivations, ChordKernel, ChromaRoll, MusicError};
}
