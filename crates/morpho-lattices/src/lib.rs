//! Concrete value lattices for the Morpho workspace.
//!
//! Two statically-typed lattices — [`BooleanLattice`] for flat
//! (set-like) morphology and [`RhythmicLattice`] for three-valued
//! onset strength — plus [`DynLattice`], a runtime-paired sum of the
//! two for callers that choose their value domain at runtime.
//!
//! The cross-lattice pairings mirror how the two domains interact in
//! practice: a boolean gates a rhythmic value on the dilation side,
//! and comparing two rhythmic values booleanizes on the erosion side.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boolean;
pub mod dynamic;
pub mod rhythmic;

#[cfg(test)]
pub(crate) mod laws;

pub use boolean::BooleanLattice;
pub use dynamic::{DynLattice, DynLevel};
pub use rhythmic::{RhythmLevel, RhythmicLattice};
