//! Core types and traits for the Morpho generalized-morphology workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the coordinate and offset types shared by every space and group
//! backend, the [`Lattice`] trait family describing ordered value
//! domains, and the lattice error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod lattice;

pub use coord::{AxisIndices, Coord, Offset};
pub use error::LatticeError;
pub use lattice::{Lattice, LatticeProduct, LatticeQuotient};
