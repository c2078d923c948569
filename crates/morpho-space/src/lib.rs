//! Coordinate spaces and offset groups for the Morpho workspace.
//!
//! This crate defines the [`Space`] trait — the finite coordinate
//! domain a morphological image lives on — and the [`Group`] trait
//! describing the offsets a structuring element carries. Concrete
//! backends cover the bounded line, the cyclic circle, their offset
//! groups, and N-ary Cartesian products of either.
//!
//! # Backends
//!
//! - [`Line`]: bounded 1-axis space; coordinates beyond the extent are
//!   out of bounds.
//! - [`Circle`]: cyclic 1-axis space; coordinates reduce modulo the
//!   length and are never out of bounds.
//! - [`Translations`] / [`CyclicShifts`]: the matching offset groups.
//! - [`ProductSpace`] / [`ProductGroup`]: component-wise compositions
//!   with the rightmost component varying fastest.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod circle;
pub mod cyclic;
pub mod error;
pub mod group;
pub mod line;
pub mod product;
pub mod space;
pub mod translations;

#[cfg(test)]
pub(crate) mod compliance;

pub use circle::Circle;
pub use cyclic::CyclicShifts;
pub use error::SpaceError;
pub use group::Group;
pub use line::Line;
pub use product::{ProductGroup, ProductSpace};
pub use space::Space;
pub use translations::Translations;
