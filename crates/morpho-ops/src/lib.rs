//! Images, structuring elements, and the generalized morphology
//! operators.
//!
//! An [`Image`] maps every coordinate of a
//! [`Space`](morpho_space::Space) to a lattice level; a
//! [`StructuringElement`] maps every offset of a
//! [`Group`](morpho_space::Group) to a level of a possibly different
//! lattice. [`dilation`] and [`erosion`] combine the two through the
//! lattice pairing traits and produce a new image over the same space.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dilation;
pub mod element;
pub mod erosion;
pub mod error;
pub mod image;

pub use dilation::dilation;
pub use element::StructuringElement;
pub use erosion::erosion;
pub use error::MorphError;
pub use image::Image;
