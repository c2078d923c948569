//! Musical containers over the cylindric pitch-class × time space.
//!
//! A [`ChromaRoll`] is a rhythmic image on `Circle(12) × Line(steps)`:
//! twelve pitch-class rows, each a sequence of onset strengths. A
//! [`ChordKernel`] is a rhythmic structuring element on
//! `CyclicShifts(12) × Translations(depth)`: a chord shape expressed
//! as pitch intervals with a duration profile. Eroding a roll by a
//! kernel yields [`ChordActivations`], a boolean map of the root
//! positions where the whole chord sounds; dilating the activations by
//! the same kernel stamps the chord back, which makes
//! [`ChromaRoll::open`] a chord-shaped denoiser.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod kernel;
pub mod roll;

pub use error::MusicError;
pub use kernel::{ChordKernel, MAJOR_TRIAD, MINOR_TRIAD};
pub use roll::{ChordActivations, ChromaRoll, PITCH_CLASSES};
