//! Generation backends.
//!
//! The crate does not talk to a language model itself. The [`Generator`]
//! trait is the seam where a model client plugs in; [`CannedGenerator`]
//! answers offline.

mod canned;
mod generator;

// Public exports
pub use canned::{CannedGenerator, GenerationConfig};
pub use generator::{Generation, Generator};
