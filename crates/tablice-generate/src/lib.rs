//! Polish license plate generation for Tablice.
//!
//! [`PlateGenerator`] turns optional voivodeship and county filters into a
//! plate such as `WZ 4K7C1`, drawing all randomness from an injected
//! [`RandomSource`]. The [`generators`] module exposes the same logic as a
//! pluggable provider with JSON parameters.

pub mod checks;
pub mod errors;
pub mod generators;
pub mod params;
pub mod plate;
pub mod random;

pub use errors::GenerationError;
pub use generators::{Generator, GeneratorRegistry};
pub use plate::{Plate, PlateGenerator, SUFFIX_ALPHABET};
pub use random::{RandomSource, ScriptedSource};
