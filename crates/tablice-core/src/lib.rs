//! Core contracts for Tablice.
//!
//! This crate holds the static catalog of Polish registration prefixes
//! (voivodeships, counties and special designations), the region filters
//! used to narrow it, and the validation that keeps the catalog consistent
//! with the national plate grammar.

mod data;
pub mod error;
pub mod filter;
pub mod registry;
pub mod types;
pub mod validation;

pub use error::{Error, Result};
pub use filter::{NameFilter, PlateFilter};
pub use registry::{CandidatePool, RegionRegistry};
pub use types::{Prefix, Region, SuffixLength, Voivodeship};
pub use validation::validate_registry;

/// Letter never used in a registration prefix.
pub const RESERVED_PREFIX_LETTER: char = 'Q';
