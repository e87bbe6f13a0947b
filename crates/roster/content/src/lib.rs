//! Data-driven content for the roster planner.
//!
//! This crate houses the static roster content and provides loaders for RON
//! data files:
//! - Built-in character roster (compiled in, the canonical table)
//! - Built-in equipment series table
//! - Character roster loader (data-driven via RON)
//! - Equipment series loader (data-driven via RON)
//!
//! Content is consumed by the planner facade and never mutated after load.
//!
//! All loaders use roster-core types directly with serde for RON
//! deserialization.

pub mod builtin;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use builtin::{builtin_catalog, builtin_records, builtin_series};

#[cfg(feature = "loaders")]
pub use loaders::{RosterLoader, SeriesLoader};
