//! Configuration loader and schema types.
//!
//! Settings drive playback defaults, ingestion filtering and playlist
//! storage; they load from an optional TOML file plus environment overrides.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
