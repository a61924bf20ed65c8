//! Track catalog and file ingestion.
//!
//! The catalog owns the ordered list of known tracks and their metadata.
//! Ingestion turns locally supplied files into `Track` values with generated
//! ids and filename-derived titles.

mod catalog;
mod ingest;
mod model;

pub use catalog::Catalog;
pub use ingest::Ingestor;
pub use model::{Track, TrackId};
