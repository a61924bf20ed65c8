//! Crate error type.
//!
//! Catalog and controller operations are total over their reachable states;
//! only the catalog's duplicate-id contract and the persistence boundary can
//! fail.

use thiserror::Error;

use crate::library::TrackId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A track with this id is already in the catalog.
    #[error("duplicate track id: {0}")]
    DuplicateTrack(TrackId),

    /// Persisted input is not a valid playlist document.
    #[error("malformed playlist document: {0}")]
    MalformedPlaylist(#[source] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
