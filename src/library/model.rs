use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Opaque track identifier, unique within a catalog and stable for the
/// track's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(u64);

impl TrackId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A playlist entry: metadata plus a reference to playable content.
///
/// Immutable once created, except for the `duration` backfill that happens
/// when metadata loads.
#[derive(Debug, Clone)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    pub genre: String,
    /// Unknown until metadata has loaded (tag probe or player report).
    pub duration: Option<Duration>,
    /// Handle to the playable content. The playback core hands it to the
    /// player verbatim and never opens it itself.
    pub path: PathBuf,
}

impl Track {
    /// Create a track with the default "Unknown" artist and genre.
    pub fn new(id: TrackId, title: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: String::from("Unknown"),
            genre: String::from("Unknown"),
            duration: None,
            path: path.into(),
        }
    }
}
