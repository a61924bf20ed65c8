//! Playlist metadata persistence.
//!
//! A playlist serializes to a JSON document with a top-level name and a
//! track list carrying title/artist/genre/duration per track. Round-tripping
//! reproduces the ordered metadata; playable content is never stored and
//! must be re-supplied externally. Transport is reduced to an opaque
//! save/load byte store.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::library::Track;

/// Per-track metadata as persisted. No content handle, no id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub title: String,
    pub artist: String,
    pub genre: String,
    /// Seconds; absent when the track's metadata never loaded.
    pub duration: Option<f64>,
}

impl From<&Track> for TrackRecord {
    fn from(track: &Track) -> Self {
        Self {
            title: track.title.clone(),
            artist: track.artist.clone(),
            genre: track.genre.clone(),
            duration: track.duration.map(|d| d.as_secs_f64()),
        }
    }
}

/// The persisted playlist document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistDocument {
    pub name: String,
    pub tracks: Vec<TrackRecord>,
}

impl PlaylistDocument {
    pub fn from_tracks<'a>(name: &str, tracks: impl IntoIterator<Item = &'a Track>) -> Self {
        Self {
            name: name.to_string(),
            tracks: tracks.into_iter().map(TrackRecord::from).collect(),
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(Error::MalformedPlaylist)
    }

    /// Parse a persisted document. Failure is recoverable and leaves the
    /// caller's state untouched; this never constructs a partial document.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(Error::MalformedPlaylist)
    }
}

/// Opaque storage for serialized playlist documents.
pub trait PlaylistStore {
    fn save(&mut self, bytes: &[u8]) -> Result<()>;
    fn load(&self) -> Result<Vec<u8>>;
}

/// Filesystem-backed store writing to a fixed path.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PlaylistStore for FileStore {
    fn save(&mut self, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, bytes)?;
        Ok(())
    }

    fn load(&self) -> Result<Vec<u8>> {
        Ok(fs::read(&self.path)?)
    }
}

/// Serialize and hand a document to a store.
pub fn save_document(store: &mut impl PlaylistStore, doc: &PlaylistDocument) -> Result<()> {
    store.save(&doc.to_bytes()?)
}

/// Load and parse a document from a store.
pub fn load_document(store: &impl PlaylistStore) -> Result<PlaylistDocument> {
    PlaylistDocument::from_bytes(&store.load()?)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tempfile::tempdir;

    use super::*;
    use crate::library::{Track, TrackId};

    fn track(id: u64, title: &str, artist: &str, genre: &str, secs: Option<f64>) -> Track {
        let mut t = Track::new(TrackId::new(id), title, format!("/music/{id}.mp3"));
        t.artist = artist.to_string();
        t.genre = genre.to_string();
        t.duration = secs.map(Duration::from_secs_f64);
        t
    }

    #[test]
    fn round_trip_preserves_ordered_metadata() {
        let tracks = vec![
            track(0, "Moonlight Piano", "A", "Classical", Some(201.5)),
            track(1, "Drum Loop", "B", "Electronic", None),
        ];
        let doc = PlaylistDocument::from_tracks("My Playlist", &tracks);

        let bytes = doc.to_bytes().unwrap();
        let loaded = PlaylistDocument::from_bytes(&bytes).unwrap();

        assert_eq!(loaded.name, "My Playlist");
        assert_eq!(loaded.tracks.len(), 2);
        assert_eq!(loaded, doc);
        assert_eq!(loaded.tracks[0].title, "Moonlight Piano");
        assert_eq!(loaded.tracks[0].duration, Some(201.5));
        assert_eq!(loaded.tracks[1].artist, "B");
        assert_eq!(loaded.tracks[1].duration, None);
    }

    #[test]
    fn malformed_input_is_a_recoverable_error() {
        let err = PlaylistDocument::from_bytes(b"not json at all").unwrap_err();
        assert!(matches!(err, Error::MalformedPlaylist(_)));

        // Valid JSON, wrong shape.
        let err = PlaylistDocument::from_bytes(br#"{"tracks": 3}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedPlaylist(_)));
    }

    #[test]
    fn file_store_saves_and_loads() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("lists").join("playlist.json"));

        let doc = PlaylistDocument::from_tracks("mix", &[track(0, "a", "x", "y", None)]);
        save_document(&mut store, &doc).unwrap();

        let loaded = load_document(&store).unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn missing_file_reports_io_error() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nope.json"));
        assert!(matches!(load_document(&store), Err(Error::Io(_))));
    }
}
