use std::collections::HashSet;
use std::time::Duration;

use crate::error::{Error, Result};

use super::model::{Track, TrackId};

/// Ordered collection of known tracks, unique by id.
///
/// Insertion order is preserved and doubles as the "original order" that
/// sequential playback and filter results are derived from. The catalog is
/// the only owner of track metadata; everything else holds `TrackId`s.
#[derive(Debug, Default)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a track. Rejects ids already present; the id scheme makes this
    /// unreachable for freshly ingested files, but the contract holds for
    /// arbitrary callers.
    pub fn add(&mut self, track: Track) -> Result<()> {
        if self.contains(track.id) {
            return Err(Error::DuplicateTrack(track.id));
        }
        self.tracks.push(track);
        Ok(())
    }

    /// Remove a track by id, returning it if it was present.
    pub fn remove(&mut self, id: TrackId) -> Option<Track> {
        let idx = self.tracks.iter().position(|t| t.id == id)?;
        Some(self.tracks.remove(idx))
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    /// The full ordered sequence, read-only.
    pub fn all(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn contains(&self, id: TrackId) -> bool {
        self.tracks.iter().any(|t| t.id == id)
    }

    pub fn get(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Position of `id` in the catalog's insertion order.
    pub fn index_of(&self, id: TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }

    /// Ids in insertion order; the default active view.
    pub fn ids(&self) -> Vec<TrackId> {
        self.tracks.iter().map(|t| t.id).collect()
    }

    /// Backfill a track's duration once metadata has loaded. Returns false
    /// when the id is unknown (e.g. the track was removed meanwhile).
    pub fn set_duration(&mut self, id: TrackId, duration: Duration) -> bool {
        match self.tracks.iter_mut().find(|t| t.id == id) {
            Some(track) => {
                track.duration = Some(duration);
                true
            }
            None => false,
        }
    }

    /// Distinct genre values, in first-occurrence order.
    pub fn distinct_genres(&self) -> Vec<&str> {
        distinct(self.tracks.iter().map(|t| t.genre.as_str()))
    }

    /// Distinct artist values, in first-occurrence order.
    pub fn distinct_artists(&self) -> Vec<&str> {
        distinct(self.tracks.iter().map(|t| t.artist.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen: HashSet<&str> = HashSet::new();
    values.filter(|v| seen.insert(v)).collect()
}
