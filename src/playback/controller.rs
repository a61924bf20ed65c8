use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::config::PlaybackSettings;
use crate::error::Result;
use crate::filter::Query;
use crate::library::{Catalog, Track, TrackId};
use crate::persist::PlaylistDocument;

use super::order::{self, Advance, Direction, RepeatMode};
use super::player::Player;

/// Coarse playback state, derived from the current index and playing flag.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlaybackState {
    /// No loadable track; the active view is empty.
    Empty,
    Paused,
    Playing,
}

/// The playback controller.
///
/// Owns the catalog, the active view (the id sequence navigation currently
/// runs over) and all playback flags, and issues commands to the external
/// player. User commands and player callbacks both enter here; each event
/// updates state and issues at most one player command.
///
/// All operations are harmless no-ops when the active view is empty or an
/// index is out of range; nothing here panics for reachable states.
pub struct Controller<P: Player> {
    catalog: Catalog,
    player: P,
    view: Vec<TrackId>,
    current: Option<usize>,
    playing: bool,
    shuffled: bool,
    repeat: RepeatMode,
    /// View order captured when shuffle was enabled, restored on disable.
    unshuffled: Option<Vec<TrackId>>,
    rng: SmallRng,
    dirty: bool,
}

impl<P: Player> Controller<P> {
    pub fn new(player: P) -> Self {
        Self::with_rng(player, SmallRng::from_os_rng())
    }

    /// Deterministic construction for tests: shuffle and random navigation
    /// draw from a seeded generator.
    pub fn with_seed(player: P, seed: u64) -> Self {
        Self::with_rng(player, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(player: P, rng: SmallRng) -> Self {
        Self {
            catalog: Catalog::new(),
            player,
            view: Vec::new(),
            current: None,
            playing: false,
            shuffled: false,
            repeat: RepeatMode::default(),
            unshuffled: None,
            rng,
            dirty: true,
        }
    }

    /// Apply configured playback defaults (repeat mode, volume, shuffle).
    pub fn apply_settings(&mut self, settings: &PlaybackSettings) {
        self.repeat = settings.repeat;
        self.player.set_volume(settings.volume.clamp(0.0, 1.0));
        if settings.shuffle && !self.shuffled {
            self.enable_shuffle();
        }
        self.dirty = true;
    }

    // ---- accessors -------------------------------------------------------

    pub fn state(&self) -> PlaybackState {
        match self.current {
            None => PlaybackState::Empty,
            Some(_) if self.playing => PlaybackState::Playing,
            Some(_) => PlaybackState::Paused,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    /// Direct access to the player, e.g. for reading progress.
    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    /// The active view: the id sequence currently subject to navigation.
    pub fn view(&self) -> &[TrackId] {
        &self.view
    }

    pub fn view_tracks(&self) -> impl Iterator<Item = &Track> {
        self.view.iter().filter_map(|id| self.catalog.get(*id))
    }

    /// Index of the current track within the active view, if any.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_track(&self) -> Option<&Track> {
        let id = *self.view.get(self.current?)?;
        self.catalog.get(id)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat
    }

    /// True when state changed since the last [`Controller::take_dirty`];
    /// lets a front-end redraw only when something happened.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    // ---- catalog mutation ------------------------------------------------

    /// Append a track to the catalog and the active view.
    ///
    /// The first track added to an empty view is loaded (paused) so the
    /// player has a source before the first play command.
    pub fn add_track(&mut self, track: Track) -> Result<()> {
        let id = track.id;
        self.catalog.add(track)?;
        self.view.push(id);
        if let Some(snapshot) = self.unshuffled.as_mut() {
            snapshot.push(id);
        }
        if self.view.len() == 1 {
            self.load_track(0);
        }
        self.dirty = true;
        Ok(())
    }

    /// Remove the track at `index` in the active view (and from the catalog).
    ///
    /// Removing the current track loads its successor paused: the clamped
    /// index keeps pointing at a valid track but playback of a different
    /// track never auto-resumes. Removing a track before the current one
    /// shifts the current index down so it stays on the same logical track.
    pub fn remove_track(&mut self, index: usize) {
        let Some(&id) = self.view.get(index) else {
            log::warn!("remove_track: index {index} out of range");
            return;
        };

        self.view.remove(index);
        if let Some(snapshot) = self.unshuffled.as_mut() {
            snapshot.retain(|&s| s != id);
        }

        // Pick a successor before the catalog entry disappears.
        match self.current {
            Some(cur) if index == cur => {
                if self.view.is_empty() {
                    self.current = None;
                    self.playing = false;
                    self.player.clear_source();
                } else {
                    self.load_track(cur.min(self.view.len() - 1));
                    self.playing = false;
                }
            }
            Some(cur) if index < cur => self.current = Some(cur - 1),
            _ => {}
        }

        self.catalog.remove(id);
        self.dirty = true;
    }

    /// Remove by id, wherever the track is. Falls back to a catalog-only
    /// removal when the id is not part of the active view.
    pub fn remove_by_id(&mut self, id: TrackId) {
        match self.view.iter().position(|&v| v == id) {
            Some(index) => self.remove_track(index),
            None => {
                if let Some(snapshot) = self.unshuffled.as_mut() {
                    snapshot.retain(|&s| s != id);
                }
                self.catalog.remove(id);
                self.dirty = true;
            }
        }
    }

    /// Empty the catalog and view and drop the player's source.
    pub fn clear_playlist(&mut self) {
        self.catalog.clear();
        self.view.clear();
        self.unshuffled = None;
        self.current = None;
        self.playing = false;
        self.player.clear_source();
        self.dirty = true;
    }

    // ---- navigation ------------------------------------------------------

    /// Make the track at `index` current and hand its content to the player.
    ///
    /// Does not start playback; continuation is the caller's choice. Silent
    /// no-op when the view is empty or `index` is out of range.
    pub fn load_track(&mut self, index: usize) {
        let Some(&id) = self.view.get(index) else {
            log::debug!("load_track: index {index} out of range, ignoring");
            return;
        };
        self.current = Some(index);
        if let Some(track) = self.catalog.get(id) {
            self.player.set_source(&track.path);
        }
        self.dirty = true;
    }

    /// Issue play or pause based on the current reflected state, then
    /// re-sync the flag from the player.
    pub fn toggle_play_pause(&mut self) {
        if self.view.is_empty() {
            log::warn!("play/pause requested on an empty playlist");
            return;
        }
        if self.current.is_none() {
            self.load_track(0);
        }
        if self.playing {
            self.player.pause();
        } else {
            self.player.play();
        }
        self.sync_from_player();
    }

    pub fn next(&mut self) {
        self.step(Direction::Next);
    }

    pub fn previous(&mut self) {
        self.step(Direction::Previous);
    }

    fn step(&mut self, direction: Direction) {
        if self.view.is_empty() {
            log::warn!("{direction:?} requested on an empty playlist");
            return;
        }
        let current = self.current.unwrap_or(0);

        match order::advance(
            self.view.len(),
            current,
            self.repeat,
            self.shuffled,
            direction,
            &mut self.rng,
        ) {
            Advance::To(target) => {
                let was_playing = self.playing;
                self.load_track(target);
                if was_playing {
                    self.player.play();
                }
            }
            Advance::Stop => {
                log::debug!("{direction:?}: end of playlist, staying put");
            }
        }
    }

    // ---- mode toggles ----------------------------------------------------

    /// Flip shuffle. Enabling permutes the active view (Fisher–Yates) and
    /// relocates the current index to the permuted position of the same
    /// track; disabling restores the pre-shuffle order, falling back to
    /// index 0 when the anchored track has been removed meanwhile.
    pub fn toggle_shuffle(&mut self) {
        if self.shuffled {
            self.disable_shuffle();
        } else {
            self.enable_shuffle();
        }
    }

    fn enable_shuffle(&mut self) {
        self.shuffled = true;
        self.dirty = true;

        let anchor = self.current.map(|i| self.view[i]);
        self.unshuffled = Some(self.view.clone());
        self.view.shuffle(&mut self.rng);
        if let Some(id) = anchor {
            // Shuffling does not mutate the catalog, so the id is still here.
            self.current = self.view.iter().position(|&v| v == id);
        }
    }

    fn disable_shuffle(&mut self) {
        self.shuffled = false;
        self.dirty = true;

        let anchor = self.current.map(|i| self.view[i]);
        if let Some(snapshot) = self.unshuffled.take() {
            self.view = snapshot;
        }
        self.current = match anchor.and_then(|id| self.view.iter().position(|&v| v == id)) {
            Some(pos) => Some(pos),
            None if self.view.is_empty() => None,
            None => Some(0),
        };
    }

    /// Cycle repeat mode `None -> All -> One -> None`.
    pub fn toggle_repeat(&mut self) {
        self.repeat = self.repeat.cycled();
        self.dirty = true;
    }

    // ---- views -----------------------------------------------------------

    /// Replace the active view, e.g. with a filter result.
    ///
    /// Resets the current index to 0 and loads that track paused; a view
    /// change interrupts playback continuity rather than chasing the
    /// previously current track across views. Ids unknown to the catalog are
    /// dropped, so the view is always a subset of it.
    pub fn set_active_view(&mut self, view: Vec<TrackId>) {
        self.view = view
            .into_iter()
            .filter(|id| self.catalog.contains(*id))
            .collect();
        // The old order snapshot described the replaced view.
        self.unshuffled = None;

        if self.view.is_empty() {
            self.current = None;
            self.playing = false;
            self.player.clear_source();
        } else {
            self.load_track(0);
            self.playing = false;
        }
        self.dirty = true;
    }

    /// Apply a search/filter query over the full catalog and make the
    /// result the active view.
    pub fn apply_filter(&mut self, query: &Query) {
        let view = query.apply(&self.catalog);
        self.set_active_view(view);
    }

    // ---- passthrough commands --------------------------------------------

    pub fn seek_to(&mut self, position: Duration) {
        if self.current.is_some() {
            self.player.seek(position);
        }
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.player.set_volume(volume.clamp(0.0, 1.0));
    }

    // ---- player events ---------------------------------------------------

    /// The player learned the current source's duration; backfill it.
    pub fn on_metadata_loaded(&mut self, duration: Duration) {
        let Some(track) = self.current_track() else {
            return;
        };
        let id = track.id;
        self.catalog.set_duration(id, duration);
        self.dirty = true;
    }

    /// Periodic progress callback; re-syncs the playing flag defensively.
    pub fn on_time_update(&mut self) {
        self.sync_from_player();
    }

    /// End-of-media callback. RepeatOne replays the same track; otherwise
    /// auto-advance behaves like `next()` until the last track under
    /// RepeatMode::None, where playback ends.
    pub fn on_track_ended(&mut self) {
        let Some(current) = self.current else {
            return;
        };

        if self.repeat == RepeatMode::One {
            self.player.seek(Duration::ZERO);
            self.player.play();
            self.sync_from_player();
        } else if self.repeat == RepeatMode::All || current + 1 < self.view.len() {
            self.next();
        } else {
            self.playing = false;
            self.dirty = true;
        }
    }

    fn sync_from_player(&mut self) {
        let playing = !self.player.is_paused();
        if playing != self.playing {
            self.playing = playing;
            self.dirty = true;
        }
    }

    // ---- persistence -----------------------------------------------------

    /// Snapshot the active view's metadata as a playlist document, or `None`
    /// for an empty view (saving nothing is a harmless no-op).
    pub fn export(&self, name: &str) -> Option<PlaylistDocument> {
        if self.view.is_empty() {
            log::warn!("save requested for an empty playlist");
            return None;
        }
        Some(PlaylistDocument::from_tracks(name, self.view_tracks()))
    }
}
