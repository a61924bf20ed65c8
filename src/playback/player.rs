use std::path::Path;
use std::time::Duration;

/// Contract for the external audio rendering primitive.
///
/// The playback controller issues commands through this trait and treats the
/// player's own paused/playing status as the source of truth: the
/// controller's `is_playing` flag is re-synced from [`Player::is_paused`] on
/// every time-update event, which covers state changes that happen out of
/// band (media keys, the rendering layer pausing on its own).
///
/// Implementations are expected to emit three callbacks into the controller:
/// `on_metadata_loaded` once a source's duration is known, `on_time_update`
/// periodically while rendering, and `on_track_ended` at end of media.
pub trait Player {
    /// Point the player at new playable content. A freshly set source is
    /// not rendering until [`Player::play`] is issued.
    fn set_source(&mut self, source: &Path);

    /// Drop the current source entirely, stopping any rendering.
    fn clear_source(&mut self);

    fn play(&mut self);

    fn pause(&mut self);

    fn seek(&mut self, position: Duration);

    /// `volume` is pre-clamped to `0.0..=1.0` by the controller.
    fn set_volume(&mut self, volume: f32);

    fn current_time(&self) -> Duration;

    /// Duration of the current source, once its metadata has loaded.
    fn duration(&self) -> Option<Duration>;

    fn is_paused(&self) -> bool;
}
