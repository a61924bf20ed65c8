//! Playback state machine: current track, play/pause, shuffle and repeat.
//!
//! The controller owns all playback state and drives an external player
//! through the [`Player`] trait; the order strategy is a pure function the
//! controller consults for next/previous transitions.

mod controller;
mod order;
mod player;

pub use controller::{Controller, PlaybackState};
pub use order::{Advance, Direction, RepeatMode, advance};
pub use player::Player;
