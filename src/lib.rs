//! Playlist management and playback-control core for local audio files.
//!
//! `rondo` owns the playlist/playback state machine: which track is current,
//! whether playback is running, and how shuffle, repeat and search views
//! reorder or redirect navigation. Audio rendering itself is an external
//! collaborator behind the [`playback::Player`] trait; this crate never
//! decodes anything.
//!
//! The usual wiring is: ingest files into [`library::Track`] values, feed
//! them to a [`playback::Controller`], and forward user commands plus the
//! player's metadata/time/ended callbacks to the controller's methods.

pub mod config;
pub mod error;
pub mod filter;
pub mod library;
pub mod persist;
pub mod playback;

pub use error::{Error, Result};
