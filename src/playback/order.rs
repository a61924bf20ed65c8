use rand::Rng;
use serde::Deserialize;

/// Repeat mode, governing auto-advance when a track finishes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepeatMode {
    /// Playback stops after the last track.
    #[default]
    #[serde(alias = "no-repeat", alias = "off")]
    None,
    /// Wrap around to the first track after the last.
    #[serde(alias = "repeat-all", alias = "repeat_all")]
    All,
    /// Replay the current track when it ends.
    #[serde(alias = "repeat-one", alias = "repeat_one")]
    One,
}

impl RepeatMode {
    /// Cycle `None -> All -> One -> None`.
    pub fn cycled(self) -> Self {
        match self {
            Self::None => Self::All,
            Self::All => Self::One,
            Self::One => Self::None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Outcome of asking for a next/previous index.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Advance {
    To(usize),
    /// No further target; the caller leaves its state unchanged.
    Stop,
}

/// Compute the index a next/previous step lands on.
///
/// Sequential rules are asymmetric on purpose, matching observed behavior:
/// `Next` from the last index wraps only under [`RepeatMode::All`] and
/// otherwise stops, while `Previous` from index 0 always wraps to the end.
/// Shuffled navigation draws a uniform random index independent of the
/// current one, so it may land on the same track again. [`RepeatMode::One`]
/// never affects explicit navigation, only the track-end path.
pub fn advance(
    len: usize,
    current: usize,
    repeat: RepeatMode,
    shuffled: bool,
    direction: Direction,
    rng: &mut impl Rng,
) -> Advance {
    if len == 0 {
        return Advance::Stop;
    }

    if shuffled {
        return Advance::To(rng.random_range(0..len));
    }

    match direction {
        Direction::Next => {
            if current + 1 < len {
                Advance::To(current + 1)
            } else if repeat == RepeatMode::All {
                Advance::To(0)
            } else {
                Advance::Stop
            }
        }
        Direction::Previous => Advance::To(if current == 0 { len - 1 } else { current - 1 }),
    }
}
