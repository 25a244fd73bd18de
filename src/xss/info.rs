use super::Error;
use crate::external::display_server::{kind, state, RawInfo};
use std::{fmt, time::Duration};

/// Specifies one of three screen-saving strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// The video output will be placed into a low-power mode when the
    /// screen saver activates.
    Blanked,
    /// The display server will display an image when the screen saver activates.
    Internal,
    /// An X client will display an image when the screen saver activates.
    External,
    /// A strategy this crate doesn't know about, carrying the raw code
    Unknown(u8),
}

impl From<u8> for Kind {
    fn from(code: u8) -> Self {
        match code {
            kind::BLANKED => Kind::Blanked,
            kind::INTERNAL => Kind::Internal,
            kind::EXTERNAL => Kind::External,
            other => Kind::Unknown(other),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Blanked => "blanked",
            Kind::Internal => "internal",
            Kind::External => "external",
            Kind::Unknown(_) => "unknown",
        })
    }
}

/// A snapshot of the screen saver's status and timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Info {
    /// Whether the screen saver is enabled (or disabled).
    pub enabled: bool,
    /// Whether the screen saver is active (or inactive). Never true when
    /// the screen saver is disabled.
    pub active: bool,
    /// Which screen-saving strategy will be used when the screen saver
    /// activates.
    pub kind: Kind,
    /// Time until the screen saver activates. Zero unless the screen saver
    /// is enabled and inactive.
    pub countdown: Duration,
    /// Time that the screen saver has been active. Zero unless it's active.
    pub active_time: Duration,
    /// Time since the last user input event.
    pub idle_time: Duration,
}

impl TryFrom<&RawInfo> for Info {
    type Error = Error;

    fn try_from(raw: &RawInfo) -> Result<Self, Self::Error> {
        let til_or_since = Duration::from_millis(u64::from(raw.til_or_since));
        let (enabled, active, countdown, active_time) = match raw.state {
            state::ON => (true, true, Duration::ZERO, til_or_since),
            state::OFF => (true, false, til_or_since, Duration::ZERO),
            state::DISABLED => (false, false, Duration::ZERO, Duration::ZERO),
            other => return Err(Error::Decode(other)),
        };
        Ok(Info {
            enabled,
            active,
            kind: Kind::from(raw.kind),
            countdown,
            active_time,
            idle_time: Duration::from_millis(u64::from(raw.idle)),
        })
    }
}
