use anyhow::Result;
use thiserror::Error;

/// Screen saver state codes, as sent on the wire by the MIT-SCREEN-SAVER extension
pub mod state {
    /// The screen saver is enabled, but not active
    pub const OFF: u8 = 0;
    /// The screen saver is active
    pub const ON: u8 = 1;
    /// Only ever sent in notify events, never in a QueryInfo reply
    pub const CYCLE: u8 = 2;
    /// The screen saver is turned off
    pub const DISABLED: u8 = 3;
}

/// Screen saver kind codes, as sent on the wire by the MIT-SCREEN-SAVER extension
pub mod kind {
    /// The video output is blanked
    pub const BLANKED: u8 = 0;
    /// The server draws the saver image
    pub const INTERNAL: u8 = 1;
    /// A client draws the saver image
    pub const EXTERNAL: u8 = 2;
}

/// The undecoded reply of a single screen saver status query.
///
/// Both time fields are in milliseconds. The meaning of `til_or_since`
/// depends on `state`: time until activation when the saver is off,
/// time since activation when it's on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawInfo {
    /// One of the [state] codes
    pub state: u8,
    /// One of the [kind] codes, or a code this crate doesn't know
    pub kind: u8,
    /// Time until or since activation
    pub til_or_since: u32,
    /// Time since the last user input
    pub idle: u32,
}

/// Version of the screen saver extension negotiated with the display server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionVersion {
    /// Major version reported by the server
    pub major: u16,
    /// Minor version reported by the server
    pub minor: u16,
}

/// Reasons why extension negotiation can fail
#[derive(Debug, Error)]
pub enum NegotiationError {
    /// The connection broke while negotiating, so the extension's presence is unknown
    #[error("connection failed during extension negotiation: {0:#}")]
    Connection(anyhow::Error),

    /// The server answered, but the extension is absent or refused negotiation
    #[error("{0:#}")]
    Unavailable(anyhow::Error),
}

/// Establishes [Session]s with a display server.
///
/// Establishing a session is split into steps, so that the caller can tell
/// an unreachable display server apart from one which lacks the extension.
/// None of the steps may change the screen saver's state.
pub trait SessionFactory {
    /// An open connection which hasn't been checked for extension support yet
    type Connection;
    /// The session created once the extension was negotiated
    type Session: Session;

    /// Open a connection to the display server
    fn open_connection(&self) -> Result<Self::Connection>;

    /// Check that the screen saver extension is present and negotiate its version
    fn negotiate_extension(
        &self,
        connection: &Self::Connection,
    ) -> Result<ExtensionVersion, NegotiationError>;

    /// Wrap a connection with a negotiated extension into a session
    fn create_session(&self, connection: Self::Connection, version: ExtensionVersion)
        -> Self::Session;
}

/// A live connection to a display server with the screen saver extension available.
///
/// Sessions aren't reentrant, every round-trip needs exclusive access.
pub trait Session: Send {
    /// Perform one status query round-trip.
    ///
    /// The reply is written into a buffer owned by the session, which is
    /// reused by all queries.
    fn query_info(&mut self) -> Result<&RawInfo>;

    /// The extension version negotiated when the session was established
    fn extension_version(&self) -> ExtensionVersion;
}
