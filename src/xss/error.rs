use crate::external::display_server::NegotiationError;
use thiserror::Error;

/// Errors returned when establishing or querying a [super::Client]
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// No connection to the display server could be opened
    #[error("couldn't open display connection: {0:#}")]
    Connection(anyhow::Error),

    /// The display server is reachable, but doesn't provide the screen saver extension
    #[error("screensaver extension unavailable: {0:#}")]
    CapabilityUnavailable(anyhow::Error),

    /// The status query round-trip failed, retrying may help
    #[error("screensaver query failed: {0:#}")]
    Query(anyhow::Error),

    /// The display server replied with a screen saver state this crate doesn't know
    #[error("unknown screensaver state code {0}")]
    Decode(u8),

    /// The client's session was already released with [super::Client::close]
    #[error("client already closed")]
    Closed,
}

impl From<NegotiationError> for Error {
    fn from(err: NegotiationError) -> Self {
        match err {
            NegotiationError::Connection(err) => Error::Connection(err),
            NegotiationError::Unavailable(err) => Error::CapabilityUnavailable(err),
        }
    }
}
