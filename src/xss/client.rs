use super::{Error, Info};
use crate::external::display_server::{
    x11::{X11Session, X11SessionFactory},
    ExtensionVersion, Session, SessionFactory,
};
use log::{debug, info};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A persistent, thread-safe connection to the screen saver extension.
///
/// A `Client` can only be obtained from [Client::new], [Client::with_display]
/// or [Client::open], so every instance holds an established session.
/// The session is released when the client is dropped, or earlier
/// through [Client::close].
///
/// # Examples
///
/// ```no_run
/// # fn main() -> Result<(), xss_query::xss::Error> {
/// let client = xss_query::xss::Client::new()?;
/// let info = client.query()?;
/// println!("Enabled: {}", info.enabled);
/// println!("IdleTime: {:?}", info.idle_time);
/// # Ok(())
/// # }
/// ```
pub struct Client<S: Session = X11Session> {
    session: Mutex<Option<S>>,
}

impl Client<X11Session> {
    /// Connect to the X11 display named by `$DISPLAY`
    pub fn new() -> Result<Self, Error> {
        Self::open(&X11SessionFactory::default())
    }

    /// Connect to the named X11 display
    pub fn with_display(display_name: &str) -> Result<Self, Error> {
        Self::open(&X11SessionFactory::new(Some(display_name)))
    }
}

impl<S: Session> Client<S> {
    /// Establish a session using `factory`.
    ///
    /// The extension is only checked after a connection was opened, so a
    /// missing display server is reported as [Error::Connection] and a
    /// missing extension as [Error::CapabilityUnavailable]. A connection
    /// which breaks during the extension check is an [Error::Connection].
    pub fn open<F>(factory: &F) -> Result<Self, Error>
    where
        F: SessionFactory<Session = S>,
    {
        let connection = factory.open_connection().map_err(Error::Connection)?;
        let version = factory.negotiate_extension(&connection)?;
        debug!(
            "Screensaver extension {}.{} available",
            version.major, version.minor
        );
        Ok(Client {
            session: Mutex::new(Some(factory.create_session(connection, version))),
        })
    }

    /// Query the screen saver's current status.
    ///
    /// Concurrent calls are serialized, each one performs exactly one
    /// round-trip and decodes its own reply. Failures aren't retried.
    pub fn query(&self) -> Result<Info, Error> {
        let mut session = self.lock();
        let session = session.as_mut().ok_or(Error::Closed)?;
        let raw = session.query_info().map_err(Error::Query)?;
        Info::try_from(raw)
    }

    /// The extension version negotiated when the client was opened,
    /// or `None` once it's closed
    pub fn extension_version(&self) -> Option<ExtensionVersion> {
        self.lock().as_ref().map(S::extension_version)
    }

    /// Release the session, waiting for a query in progress to finish.
    ///
    /// Closing an already closed client does nothing. Subsequent queries
    /// fail with [Error::Closed].
    pub fn close(&self) {
        let session = self.lock().take();
        match session {
            Some(session) => {
                drop(session);
                info!("Screensaver session closed");
            }
            None => debug!("Screensaver session already closed"),
        }
    }

    /// Whether the session was released with [Client::close]
    pub fn is_closed(&self) -> bool {
        self.lock().is_none()
    }

    // The buffer is overwritten by every round-trip, so a panic while the
    // lock was held can't leave anything behind for the next query.
    fn lock(&self) -> MutexGuard<'_, Option<S>> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
