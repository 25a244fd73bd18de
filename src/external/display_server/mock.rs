use super::interface::{ExtensionVersion, NegotiationError, RawInfo, Session, SessionFactory};
use anyhow::{anyhow, Result};
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc,
};

type ReplyFn = dyn Fn(usize) -> RawInfo + Send + Sync;

/// Counts the calls made into the mock backend, shared by the factory and its sessions
#[derive(Debug, Default)]
pub struct Calls {
    /// Connection attempts
    pub connections: AtomicUsize,
    /// Extension negotiation attempts
    pub negotiations: AtomicUsize,
    /// Status query round-trips, failed ones included
    pub round_trips: AtomicUsize,
    /// Sessions released
    pub sessions_dropped: AtomicUsize,
}

/// A mock [SessionFactory], usable for testing.
///
/// Replies are produced by a function of the round-trip's index, so tests
/// can tell which round-trip a decoded result came from.
#[derive(Clone)]
pub struct MockSessionFactory {
    fail_connection: bool,
    fail_extension: bool,
    fail_negotiation_connection: bool,
    fail_queries: Arc<AtomicBool>,
    replies: Arc<ReplyFn>,
    calls: Arc<Calls>,
}

impl MockSessionFactory {
    /// Create a factory whose sessions always reply with `reply`
    pub fn new(reply: RawInfo) -> MockSessionFactory {
        Self::with_replies(move |_| reply)
    }

    /// Create a factory whose sessions reply with `replies(index)` on
    /// the round-trip numbered `index`, counted from zero across all sessions
    pub fn with_replies<F>(replies: F) -> MockSessionFactory
    where
        F: Fn(usize) -> RawInfo + Send + Sync + 'static,
    {
        MockSessionFactory {
            fail_connection: false,
            fail_extension: false,
            fail_negotiation_connection: false,
            fail_queries: Arc::new(AtomicBool::new(false)),
            replies: Arc::new(replies),
            calls: Arc::new(Calls::default()),
        }
    }

    /// Make opening a connection fail
    pub fn failing_connection(mut self) -> Self {
        self.fail_connection = true;
        self
    }

    /// Make the extension look absent
    pub fn failing_extension(mut self) -> Self {
        self.fail_extension = true;
        self
    }

    /// Make the connection break while the extension is negotiated
    pub fn failing_negotiation_connection(mut self) -> Self {
        self.fail_negotiation_connection = true;
        self
    }

    /// Set whether round-trips of already created sessions should fail
    pub fn set_query_failure(&self, fail: bool) {
        self.fail_queries.store(fail, Ordering::SeqCst);
    }

    /// Counters shared with every session this factory creates
    pub fn calls(&self) -> Arc<Calls> {
        self.calls.clone()
    }
}

impl SessionFactory for MockSessionFactory {
    type Connection = ();
    type Session = MockSession;

    fn open_connection(&self) -> Result<()> {
        self.calls.connections.fetch_add(1, Ordering::SeqCst);
        if self.fail_connection {
            Err(anyhow!("Mock display unreachable"))
        } else {
            Ok(())
        }
    }

    fn negotiate_extension(&self, _: &()) -> Result<ExtensionVersion, NegotiationError> {
        self.calls.negotiations.fetch_add(1, Ordering::SeqCst);
        if self.fail_negotiation_connection {
            Err(NegotiationError::Connection(anyhow!(
                "Mock connection reset during negotiation"
            )))
        } else if self.fail_extension {
            Err(NegotiationError::Unavailable(anyhow!(
                "screensaver X11 extension unsupported"
            )))
        } else {
            Ok(ExtensionVersion { major: 1, minor: 1 })
        }
    }

    fn create_session(&self, _: (), version: ExtensionVersion) -> MockSession {
        MockSession {
            version,
            buffer: RawInfo::default(),
            fail_queries: self.fail_queries.clone(),
            replies: self.replies.clone(),
            calls: self.calls.clone(),
        }
    }
}

/// A [Session] created by [MockSessionFactory]
pub struct MockSession {
    version: ExtensionVersion,
    buffer: RawInfo,
    fail_queries: Arc<AtomicBool>,
    replies: Arc<ReplyFn>,
    calls: Arc<Calls>,
}

impl Session for MockSession {
    fn query_info(&mut self) -> Result<&RawInfo> {
        let index = self.calls.round_trips.fetch_add(1, Ordering::SeqCst);
        if self.fail_queries.load(Ordering::SeqCst) {
            return Err(anyhow!("Mock round-trip failure"));
        }
        self.buffer = (self.replies)(index);
        Ok(&self.buffer)
    }

    fn extension_version(&self) -> ExtensionVersion {
        self.version
    }
}

impl Drop for MockSession {
    fn drop(&mut self) {
        self.calls.sessions_dropped.fetch_add(1, Ordering::SeqCst);
    }
}
