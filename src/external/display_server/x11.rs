use super::interface::{ExtensionVersion, NegotiationError, RawInfo, Session, SessionFactory};
use anyhow::{anyhow, Context, Result};
use log::debug;
use x11rb::{
    connection::{Connection, RequestConnection},
    errors::{ConnectionError, ReplyError},
    protocol::{
        screensaver::{self, ConnectionExt as _},
        xproto::Window,
    },
    rust_connection::RustConnection,
};

/// Screen saver extension version requested during negotiation
const CLIENT_MAJOR_VERSION: u8 = 1;
const CLIENT_MINOR_VERSION: u8 = 1;

/// Creates [X11Session]s on the display given by `display_name`,
/// or the one in `$DISPLAY` when no name is given.
#[derive(Debug, Clone, Default)]
pub struct X11SessionFactory {
    display_name: Option<String>,
}

impl X11SessionFactory {
    /// Create a factory for the named display, `None` meaning `$DISPLAY`
    pub fn new(display_name: Option<&str>) -> X11SessionFactory {
        X11SessionFactory {
            display_name: display_name.map(str::to_owned),
        }
    }
}

impl SessionFactory for X11SessionFactory {
    type Connection = (RustConnection, usize);
    type Session = X11Session;

    fn open_connection(&self) -> Result<Self::Connection> {
        debug!("Connecting to X11 display {:?}", self.display_name);
        RustConnection::connect(self.display_name.as_deref())
            .context("Couldn't connect to X11 display")
    }

    fn negotiate_extension(
        &self,
        connection: &Self::Connection,
    ) -> Result<ExtensionVersion, NegotiationError> {
        let (connection, _) = connection;
        let extension = connection
            .extension_information(screensaver::X11_EXTENSION_NAME)
            .map_err(connection_lost)?;
        if extension.is_none() {
            return Err(NegotiationError::Unavailable(anyhow!(
                "screensaver X11 extension unsupported"
            )));
        }
        let reply = connection
            .screensaver_query_version(CLIENT_MAJOR_VERSION, CLIENT_MINOR_VERSION)
            .map_err(connection_lost)?
            .reply()
            .map_err(|err| match err {
                ReplyError::ConnectionError(err) => connection_lost(err),
                err => NegotiationError::Unavailable(
                    anyhow::Error::new(err)
                        .context("Couldn't negotiate screensaver extension version"),
                ),
            })?;
        debug!(
            "Negotiated screensaver extension version {}.{}",
            reply.server_major_version, reply.server_minor_version
        );
        Ok(ExtensionVersion {
            major: reply.server_major_version,
            minor: reply.server_minor_version,
        })
    }

    fn create_session(
        &self,
        connection: Self::Connection,
        version: ExtensionVersion,
    ) -> Self::Session {
        let (connection, screen_num) = connection;
        let root = connection.setup().roots[screen_num].root;
        X11Session {
            connection,
            root,
            version,
            buffer: RawInfo::default(),
        }
    }
}

fn connection_lost(err: ConnectionError) -> NegotiationError {
    NegotiationError::Connection(anyhow::Error::new(err))
}

/// A connection to an X11 server which queries the screen saver state of
/// the default screen's root window.
pub struct X11Session {
    connection: RustConnection,
    root: Window,
    version: ExtensionVersion,
    buffer: RawInfo,
}

impl Session for X11Session {
    fn query_info(&mut self) -> Result<&RawInfo> {
        let reply = self
            .connection
            .screensaver_query_info(self.root)?
            .reply()
            .context("Couldn't query screensaver info")?;
        self.buffer = RawInfo {
            state: u8::from(reply.state),
            kind: u8::from(reply.kind),
            til_or_since: reply.ms_until_server,
            idle: reply.ms_since_user_input,
        };
        debug!("Received screensaver info {:?}", self.buffer);
        Ok(&self.buffer)
    }

    fn extension_version(&self) -> ExtensionVersion {
        self.version
    }
}

impl Drop for X11Session {
    fn drop(&mut self) {
        debug!("Closing X11 screensaver session");
    }
}
