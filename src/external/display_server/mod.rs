//! Access to the display server's screen saver extension
mod interface;
/// In-memory backend for tests
pub mod mock;
/// Backend talking to an X11 server through x11rb
pub mod x11;

pub use interface::*;
