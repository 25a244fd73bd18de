#![warn(missing_docs)]

//! Queries the X11 screen saver extension for information about screen
//! saving and user input activity.

pub mod external;
pub mod xss;

pub use xss::{Client, Error, Info, Kind};
