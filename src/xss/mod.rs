//! Querying the screen saver's status through a [Client]

mod client;
mod error;
mod info;

pub use client::Client;
pub use error::Error;
pub use info::{Info, Kind};

#[cfg(test)]
mod test;
