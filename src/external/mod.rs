//! Provides abstractions over the display server
pub mod display_server;
