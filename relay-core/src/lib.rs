//! Relay Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Typen, Dekodierung, den Command-Relay und Traits.

#![no_std]

pub mod codec;
pub mod config;
pub mod relay;
pub mod session;
pub mod slot;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use codec::{LINE_ENDING, decode_bus_message, decode_stream_byte};
pub use relay::{CommandRelay, Link, Outcome};
pub use session::{Exchange, announce_ready, send_response, serve_bus_message, serve_stream_byte};
pub use slot::BusSlot;
pub use traits::{ByteLink, LinkError, OutputDriver, OutputError};
pub use types::{BusMessage, Command, Diagnostic, OutputState, Response};
