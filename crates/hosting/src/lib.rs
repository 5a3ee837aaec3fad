//! TCP hosting for hanabi sessions.
//!
//! Every accepted stream gets its own [`Connection`] task that frames
//! newline-delimited JSON requests, validates them, and either binds to a
//! session through the [`Registry`] or forwards them into the bound session's
//! mailbox. Responses go back as newline-terminated JSON.
//!
//! ## Wire
//!
//! - [`Framer`] — Newline framing with a bounded carry-over buffer and an idle deadline
//! - [`Response`] / [`Protocol`] — Outbound state or `{err, message?}` objects
//!
//! ## Sessions
//!
//! - [`Registry`] — Directory of live sessions, keyed by game id
//! - [`Connection`] — Per-connection control loop
//! - [`Server`] / [`Acceptor`] — Accept loop
//!
//! ## Errors
//!
//! - [`Error`] — Everything that can go wrong on a connection, with its status class
mod config;
mod connection;
mod error;
mod framer;
mod protocol;
mod registry;
mod server;

pub use config::*;
pub use connection::*;
pub use error::*;
pub use framer::*;
pub use protocol::*;
pub use registry::*;
pub use server::*;
