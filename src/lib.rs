//! Session server for cooperative hanabi.
//!
//! This facade crate re-exports every hnb crate for convenient access.
//!
//! ## Crate Organization
//!
//! - [`core`] — Identifiers, constants, and runtime utilities
//! - [`cards`] — Colours, values, cards, and the deck
//! - [`gameplay`] — Rules engine, validator, and per-player views
//! - [`gameroom`] — Game session actors
//! - [`hosting`] — Framing, session registry, and connection handling
pub use hnb_core        as core;
pub use hnb_cards       as cards;
pub use hnb_gameplay    as gameplay;
pub use hnb_gameroom    as gameroom;
pub use hnb_hosting     as hosting;

#[cfg(feature = "server")]
mod args;
#[cfg(feature = "server")]
pub use args::*;

// Re-export commonly used types at the root
pub use hnb_core::*;
