//! Hanabi rules engine.
//!
//! Everything here is pure: no I/O, no tasks, no clocks. The session actor in
//! `hnb-gameroom` owns a [`Game`] and feeds it actions that have passed the
//! [`Validator`].
//!
//! ## Wire and Domain Actions
//!
//! - [`Request`] — An action exactly as decoded from the wire, every field optional
//! - [`Action`] — A validated action carrying only the fields its variant needs
//! - [`Validator`] — Checks a request against the current state and cleans it
//! - [`Rejection`] — Why a request was refused
//!
//! ## State
//!
//! - [`GameState`] — The canonical state of one session
//! - [`Player`] / [`Hand`] — Seat identity and stable card slots
//! - [`Clue`] — A colour or value hint
//!
//! ## Rules
//!
//! - [`Game`] — Applies actions: dealing, clues, plays, discards, turn rotation, end detection
//! - [`GameState::project`] — Redacted per-player view
mod action;
mod clue;
mod game;
mod hand;
mod player;
mod rejection;
mod request;
mod state;
mod validator;
mod view;

pub use action::*;
pub use clue::*;
pub use game::*;
pub use hand::*;
pub use player::*;
pub use rejection::*;
pub use request::*;
pub use state::*;
pub use validator::*;

/// Session identifier.
pub type GameID = hnb_core::ID<Game>;
/// Player identifier, opaque and chosen by the client or assigned by the server.
pub type PlayerID = hnb_core::ID<Player>;
