//! Game session actors.
//!
//! Each session runs as one [`Room`] task that exclusively owns its
//! [`Game`](hnb_gameplay::Game). Everything else talks to it through a
//! [`RoomHandle`].
//!
//! ## Inbound
//!
//! - [`Command`] — Mailbox entries: attach a connection, or apply an action
//! - [`RoomHandle`] — Bounded mailbox sender plus the latest published state
//!
//! ## Outbound
//!
//! - [`Event`] — Per-connection traffic: redacted state, rejection, close
//! - [`Table`] — Attached connections, one per player
//! - [`Refusal`] — Why an attach was refused
mod command;
mod event;
mod handle;
mod refusal;
mod room;
mod table;

pub use command::*;
pub use event::*;
pub use handle::*;
pub use refusal::*;
pub use room::*;
pub use table::*;
