use hnb_gameplay::*;
use tokio::sync::mpsc::UnboundedSender;

/// Outbound traffic from a room to one connection.
#[derive(Clone, Debug)]
pub enum Event {
    /// A view of the session, already redacted for the receiving player.
    State(GameState),
    /// The room refused an action this connection sent.
    Reject(Rejection),
    /// The room is done with this connection: replaced by a reconnect or
    /// game over.
    Close,
}

/// Write half of a connection as the room sees it.
pub type Link = UnboundedSender<Event>;

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::State(state) => match state.played() {
                Some(action) => write!(f, "state after {}", action),
                None => write!(f, "state of {}", state.id()),
            },
            Event::Reject(rejection) => write!(f, "reject: {}", rejection),
            Event::Close => write!(f, "close"),
        }
    }
}
