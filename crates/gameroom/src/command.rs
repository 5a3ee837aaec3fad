use super::*;
use hnb_gameplay::*;
use tokio::sync::oneshot;

/// Mailbox entries a room consumes one at a time.
#[derive(Debug)]
pub enum Command {
    /// Attach (or reattach) a player's connection.
    Attach {
        player: PlayerID,
        link: Link,
        reply: oneshot::Sender<Result<(), Refusal>>,
    },
    /// Apply an action validated against an earlier snapshot.
    Act(Action),
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Command::Attach { player, .. } => write!(f, "attach {}", player),
            Command::Act(action) => write!(f, "{}", action),
        }
    }
}
