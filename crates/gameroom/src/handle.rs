use super::*;
use hnb_gameplay::*;
use tokio::sync::mpsc;
use tokio::sync::oneshot;
use tokio::sync::watch;

/// Cloneable handle to a running [`Room`].
///
/// Commands go in through a bounded mailbox; the room publishes its canonical
/// state back through a watch channel after every change, so connections can
/// validate against a recent snapshot without touching the room itself.
#[derive(Debug, Clone)]
pub struct RoomHandle {
    id: GameID,
    mailbox: mpsc::Sender<Command>,
    state: watch::Receiver<GameState>,
}

impl RoomHandle {
    pub(crate) fn new(
        id: GameID,
        mailbox: mpsc::Sender<Command>,
        state: watch::Receiver<GameState>,
    ) -> Self {
        Self { id, mailbox, state }
    }
    pub fn id(&self) -> &GameID {
        &self.id
    }
    /// Asks the room to attach a player's connection and waits for its answer.
    pub async fn attach(&self, player: PlayerID, link: Link) -> Result<(), Refusal> {
        let (reply, answer) = oneshot::channel();
        self.mailbox
            .send(Command::Attach {
                player,
                link,
                reply,
            })
            .await
            .map_err(|_| Refusal::Gone)?;
        answer.await.map_err(|_| Refusal::Gone)?
    }
    /// Queues an action for the room. Waits while the mailbox is full.
    pub async fn send(&self, action: Action) -> Result<(), Refusal> {
        self.mailbox
            .send(Command::Act(action))
            .await
            .map_err(|_| Refusal::Gone)
    }
    /// The most recently published canonical state.
    pub fn snapshot(&self) -> GameState {
        self.state.borrow().clone()
    }
    /// True once the room has stopped consuming its mailbox.
    pub fn is_closed(&self) -> bool {
        self.mailbox.is_closed()
    }
}
