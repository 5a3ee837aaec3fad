use super::*;
use hnb_cards::Deck;
use hnb_gameplay::*;
use tokio::sync::mpsc;
use tokio::sync::watch;

/// Game session actor.
///
/// Sole owner of one session's [`Game`] and of the connections attached to
/// it. Consumes its mailbox strictly in order; every state change is
/// published to the [`RoomHandle`] snapshot and broadcast to all attached
/// connections before the next command is taken.
pub struct Room {
    id: GameID,
    game: Game,
    table: Table,
    inbox: mpsc::Receiver<Command>,
    state: watch::Sender<GameState>,
}

impl Room {
    pub fn new(id: GameID, deck: Deck, mailbox: usize) -> (Self, RoomHandle) {
        let game = Game::new(id.clone(), deck);
        let (tx, rx) = mpsc::channel(mailbox.max(1));
        let (state, snapshot) = watch::channel(game.state().clone());
        let handle = RoomHandle::new(id.clone(), tx, snapshot);
        let room = Self {
            id,
            game,
            table: Table::default(),
            inbox: rx,
            state,
        };
        (room, handle)
    }
    pub fn id(&self) -> &GameID {
        &self.id
    }
    pub fn state(&self) -> &GameState {
        self.game.state()
    }
    /// Seats the creator before the room starts running.
    pub fn seat(&mut self, player: PlayerID, link: Link) -> Result<(), Refusal> {
        self.admit(player, link)
    }
    /// Discards a room that never ran, closing whatever was attached to it.
    pub fn close(mut self) {
        log::debug!("[room {}] discarded", self.id);
        self.table.close_all();
    }
}

impl Room {
    /// Consumes the mailbox until the game ends or every handle is dropped.
    /// Returns the final canonical state.
    pub async fn run(mut self) -> GameState {
        log::debug!("[room {}] open", self.id);
        self.broadcast();
        while let Some(command) = self.inbox.recv().await {
            log::trace!("[room {}] {}", self.id, command);
            match command {
                Command::Attach {
                    player,
                    link,
                    reply,
                } => {
                    let result = self.admit(player, link);
                    let admitted = result.is_ok();
                    let _ = reply.send(result);
                    if admitted {
                        self.broadcast();
                    }
                }
                Command::Act(action) => self.act(action),
            }
            if self.game.state().ended() {
                break;
            }
        }
        self.inbox.close();
        self.table.close_all();
        log::info!(
            "[room {}] game over, score {}",
            self.id,
            self.game.state().score()
        );
        self.game.state().clone()
    }

    /// Attaches a connection and records the join.
    ///
    /// A player already known to the room swaps in the new link and the old
    /// one is closed. A newcomer needs a free seat and a game that has not
    /// started.
    fn admit(&mut self, player: PlayerID, link: Link) -> Result<(), Refusal> {
        self.table.prune();
        let known = self.table.contains(&player) || self.game.state().has_player(&player);
        if !known {
            if self.table.is_full() || self.game.state().is_full() {
                log::debug!("[room {}] refused {}: full", self.id, player);
                return Err(Refusal::Full);
            }
            if self.game.state().started() {
                log::debug!("[room {}] refused {}: started", self.id, player);
                return Err(Refusal::Started);
            }
        }
        log::info!("[room {}] {} attached", self.id, player);
        self.table.attach(player.clone(), link);
        self.game.apply(Action::Join {
            game: self.id.clone(),
            player,
        });
        self.publish();
        Ok(())
    }

    /// Applies an action if it still holds against the live state.
    fn act(&mut self, action: Action) {
        let player = action.player().clone();
        match Validator::validate(Request::from(&action), Some(self.game.state())) {
            Err(rejection) => {
                log::debug!("[room {}] stale {}: {}", self.id, action, rejection);
                self.table.unicast(&player, Event::Reject(rejection));
            }
            Ok(action) => {
                let played = self.game.apply(action);
                log::debug!("[room {}] {}", self.id, played);
                self.publish();
                match played.is_ping() {
                    true => self.reply(&player),
                    false => self.broadcast(),
                }
            }
        }
    }

    fn publish(&self) {
        self.state.send_replace(self.game.state().clone());
    }
    fn reply(&mut self, player: &PlayerID) {
        let (view, _) = self.game.state().project(player);
        self.table.unicast(player, Event::State(view));
    }
    fn broadcast(&mut self) {
        let state = self.game.state();
        self.table
            .broadcast(|viewer| Event::State(state.project(viewer).0));
    }
}
