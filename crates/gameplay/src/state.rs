use super::*;
use hnb_cards::Card;
use hnb_core::*;

/// Canonical state of one session.
///
/// `players[0]` is always the player whose turn it is; turn order is encoded
/// by rotating the vector, never by a separate cursor. `deck` mirrors the
/// remaining deck length while cards remain and then counts down through
/// negative values, one per turn taken with nothing left to draw.
///
/// Serialized as the broadcast shape clients receive. Only [`Game`] mutates
/// it; everything else sees a clone or a [projection](GameState::project).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub(crate) id: GameID,
    pub(crate) players: Vec<Player>,
    pub(crate) clues: Tokens,
    pub(crate) lives: Tokens,
    pub(crate) discards: Vec<Card>,
    pub(crate) table: Vec<Card>,
    pub(crate) deck: Remaining,
    #[serde(rename = "playedAction", skip_serializing_if = "Option::is_none")]
    pub(crate) played: Option<Action>,
    pub(crate) started: bool,
    pub(crate) ended: bool,
}

impl GameState {
    /// Empty, unstarted state for a fresh session.
    pub fn new(id: GameID, deck: Remaining) -> Self {
        Self {
            id,
            players: Vec::with_capacity(MAX_PLAYERS),
            clues: 0,
            lives: 0,
            discards: Vec::new(),
            table: Vec::new(),
            deck,
            played: None,
            started: false,
            ended: false,
        }
    }
    pub fn id(&self) -> &GameID {
        &self.id
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn clues(&self) -> Tokens {
        self.clues
    }
    pub fn lives(&self) -> Tokens {
        self.lives
    }
    pub fn discards(&self) -> &[Card] {
        &self.discards
    }
    pub fn table(&self) -> &[Card] {
        &self.table
    }
    pub fn deck(&self) -> Remaining {
        self.deck
    }
    pub fn played(&self) -> Option<&Action> {
        self.played.as_ref()
    }
    pub fn started(&self) -> bool {
        self.started
    }
    pub fn ended(&self) -> bool {
        self.ended
    }
    /// Cards successfully played.
    pub fn score(&self) -> usize {
        self.table.len()
    }
}

impl GameState {
    /// The player whose turn it is.
    pub fn active(&self) -> Option<&Player> {
        self.players.first()
    }
    pub fn is_active(&self, id: &PlayerID) -> bool {
        self.active().is_some_and(|p| p.id() == id)
    }
    pub fn has_player(&self, id: &PlayerID) -> bool {
        self.players.iter().any(|p| p.id() == id)
    }
    pub fn player(&self, id: &PlayerID) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }
    pub fn is_full(&self) -> bool {
        self.players.len() >= MAX_PLAYERS
    }
    /// Moves the active player to the back of the table.
    pub fn rotate(&mut self) {
        if !self.players.is_empty() {
            self.players.rotate_left(1);
        }
    }
}
