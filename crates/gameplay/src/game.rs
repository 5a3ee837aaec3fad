use super::*;
use hnb_cards::Card;
use hnb_cards::Deck;
use hnb_cards::Value;
use hnb_core::*;

/// Rules engine for one session.
///
/// Owns the canonical [`GameState`] together with the undealt [`Deck`]. The
/// only way in is [`Game::apply`], which assumes its action already passed the
/// [`Validator`] against this very state; the pile-extension rule for plays is
/// the one legality check made here, since it depends on the table rather
/// than on the shape of the request.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    deck: Deck,
    colors: usize,
}

impl Game {
    pub fn new(id: GameID, deck: Deck) -> Self {
        Self {
            state: GameState::new(id, deck.len() as Remaining),
            colors: deck.colors(),
            deck,
        }
    }
    pub fn state(&self) -> &GameState {
        &self.state
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Seats a player before the game starts. Returns false when the table
    /// is full, the game is underway, or the player is already seated.
    pub fn seat(&mut self, player: PlayerID) -> bool {
        match self.state.started || self.state.is_full() || self.state.has_player(&player) {
            true => false,
            false => {
                self.state.players.push(Player::new(player));
                true
            }
        }
    }

    /// Applies a validated action and returns it as it should be broadcast.
    /// Clues come back with the target's matching slots filled in.
    pub fn apply(&mut self, action: Action) -> Action {
        let action = match action {
            Action::Join { game, player } => {
                self.seat(player.clone());
                Action::Join { game, player }
            }
            Action::Start { player } => {
                self.deal();
                Action::Start { player }
            }
            Action::Clue {
                player,
                target,
                clue,
                ..
            } => {
                let cards = self.clue(&target, &clue);
                Action::Clue {
                    player,
                    target,
                    clue,
                    cards,
                }
            }
            Action::Play { player, slot } => {
                self.play(slot);
                Action::Play { player, slot }
            }
            Action::Discard { player, slot } => {
                self.discard(slot);
                Action::Discard { player, slot }
            }
            action @ (Action::Ping { .. } | Action::Create { .. }) => action,
        };
        if !self.deck.is_empty() {
            self.state.deck = self.deck.len() as Remaining;
        }
        if action.is_turn() {
            self.advance();
        }
        log::trace!("[game {}] {}", self.state.id, action);
        self.state.played = Some(action.clone());
        action
    }
}

impl Game {
    fn deal(&mut self) {
        let n = match self.state.players.len() > LARGE_TABLE {
            true => LARGE_TABLE_HAND,
            false => SMALL_TABLE_HAND,
        };
        for player in self.state.players.iter_mut() {
            *player.hand_mut() = Hand::from(self.deck.deal(n));
        }
        self.state.clues = MAX_CLUES;
        self.state.lives = MAX_LIVES;
        self.state.started = true;
        self.state.deck = self.deck.len() as Remaining;
    }

    fn clue(&mut self, target: &PlayerID, clue: &Clue) -> Vec<Slot> {
        self.state.clues = self.state.clues.saturating_sub(1);
        self.state
            .player(target)
            .map(|p| p.hand().matching(clue))
            .unwrap_or_default()
    }

    fn play(&mut self, slot: Slot) {
        if let Some(card) = self.take(slot) {
            match is_playable(&card, &self.state.table) {
                true => {
                    self.state.table.push(card);
                    if card.value() == Value::Five && self.state.clues < MAX_CLUES {
                        self.state.clues += 1;
                    }
                }
                false => {
                    self.state.discards.push(card);
                    self.state.lives = self.state.lives.saturating_sub(1);
                }
            }
        }
        if self.state.table.len() == self.colors * Value::all().len() || self.state.lives == 0 {
            self.state.ended = true;
        }
    }

    fn discard(&mut self, slot: Slot) {
        if let Some(card) = self.take(slot) {
            self.state.discards.push(card);
        }
        if self.state.clues < MAX_CLUES {
            self.state.clues += 1;
        }
    }

    /// Removes the active player's card from a slot and refills the slot from
    /// the deck, leaving it empty once the deck is exhausted.
    fn take(&mut self, slot: Slot) -> Option<Card> {
        let card = self.state.active()?.hand().get(slot)?;
        let draw = self.deck.draw();
        self.state
            .players
            .first_mut()
            .and_then(|p| p.hand_mut().replace(slot, draw));
        Some(card)
    }

    /// Counts turns taken on an empty deck, ends the game once everyone has
    /// had one, and passes the turn.
    fn advance(&mut self) {
        if self.deck.is_empty() {
            self.state.deck -= 1;
        }
        if -(self.state.deck as i64) == self.state.players.len() as i64 {
            self.state.ended = true;
        }
        self.state.rotate();
    }
}

/// A card extends its colour's pile if it is a one, or if its predecessor of
/// the same colour is already on the table. The exact card must not already
/// be there.
pub fn is_playable(card: &Card, table: &[Card]) -> bool {
    !table.contains(card)
        && (card.value() == Value::One
            || table
                .iter()
                .any(|c| c.color() == card.color() && c.value().next() == Some(card.value())))
}
