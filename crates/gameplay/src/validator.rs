use super::*;
use hnb_core::*;

/// Checks wire requests against session state and cleans them into [`Action`]s.
///
/// Pure: the same request against the same state always yields the same
/// verdict. `state` is `None` while the caller is not attached to a session.
/// Fields a variant does not need are dropped by construction, since each
/// [`Action`] variant only carries what it uses.
pub struct Validator;

impl Validator {
    pub fn validate(request: Request, state: Option<&GameState>) -> Result<Action, Rejection> {
        let player = Self::acting(&request)?;
        match request.kind.as_str() {
            Action::PING => Ok(Action::Ping { player }),
            Action::CREATE => {
                Self::unattached(state)?;
                let game = request
                    .game
                    .filter(|g| !g.is_empty())
                    .map(GameID::from);
                Ok(Action::Create { game, player })
            }
            Action::JOIN => {
                Self::unattached(state)?;
                let game = request
                    .game
                    .filter(|g| !g.is_empty())
                    .map(GameID::from)
                    .ok_or_else(|| Rejection::invalid("join action must have game id"))?;
                Ok(Action::Join { game, player })
            }
            Action::START => {
                let state = Self::attached(state)?;
                if state.started() {
                    return Err(Rejection::invalid("game already started"));
                }
                if !state.is_active(&player) {
                    return Err(Rejection::invalid("only creator may start game"));
                }
                if state.players().len() < MIN_PLAYERS {
                    return Err(Rejection::invalid("too few players"));
                }
                Ok(Action::Start { player })
            }
            Action::CLUE => {
                let state = Self::turn(state, &player)?;
                if state.clues() < 1 {
                    return Err(Rejection::invalid("there are no clues available to give"));
                }
                let clue = request
                    .clue
                    .as_deref()
                    .and_then(|c| Clue::try_from(c).ok())
                    .ok_or_else(|| {
                        Rejection::invalid(format!(
                            "clue action must have clue field that matches {}",
                            Clue::PATTERN
                        ))
                    })?;
                let target = PlayerID::from(request.target_player.unwrap_or_default());
                if !state.has_player(&target) {
                    return Err(Rejection::invalid(format!(
                        "player {} is not in this game",
                        target
                    )));
                }
                if target == player {
                    return Err(Rejection::invalid("you may not target yourself"));
                }
                Ok(Action::Clue {
                    player,
                    target,
                    clue,
                    cards: Vec::new(),
                })
            }
            Action::PLAY => {
                let state = Self::turn(state, &player)?;
                let slot = Self::slot(request.card.as_deref(), state, "played")?;
                Ok(Action::Play { player, slot })
            }
            Action::DISCARD => {
                let state = Self::turn(state, &player)?;
                let slot = Self::slot(request.card.as_deref(), state, "discarded")?;
                Ok(Action::Discard { player, slot })
            }
            unknown => Err(Rejection::invalid(format!("unknown action: {}", unknown))),
        }
    }
}

impl Validator {
    fn acting(request: &Request) -> Result<PlayerID, Rejection> {
        request
            .acting()
            .map(PlayerID::from)
            .ok_or_else(|| Rejection::invalid("action must have an active player"))
    }
    fn unattached(state: Option<&GameState>) -> Result<(), Rejection> {
        match state {
            Some(_) => Err(Rejection::invalid("already connected to a game")),
            None => Ok(()),
        }
    }
    fn attached(state: Option<&GameState>) -> Result<&GameState, Rejection> {
        state.ok_or_else(|| Rejection::detached("not connected to a game"))
    }
    fn turn<'a>(state: Option<&'a GameState>, player: &PlayerID) -> Result<&'a GameState, Rejection> {
        let state = Self::attached(state)?;
        if !state.started() {
            return Err(Rejection::invalid("game is not started"));
        }
        if !state.is_active(player) {
            return Err(Rejection::invalid("not your turn"));
        }
        Ok(state)
    }
    /// Exactly one index, naming a held card in the active player's hand.
    fn slot(cards: Option<&[i64]>, state: &GameState, verb: &str) -> Result<Slot, Rejection> {
        let cards = cards.unwrap_or_default();
        let index = match cards {
            [index] => *index,
            _ => {
                return Err(Rejection::invalid(format!(
                    "exactly 1 card must be {}. Not {}",
                    verb,
                    cards.len()
                )));
            }
        };
        let hand = state.active().map(Player::hand);
        let size = hand.map(Hand::len).unwrap_or_default();
        let slot = Slot::try_from(index)
            .ok()
            .filter(|slot| *slot < size)
            .ok_or_else(|| Rejection::invalid(format!("no card on index {}", index)))?;
        match hand.and_then(|h| h.get(slot)) {
            Some(_) => Ok(slot),
            None => Err(Rejection::invalid(format!("card on index {} is already gone", index))),
        }
    }
}
