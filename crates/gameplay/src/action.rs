use super::*;
use hnb_core::Slot;

/// A validated action, carrying only the fields its variant requires.
///
/// Produced by the [`Validator`] from a wire [`Request`]; consumed by
/// [`Game::apply`]. Serializes back to the flat wire shape so that the last
/// applied action can be echoed to clients as `playedAction`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Ping {
        player: PlayerID,
    },
    Create {
        game: Option<GameID>,
        player: PlayerID,
    },
    Join {
        game: GameID,
        player: PlayerID,
    },
    Start {
        player: PlayerID,
    },
    /// `cards` is empty on the way in and filled with the target's matching
    /// slots once applied.
    Clue {
        player: PlayerID,
        target: PlayerID,
        clue: Clue,
        cards: Vec<Slot>,
    },
    Play {
        player: PlayerID,
        slot: Slot,
    },
    Discard {
        player: PlayerID,
        slot: Slot,
    },
}

impl Action {
    pub const PING: &'static str = "ping";
    pub const CREATE: &'static str = "create";
    pub const JOIN: &'static str = "join";
    pub const START: &'static str = "start";
    pub const CLUE: &'static str = "clue";
    pub const PLAY: &'static str = "play";
    pub const DISCARD: &'static str = "discard";
}

impl Action {
    /// The acting player.
    pub fn player(&self) -> &PlayerID {
        match self {
            Action::Ping { player }
            | Action::Create { player, .. }
            | Action::Join { player, .. }
            | Action::Start { player }
            | Action::Clue { player, .. }
            | Action::Play { player, .. }
            | Action::Discard { player, .. } => player,
        }
    }
    /// True for actions that consume a turn and rotate the table.
    pub fn is_turn(&self) -> bool {
        matches!(
            self,
            Action::Clue { .. } | Action::Play { .. } | Action::Discard { .. }
        )
    }
    pub fn is_ping(&self) -> bool {
        matches!(self, Action::Ping { .. })
    }
    /// Wire `type` tag.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Ping { .. } => Self::PING,
            Action::Create { .. } => Self::CREATE,
            Action::Join { .. } => Self::JOIN,
            Action::Start { .. } => Self::START,
            Action::Clue { .. } => Self::CLUE,
            Action::Play { .. } => Self::PLAY,
            Action::Discard { .. } => Self::DISCARD,
        }
    }
}

impl From<&Action> for Request {
    fn from(action: &Action) -> Self {
        let request = Request::new(action.label()).player(action.player().as_str());
        match action {
            Action::Ping { .. } | Action::Start { .. } => request,
            Action::Create { game, .. } => match game {
                Some(game) => request.game(game.as_str()),
                None => request,
            },
            Action::Join { game, .. } => request.game(game.as_str()),
            Action::Clue {
                target,
                clue,
                cards,
                ..
            } => {
                let request = request
                    .target(target.as_str())
                    .clue(&clue.to_string());
                match cards.is_empty() {
                    true => request,
                    false => request.cards(&cards.iter().map(|i| *i as i64).collect::<Vec<_>>()),
                }
            }
            Action::Play { slot, .. } | Action::Discard { slot, .. } => {
                request.cards(&[*slot as i64])
            }
        }
    }
}

impl serde::Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Request::from(self).serialize(serializer)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Ping { player } => write!(f, "{} pings", player),
            Action::Create { game: Some(g), player } => write!(f, "{} creates {}", player, g),
            Action::Create { game: None, player } => write!(f, "{} creates", player),
            Action::Join { game, player } => write!(f, "{} joins {}", player, game),
            Action::Start { player } => write!(f, "{} starts", player),
            Action::Clue {
                player,
                target,
                clue,
                ..
            } => write!(f, "{} clues {} to {}", player, clue, target),
            Action::Play { player, slot } => write!(f, "{} plays #{}", player, slot),
            Action::Discard { player, slot } => write!(f, "{} discards #{}", player, slot),
        }
    }
}
