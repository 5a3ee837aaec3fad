use super::action::Action;
use serde::Deserialize;
use serde::Serialize;

/// An action as it appears on the wire, before validation.
///
/// Every field is optional because clients send whatever they like; the
/// [`Validator`](super::Validator) decides which fields a given `type`
/// requires and strips the rest. Card indices are signed so that a negative
/// index is a rule violation rather than a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_player: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_player: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clue: Option<String>,
}

impl Request {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            ..Self::default()
        }
    }
    pub fn kind(&self) -> &str {
        &self.kind
    }
    pub fn game(mut self, game: &str) -> Self {
        self.game = Some(game.to_string());
        self
    }
    pub fn player(mut self, player: &str) -> Self {
        self.active_player = Some(player.to_string());
        self
    }
    pub fn target(mut self, player: &str) -> Self {
        self.target_player = Some(player.to_string());
        self
    }
    pub fn cards(mut self, cards: &[i64]) -> Self {
        self.card = Some(cards.to_vec());
        self
    }
    pub fn clue(mut self, clue: &str) -> Self {
        self.clue = Some(clue.to_string());
        self
    }
    /// The acting player, treating an empty string as absent.
    pub fn acting(&self) -> Option<&str> {
        self.active_player.as_deref().filter(|s| !s.is_empty())
    }
    /// True for known actions that only make sense inside a session.
    pub fn needs_session(&self) -> bool {
        matches!(
            self.kind.as_str(),
            Action::PING | Action::START | Action::CLUE | Action::PLAY | Action::DISCARD
        )
    }
}
