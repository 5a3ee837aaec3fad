use super::*;

/// A seat at the table: identity plus hand.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Player {
    id: PlayerID,
    #[serde(rename = "cards", skip_serializing_if = "Hand::is_empty")]
    hand: Hand,
}

impl Player {
    pub fn new(id: PlayerID) -> Self {
        Self {
            id,
            hand: Hand::default(),
        }
    }
    pub fn id(&self) -> &PlayerID {
        &self.id
    }
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

impl From<(PlayerID, Hand)> for Player {
    fn from((id, hand): (PlayerID, Hand)) -> Self {
        Self { id, hand }
    }
}
