use super::clue::Clue;
use hnb_cards::Card;
use hnb_core::Slot;

/// A player's cards, indexed by stable slot.
///
/// Slots never shift: a played or discarded card is replaced in place by the
/// next draw. Once the deck runs dry the slot stays empty, which the wire
/// encodes as the sentinel `{"color":"-","value":"-"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand(Vec<Option<Card>>);

impl Hand {
    /// Wire symbol for both fields of an empty slot.
    const BLANK: &'static str = "-";
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// The card in a slot, or `None` if out of bounds or empty.
    pub fn get(&self, slot: Slot) -> Option<Card> {
        self.0.get(slot).copied().flatten()
    }
    /// Swaps a new card (or nothing) into a slot and returns what was there.
    pub fn replace(&mut self, slot: Slot, card: Option<Card>) -> Option<Card> {
        self.0
            .get_mut(slot)
            .and_then(|held| std::mem::replace(held, card))
    }
    /// Slots holding a card the clue describes, in ascending order.
    pub fn matching(&self, clue: &Clue) -> Vec<Slot> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, card)| card.as_ref().is_some_and(|c| clue.matches(c)))
            .map(|(i, _)| i)
            .collect()
    }
    pub fn clear(&mut self) {
        self.0.clear();
    }
    pub fn iter(&self) -> impl Iterator<Item = &Option<Card>> {
        self.0.iter()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards.into_iter().map(Some).collect())
    }
}
impl From<Vec<Option<Card>>> for Hand {
    fn from(slots: Vec<Option<Card>>) -> Self {
        Self(slots)
    }
}

/// Wire face of a slot.
#[derive(serde::Serialize)]
struct Face {
    color: String,
    value: String,
}

impl From<&Option<Card>> for Face {
    fn from(slot: &Option<Card>) -> Self {
        match slot {
            Some(card) => Self {
                color: card.color().to_string(),
                value: card.value().to_string(),
            },
            None => Self {
                color: Hand::BLANK.to_string(),
                value: Hand::BLANK.to_string(),
            },
        }
    }
}

impl serde::Serialize for Hand {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.0.iter().map(Face::from))
    }
}
