use super::color::Color;
use super::value::Value;

/// A playing card: an immutable `(Color, Value)` pair.
///
/// Serialized on the wire as `{"color":"W","value":"1"}`. The standard deck
/// holds 25 distinct cards, most of them in several copies, so equality is
/// by face and says nothing about which physical copy is meant.
///
/// # Parsing
///
/// Cards parse from two-character strings like `"W1"` (white one). Use
/// [`Card::parse`] for several cards at once.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Card {
    color: Color,
    value: Value,
}

impl Card {
    pub fn color(&self) -> Color {
        self.color
    }
    pub fn value(&self) -> Value {
        self.value
    }
}

/// (Color, Value) isomorphism
impl From<(Color, Value)> for Card {
    fn from((color, value): (Color, Value)) -> Self {
        Self { color, value }
    }
}
impl From<Card> for (Color, Value) {
    fn from(card: Card) -> Self {
        (card.color, card.value)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.color, self.value)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let chars = s.trim().chars().collect::<Vec<_>>();
        match chars.as_slice() {
            [c, v] => Ok(Card::from((Color::try_from(*c)?, Value::try_from(*v)?))),
            _ => Err(format!("expected 2 characters: {}", s)),
        }
    }
}
impl Card {
    /// Parses whitespace-separated card notations into a vector of cards.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.split_whitespace()
            .map(Self::try_from)
            .collect::<Result<Vec<Self>, _>>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_str() {
        let card = Card::from((Color::W, Value::Three));
        assert_eq!(Card::try_from(card.to_string().as_str()), Ok(card));
    }

    #[test]
    fn parse_many() {
        assert!(Card::parse("W1 R5 b1").is_err());
        let cards = Card::parse("W1 R5 B2").unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[1], Card::from((Color::R, Value::Five)));
    }

    #[test]
    fn wire_shape() {
        let card = Card::from((Color::G, Value::Four));
        let json = serde_json::to_value(card).unwrap();
        assert_eq!(json, serde_json::json!({ "color": "G", "value": "4" }));
        assert_eq!(serde_json::from_value::<Card>(json).unwrap(), card);
    }
}
