use hnb_cards::*;

/// A hint naming either a colour or a value.
///
/// The wire symbol is a single character matching `^[1-5BGRWY]$`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Clue {
    Color(Color),
    Value(Value),
}

impl Clue {
    /// Every accepted wire symbol.
    pub const PATTERN: &'static str = "^[12345BGRWY]$";
    /// True if the card carries the named colour or value.
    pub fn matches(&self, card: &Card) -> bool {
        match self {
            Clue::Color(color) => card.color() == *color,
            Clue::Value(value) => card.value() == *value,
        }
    }
    pub fn symbol(&self) -> char {
        match self {
            Clue::Color(color) => color.symbol(),
            Clue::Value(value) => value.symbol(),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Clue {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Color::try_from(c)
                .map(Clue::Color)
                .or_else(|_| Value::try_from(c).map(Clue::Value))
                .map_err(|_| format!("invalid clue: {}", s)),
            _ => Err(format!("invalid clue: {}", s)),
        }
    }
}

impl std::fmt::Display for Clue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
