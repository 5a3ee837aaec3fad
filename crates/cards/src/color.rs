/// Firework colour of a card.
///
/// The ordering (B < G < R < W < Y) is alphabetical by wire symbol and only
/// matters for producing the unshuffled standard deck.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Color {
    B = 0,
    G = 1,
    R = 2,
    W = 3,
    Y = 4,
}

impl Color {
    /// All five colours in canonical order.
    pub const fn all() -> [Color; 5] {
        [Color::B, Color::G, Color::R, Color::W, Color::Y]
    }
    /// Single-character wire symbol.
    pub const fn symbol(&self) -> char {
        match self {
            Color::B => 'B',
            Color::G => 'G',
            Color::R => 'R',
            Color::W => 'W',
            Color::Y => 'Y',
        }
    }
}

/// char isomorphism
impl TryFrom<char> for Color {
    type Error = String;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'B' => Ok(Color::B),
            'G' => Ok(Color::G),
            'R' => Ok(Color::R),
            'W' => Ok(Color::W),
            'Y' => Ok(Color::Y),
            _ => Err(format!("invalid color char: {}", c)),
        }
    }
}
impl From<Color> for char {
    fn from(c: Color) -> char {
        c.symbol()
    }
}

/// str isomorphism
impl TryFrom<&str> for Color {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Color::try_from(c),
            _ => Err(format!("invalid color str: {}", s)),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl serde::Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}
