/// Face value of a card, 1 through 5.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Value {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl Value {
    /// All five values in ascending order.
    pub const fn all() -> [Value; 5] {
        [
            Value::One,
            Value::Two,
            Value::Three,
            Value::Four,
            Value::Five,
        ]
    }
    /// Copies of this value per colour in the standard deck.
    pub const fn copies(&self) -> usize {
        match self {
            Value::One => 3,
            Value::Two | Value::Three | Value::Four => 2,
            Value::Five => 1,
        }
    }
    /// The value that must follow this one on a pile.
    pub fn next(&self) -> Option<Value> {
        match self {
            Value::One => Some(Value::Two),
            Value::Two => Some(Value::Three),
            Value::Three => Some(Value::Four),
            Value::Four => Some(Value::Five),
            Value::Five => None,
        }
    }
    /// Single-character wire symbol.
    pub const fn symbol(&self) -> char {
        match self {
            Value::One => '1',
            Value::Two => '2',
            Value::Three => '3',
            Value::Four => '4',
            Value::Five => '5',
        }
    }
}

/// u8 isomorphism
impl TryFrom<u8> for Value {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Value::One),
            2 => Ok(Value::Two),
            3 => Ok(Value::Three),
            4 => Ok(Value::Four),
            5 => Ok(Value::Five),
            _ => Err(format!("invalid value: {}", n)),
        }
    }
}
impl From<Value> for u8 {
    fn from(v: Value) -> u8 {
        v as u8
    }
}

/// char isomorphism
impl TryFrom<char> for Value {
    type Error = String;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .ok_or_else(|| format!("invalid value char: {}", c))
            .and_then(|n| Value::try_from(n as u8))
    }
}

/// str isomorphism
impl TryFrom<&str> for Value {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Value::try_from(c),
            _ => Err(format!("invalid value str: {}", s)),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
impl<'de> serde::Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Value::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for value in Value::all() {
            assert_eq!(Value::try_from(u8::from(value)), Ok(value));
        }
    }

    #[test]
    fn successor_chain() {
        assert_eq!(Value::One.next(), Some(Value::Two));
        assert_eq!(Value::Four.next(), Some(Value::Five));
        assert_eq!(Value::Five.next(), None);
    }

    #[test]
    fn copies_sum_to_ten() {
        assert_eq!(Value::all().iter().map(Value::copies).sum::<usize>(), 10);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Value::try_from('0').is_err());
        assert!(Value::try_from('6').is_err());
        assert!(Value::try_from("12").is_err());
    }
}
