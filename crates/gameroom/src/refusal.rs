/// Why a room would not attach a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refusal {
    /// Five players or five connections already.
    Full,
    /// A new player cannot join a game in progress.
    Started,
    /// The room has stopped taking commands.
    Gone,
}

impl std::fmt::Display for Refusal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Refusal::Full => write!(f, "game is full"),
            Refusal::Started => write!(f, "game already started"),
            Refusal::Gone => write!(f, "game is over"),
        }
    }
}

impl std::error::Error for Refusal {}
