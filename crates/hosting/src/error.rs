use hnb_gameplay::Rejection;
use hnb_gameroom::Refusal;

/// Everything that can go wrong on a connection.
///
/// Each variant maps to the status class reported to the client. Only the
/// fatal ones end the connection; the rest are reported and the client may
/// try again.
#[derive(Debug)]
pub enum Error {
    /// A request line overflowed the frame buffer.
    Protocol(String),
    /// A request line was not a well-formed action.
    Decode(String),
    /// An action broke a rule.
    Validation(String),
    /// No session with the requested id.
    NotFound(String),
    /// Session id collision, or an action sent outside any session.
    Conflict(String),
    /// The session is full or already underway.
    Capacity(String),
    /// Nothing arrived within the idle window.
    Timeout,
    /// The peer hung up.
    Closed,
    Io(std::io::Error),
}

impl Error {
    /// HTTP-style status class sent in the `err` field.
    pub fn status(&self) -> u16 {
        match self {
            Error::Protocol(_) => 400,
            Error::Decode(_) => 400,
            Error::Validation(_) => 400,
            Error::NotFound(_) => 404,
            Error::Conflict(_) => 409,
            Error::Capacity(_) => 412,
            Error::Timeout => 504,
            Error::Closed => 400,
            Error::Io(_) => 400,
        }
    }
    /// True if the connection cannot continue after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Protocol(_) | Error::Timeout | Error::Closed | Error::Io(_)
        )
    }
}

impl From<Rejection> for Error {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::Detached(reason) => Error::Conflict(reason),
            Rejection::Invalid(reason) => Error::Validation(reason),
        }
    }
}

impl From<Refusal> for Error {
    fn from(refusal: Refusal) -> Self {
        match refusal {
            Refusal::Full => Error::Capacity(String::from("cannot join game. too many connections")),
            Refusal::Started => Error::Capacity(String::from("cannot join game. game already started")),
            Refusal::Gone => Error::NotFound(String::from("game is over")),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Protocol(msg) => write!(f, "protocol error: {}", msg),
            Error::Decode(msg) => write!(f, "failed to parse incoming action: {}", msg),
            Error::Validation(msg) => write!(f, "{}", msg),
            Error::NotFound(msg) => write!(f, "{}", msg),
            Error::Conflict(msg) => write!(f, "{}", msg),
            Error::Capacity(msg) => write!(f, "{}", msg),
            Error::Timeout => write!(f, "connection timed out"),
            Error::Closed => write!(f, "connection closed"),
            Error::Io(e) => write!(f, "i/o error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}
