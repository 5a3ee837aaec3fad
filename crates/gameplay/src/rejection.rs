/// Why the [`Validator`](super::Validator) refused a request.
///
/// Neither variant mutates anything; the connection reports the reason and
/// carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The request needs a session the caller is not attached to.
    Detached(String),
    /// The request breaks a rule or is missing a field.
    Invalid(String),
}

impl Rejection {
    pub fn detached(reason: impl Into<String>) -> Self {
        Self::Detached(reason.into())
    }
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid(reason.into())
    }
    pub fn reason(&self) -> &str {
        match self {
            Self::Detached(reason) | Self::Invalid(reason) => reason,
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

impl std::error::Error for Rejection {}
