use super::*;
use hnb_gameplay::GameState;
use hnb_gameroom::Event;

/// One server-to-client message.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum Response {
    State(GameState),
    Error {
        err: u16,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

impl From<&Error> for Response {
    fn from(error: &Error) -> Self {
        Response::Error {
            err: error.status(),
            message: Some(error.to_string()),
        }
    }
}

/// Wire encoding for responses: one JSON object per line.
pub struct Protocol;

impl Protocol {
    pub fn encode(response: &Response) -> Result<Vec<u8>, Error> {
        let mut bytes = serde_json::to_vec(response).map_err(|e| Error::Protocol(e.to_string()))?;
        bytes.push(b'\n');
        Ok(bytes)
    }
    pub fn error(error: &Error) -> Response {
        Response::from(error)
    }
    /// The response a room event turns into, if any.
    pub fn event(event: Event) -> Option<Response> {
        match event {
            Event::State(state) => Some(Response::State(state)),
            Event::Reject(rejection) => Some(Self::error(&Error::from(rejection))),
            Event::Close => None,
        }
    }
}
