use super::*;
use hnb_gameplay::*;
use hnb_gameroom::*;
use std::sync::Arc;
use tokio::io::AsyncRead;
use tokio::io::AsyncWrite;
use tokio::io::AsyncWriteExt;
use tokio::io::ReadHalf;
use tokio::io::WriteHalf;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::unbounded_channel;

/// Per-connection control loop.
///
/// Starts unbound: only `create` and `join` are accepted, and a successful
/// one binds the connection to a session as a known player. Once bound,
/// requests are checked against the session's latest snapshot and queued in
/// its mailbox, while the session's broadcasts for this player are written
/// back as they arrive.
pub struct Connection<S> {
    framer: Framer<ReadHalf<S>, Request>,
    writer: WriteHalf<S>,
    registry: Arc<Registry>,
    link: Link,
    inbox: UnboundedReceiver<Event>,
    player: PlayerID,
    room: Option<RoomHandle>,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Send + 'static,
{
    pub fn new(stream: S, registry: Arc<Registry>, config: HostConfig) -> Self {
        let (reader, writer) = tokio::io::split(stream);
        let (link, inbox) = unbounded_channel();
        Self {
            framer: Framer::new(reader, config.frame, config.idle),
            writer,
            registry,
            link,
            inbox,
            player: PlayerID::random(),
            room: None,
        }
    }

    pub async fn run(mut self) {
        log::debug!("[conn {}] open", self.player);
        loop {
            let written = tokio::select! {
                biased;
                event = self.inbox.recv() => match event.and_then(Protocol::event) {
                    Some(response) => self.write(&response).await,
                    None => break,
                },
                request = self.framer.next() => match request {
                    Ok(request) => match self.handle(request).await {
                        Ok(()) => Ok(()),
                        Err(e) => self.fail(&e).await,
                    },
                    Err(Error::Closed) => break,
                    Err(e) if e.is_fatal() => {
                        let _ = self.fail(&e).await;
                        break;
                    }
                    Err(e) => self.fail(&e).await,
                },
            };
            if let Err(e) = written {
                log::debug!("[conn {}] write failed: {}", self.player, e);
                break;
            }
        }
        let _ = self.writer.shutdown().await;
        log::debug!("[conn {}] closed", self.player);
    }
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Send + 'static,
{
    async fn handle(&mut self, request: Request) -> Result<(), Error> {
        match self.room.as_ref() {
            None => self.bind(request).await,
            Some(room) => {
                let request = Request {
                    active_player: Some(self.player.to_string()),
                    ..request
                };
                let action = Validator::validate(request, Some(&room.snapshot()))?;
                log::trace!("[conn {}] {}", self.player, action);
                room.send(action).await?;
                Ok(())
            }
        }
    }

    /// Creates or joins a session, then acknowledges with its id.
    async fn bind(&mut self, request: Request) -> Result<(), Error> {
        if request.needs_session() {
            return Err(Error::Conflict(format!(
                "invalid action: {}. not in a game",
                request.kind()
            )));
        }
        let player = request
            .acting()
            .map(PlayerID::from)
            .unwrap_or_else(|| self.player.clone());
        let request = Request {
            active_player: Some(player.to_string()),
            ..request
        };
        let room = match Validator::validate(request, None)? {
            Action::Create { game, player } => {
                self.registry.create(game, player, self.link.clone()).await?
            }
            Action::Join { game, player } => {
                self.registry.join(&game, player, self.link.clone()).await?
            }
            action => {
                return Err(Error::Conflict(format!(
                    "invalid action: {}. not in a game",
                    action.label()
                )));
            }
        };
        log::info!("[conn {}] bound to game {}", player, room.id());
        self.player = player;
        let ack = Response::State(GameState::new(room.id().clone(), 0));
        self.room = Some(room);
        self.write(&ack).await
    }

    /// Reports an error to the client.
    async fn fail(&mut self, error: &Error) -> Result<(), Error> {
        log::debug!("[conn {}] {}", self.player, error);
        self.write(&Protocol::error(error)).await
    }

    async fn write(&mut self, response: &Response) -> Result<(), Error> {
        let bytes = Protocol::encode(response)?;
        self.writer.write_all(&bytes).await?;
        self.writer.flush().await?;
        Ok(())
    }
}
