use super::*;
use std::sync::Arc;
use tokio::io::AsyncRead;
use tokio::io::AsyncWrite;
use tokio::net::TcpListener;
use tokio::net::TcpStream;

/// Source of incoming byte streams.
#[async_trait::async_trait]
pub trait Acceptor: Send {
    type Stream: AsyncRead + AsyncWrite + Send + 'static;
    /// Waits for the next stream, returning it with a printable peer name.
    async fn accept(&mut self) -> std::io::Result<(Self::Stream, String)>;
}

#[async_trait::async_trait]
impl Acceptor for TcpListener {
    type Stream = TcpStream;
    async fn accept(&mut self) -> std::io::Result<(TcpStream, String)> {
        let (stream, peer) = TcpListener::accept(self).await?;
        stream.set_nodelay(true)?;
        Ok((stream, peer.to_string()))
    }
}

/// Accept loop: one [`Connection`] task per stream.
pub struct Server {
    registry: Arc<Registry>,
}

impl Server {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }
    /// Serves until the acceptor reports it is exhausted.
    pub async fn serve<A>(self, mut acceptor: A) -> anyhow::Result<()>
    where
        A: Acceptor,
    {
        let config = self.registry.config();
        log::info!("accepting connections");
        loop {
            match acceptor.accept().await {
                Ok((stream, peer)) => {
                    log::debug!("[server] accepted {}", peer);
                    let connection = Connection::new(stream, self.registry.clone(), config);
                    tokio::spawn(connection.run());
                }
                Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                    log::info!("acceptor exhausted");
                    return Ok(());
                }
                Err(e) => log::warn!("[server] accept failed: {}", e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hnb_cards::Card;
    use hnb_cards::Deck;
    use tokio::io::AsyncWriteExt;
    use tokio::io::DuplexStream;
    use tokio::io::ReadHalf;
    use tokio::io::WriteHalf;
    use tokio::sync::mpsc;

    /// Hands out in-memory streams pushed by the test.
    struct Pipes(mpsc::Receiver<DuplexStream>);

    #[async_trait::async_trait]
    impl Acceptor for Pipes {
        type Stream = DuplexStream;
        async fn accept(&mut self) -> std::io::Result<(DuplexStream, String)> {
            match self.0.recv().await {
                Some(stream) => Ok((stream, String::from("pipe"))),
                None => Err(std::io::ErrorKind::UnexpectedEof.into()),
            }
        }
    }

    struct Client {
        reader: Framer<ReadHalf<DuplexStream>, serde_json::Value>,
        writer: WriteHalf<DuplexStream>,
    }

    impl Client {
        async fn connect(pipes: &mpsc::Sender<DuplexStream>) -> Self {
            let (client, server) = tokio::io::duplex(4096);
            pipes.send(server).await.unwrap();
            let (reader, writer) = tokio::io::split(client);
            Self {
                reader: Framer::new(reader, 4096, std::time::Duration::from_secs(5)),
                writer,
            }
        }
        async fn send(&mut self, json: serde_json::Value) {
            let mut line = json.to_string();
            line.push('\n');
            self.writer.write_all(line.as_bytes()).await.unwrap();
        }
        async fn recv(&mut self) -> serde_json::Value {
            self.reader.next().await.unwrap()
        }
    }

    fn dealer() -> Deck {
        Deck::from(Card::parse(&"W1 W2 W3 B1 B2 ".repeat(10)).unwrap_or_default())
    }

    #[tokio::test]
    async fn two_players_start_and_play() {
        let registry = Arc::new(Registry::with_dealer(HostConfig::default(), dealer));
        let (pipes, accepted) = mpsc::channel(4);
        let server = tokio::spawn(Server::new(registry.clone()).serve(Pipes(accepted)));

        let mut a = Client::connect(&pipes).await;
        a.send(serde_json::json!({ "type": "create", "game": "g", "activePlayer": "a" })).await;
        let ack = a.recv().await;
        assert_eq!(ack["id"], "g");
        assert_eq!(ack["players"], serde_json::json!([]));
        let first = a.recv().await;
        assert_eq!(first["players"][0]["id"], "a");

        let mut b = Client::connect(&pipes).await;
        b.send(serde_json::json!({ "type": "join", "game": "g", "activePlayer": "b" })).await;
        assert_eq!(b.recv().await["id"], "g");
        assert_eq!(b.recv().await["players"].as_array().map(Vec::len), Some(2));
        assert_eq!(a.recv().await["players"].as_array().map(Vec::len), Some(2));

        a.send(serde_json::json!({ "type": "start" })).await;
        let seen_by_a = a.recv().await;
        let seen_by_b = b.recv().await;
        assert_eq!(seen_by_a["started"], true);
        assert!(seen_by_a["players"][0].get("cards").is_none());
        assert_eq!(seen_by_a["players"][1]["cards"][4], serde_json::json!({ "color": "B", "value": "2" }));
        assert!(seen_by_b["players"][1].get("cards").is_none());
        assert_eq!(seen_by_b["players"][0]["cards"][0], serde_json::json!({ "color": "W", "value": "1" }));
        assert_eq!(seen_by_a["deck"], 40);
        assert_eq!(seen_by_a["clues"], 8);
        assert_eq!(seen_by_a["lives"], 3);

        b.send(serde_json::json!({ "type": "play", "card": [0] })).await;
        let rejected = b.recv().await;
        assert_eq!(rejected["err"], 400);
        assert_eq!(rejected["message"], "not your turn");

        a.send(serde_json::json!({ "type": "play", "activePlayer": "b", "card": [0] })).await;
        let after = b.recv().await;
        assert_eq!(after["table"], serde_json::json!([{ "color": "W", "value": "1" }]));
        assert_eq!(after["playedAction"]["type"], "play");
        assert_eq!(after["playedAction"]["activePlayer"], "a");
        assert_eq!(after["players"][0]["id"], "b");
        assert_eq!(a.recv().await["deck"], 39);

        b.send(serde_json::json!({ "type": "ping" })).await;
        assert_eq!(b.recv().await["playedAction"]["type"], "ping");

        drop(pipes);
        server.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn unbound_connections_must_create_or_join() {
        let registry = Arc::new(Registry::with_dealer(HostConfig::default(), dealer));
        let (pipes, accepted) = mpsc::channel(4);
        tokio::spawn(Server::new(registry).serve(Pipes(accepted)));
        let mut a = Client::connect(&pipes).await;

        a.send(serde_json::json!({ "type": "start", "activePlayer": "a" })).await;
        assert_eq!(a.recv().await["err"], 409);
        a.send(serde_json::json!({ "type": "join", "game": "missing" })).await;
        assert_eq!(a.recv().await["err"], 404);
        a.send(serde_json::json!({ "type": "join" })).await;
        let reply = a.recv().await;
        assert_eq!(reply["err"], 400);
        assert_eq!(reply["message"], "join action must have game id");
        a.send(serde_json::json!({ "type": "shuffle", "activePlayer": "a" })).await;
        let reply = a.recv().await;
        assert_eq!(reply["err"], 400);
        assert_eq!(reply["message"], "unknown action: shuffle");
        a.writer.write_all(b"garbage\n").await.unwrap();
        assert_eq!(a.recv().await["err"], 400);

        a.send(serde_json::json!({ "type": "create" })).await;
        let ack = a.recv().await;
        assert!(!ack["id"].as_str().unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn create_collision_closes_the_caller() {
        let registry = Arc::new(Registry::with_dealer(HostConfig::default(), dealer));
        let (pipes, accepted) = mpsc::channel(4);
        tokio::spawn(Server::new(registry.clone()).serve(Pipes(accepted)));
        let mut a = Client::connect(&pipes).await;
        a.send(serde_json::json!({ "type": "create", "game": "g", "activePlayer": "a" })).await;
        a.recv().await;
        let mut b = Client::connect(&pipes).await;
        b.send(serde_json::json!({ "type": "create", "game": "g", "activePlayer": "b" })).await;
        assert_eq!(b.recv().await["err"], 409);
        assert!(matches!(b.reader.next().await, Err(Error::Closed)));
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn reconnect_replaces_the_old_connection() {
        let registry = Arc::new(Registry::with_dealer(HostConfig::default(), dealer));
        let (pipes, accepted) = mpsc::channel(4);
        tokio::spawn(Server::new(registry.clone()).serve(Pipes(accepted)));
        let mut a = Client::connect(&pipes).await;
        a.send(serde_json::json!({ "type": "create", "game": "g", "activePlayer": "a" })).await;
        a.recv().await;
        a.recv().await;
        let mut again = Client::connect(&pipes).await;
        again.send(serde_json::json!({ "type": "join", "game": "g", "activePlayer": "a" })).await;
        assert_eq!(again.recv().await["id"], "g");
        assert!(matches!(a.reader.next().await, Err(Error::Closed)));
        let state = again.recv().await;
        assert_eq!(state["players"].as_array().map(Vec::len), Some(1));
        assert_eq!(state["playedAction"]["type"], "join");
    }

    #[tokio::test]
    async fn hang_up_leaves_the_session_running() {
        let registry = Arc::new(Registry::with_dealer(HostConfig::default(), dealer));
        let (pipes, accepted) = mpsc::channel(4);
        tokio::spawn(Server::new(registry.clone()).serve(Pipes(accepted)));
        let mut a = Client::connect(&pipes).await;
        a.send(serde_json::json!({ "type": "create", "game": "g", "activePlayer": "a" })).await;
        a.recv().await;
        a.recv().await;
        let mut b = Client::connect(&pipes).await;
        b.send(serde_json::json!({ "type": "join", "game": "g", "activePlayer": "b" })).await;
        b.recv().await;
        b.recv().await;
        assert_eq!(a.recv().await["players"].as_array().map(Vec::len), Some(2));
        drop(b);

        a.send(serde_json::json!({ "type": "ping" })).await;
        assert_eq!(a.recv().await["playedAction"]["type"], "ping");
        a.send(serde_json::json!({ "type": "start" })).await;
        let started = a.recv().await;
        assert_eq!(started["started"], true);
        assert_eq!(started["players"].as_array().map(Vec::len), Some(2));
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn idle_connections_time_out() {
        let registry = Arc::new(Registry::with_dealer(HostConfig::default(), dealer));
        let (pipes, accepted) = mpsc::channel(4);
        tokio::spawn(Server::new(registry).serve(Pipes(accepted)));
        let (mut client, server) = tokio::io::duplex(1024);
        pipes.send(server).await.unwrap();
        let mut reply = Vec::new();
        tokio::io::AsyncReadExt::read_to_end(&mut client, &mut reply).await.unwrap();
        let json = serde_json::from_slice::<serde_json::Value>(&reply).unwrap();
        assert_eq!(json["err"], 504);
    }
}
