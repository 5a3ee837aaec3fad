use super::*;
use futures::Stream;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::time::Duration;
use tokio::io::AsyncRead;
use tokio::io::AsyncReadExt;
use tokio::time::Instant;

/// Splits a byte stream into newline-terminated JSON messages.
///
/// Bytes carry over between calls in a fixed-capacity buffer: a message may
/// arrive across several reads, and one read may hold several messages. The
/// idle deadline is pushed back whenever bytes arrive or a message is
/// delivered, and is kept across calls so that dropping a pending
/// [`Framer::next`] (as `select!` does) neither loses bytes nor restarts the
/// clock.
///
/// Generic over the decoded type, so the same framer reads requests on the
/// server and responses on a client.
pub struct Framer<R, T> {
    reader: R,
    buffer: Box<[u8]>,
    filled: usize,
    idle: Duration,
    deadline: Instant,
    marker: PhantomData<fn() -> T>,
}

impl<R, T> Framer<R, T>
where
    R: AsyncRead + Unpin,
    T: DeserializeOwned,
{
    pub fn new(reader: R, capacity: usize, idle: Duration) -> Self {
        Self {
            reader,
            buffer: vec![0; capacity.max(1)].into_boxed_slice(),
            filled: 0,
            idle,
            deadline: Instant::now() + idle,
            marker: PhantomData,
        }
    }

    /// Waits for the next complete message.
    ///
    /// A malformed line is reported as [`Error::Decode`] and consumed, so
    /// the caller can keep reading. Overflow, timeout, hang-up, and I/O
    /// failure are terminal.
    pub async fn next(&mut self) -> Result<T, Error> {
        loop {
            if let Some(line) = self.line() {
                self.deadline = Instant::now() + self.idle;
                return serde_json::from_slice::<T>(&line).map_err(Error::from);
            }
            if self.filled == self.buffer.len() {
                self.filled = 0;
                log::debug!("[framer] line exceeds {} bytes", self.buffer.len());
                return Err(Error::Protocol(format!(
                    "message longer than {} bytes",
                    self.buffer.len()
                )));
            }
            let read = self.reader.read(&mut self.buffer[self.filled..]);
            match tokio::time::timeout_at(self.deadline, read).await {
                Err(_) => return Err(Error::Timeout),
                Ok(Err(e)) => return Err(Error::Io(e)),
                Ok(Ok(0)) => return Err(Error::Closed),
                Ok(Ok(n)) => {
                    self.filled += n;
                    self.deadline = Instant::now() + self.idle;
                }
            }
        }
    }

    /// Lazy stream of messages that ends after the first terminal error.
    pub fn into_stream(self) -> impl Stream<Item = Result<T, Error>> {
        futures::stream::unfold(Some(self), |framer| async move {
            let mut framer = framer?;
            match framer.next().await {
                Err(e) if e.is_fatal() => Some((Err(e), None)),
                item => Some((item, Some(framer))),
            }
        })
    }
}

impl<R, T> Framer<R, T> {
    /// Takes the first complete line out of the buffer, without its newline.
    fn line(&mut self) -> Option<Vec<u8>> {
        let end = self.buffer[..self.filled].iter().position(|b| *b == b'\n')?;
        let line = self.buffer[..end].to_vec();
        self.buffer.copy_within(end + 1..self.filled, 0);
        self.filled -= end + 1;
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use hnb_gameplay::Request;
    use tokio::io::AsyncWriteExt;

    const IDLE: Duration = Duration::from_secs(30);

    #[tokio::test]
    async fn reassembles_split_messages() {
        let (mut client, server) = tokio::io::duplex(64);
        let mut framer = Framer::<_, Request>::new(server, 512, IDLE);
        client.write_all(br#"{"type":"pi"#).await.unwrap();
        client.write_all(br#"ng","activePlayer":"a"}"#).await.unwrap();
        client.write_all(b"\n").await.unwrap();
        let request = framer.next().await.unwrap();
        assert_eq!(request.kind(), "ping");
        assert_eq!(request.acting(), Some("a"));
    }

    #[tokio::test]
    async fn keeps_the_remainder_of_a_read() {
        let (mut client, server) = tokio::io::duplex(256);
        let mut framer = Framer::<_, Request>::new(server, 512, IDLE);
        client
            .write_all(b"{\"type\":\"create\"}\n{\"type\":\"start\"}\n{\"type\":")
            .await
            .unwrap();
        assert_eq!(framer.next().await.unwrap().kind(), "create");
        assert_eq!(framer.next().await.unwrap().kind(), "start");
        client.write_all(b"\"ping\"}\n").await.unwrap();
        assert_eq!(framer.next().await.unwrap().kind(), "ping");
    }

    #[tokio::test]
    async fn bad_json_is_not_fatal() {
        let (mut client, server) = tokio::io::duplex(64);
        let mut framer = Framer::<_, Request>::new(server, 512, IDLE);
        client.write_all(b"nope\n{\"type\":\"ping\"}\n").await.unwrap();
        let error = framer.next().await.unwrap_err();
        assert!(matches!(error, Error::Decode(_)));
        assert!(!error.is_fatal());
        assert_eq!(framer.next().await.unwrap().kind(), "ping");
    }

    #[tokio::test]
    async fn overflow_is_a_protocol_error() {
        let (mut client, server) = tokio::io::duplex(64);
        let mut framer = Framer::<_, Request>::new(server, 16, IDLE);
        client.write_all(&[b'x'; 32]).await.unwrap();
        let error = framer.next().await.unwrap_err();
        assert!(matches!(error, Error::Protocol(_)));
        assert!(error.is_fatal());
    }

    #[tokio::test]
    async fn hang_up_is_closed() {
        let (client, server) = tokio::io::duplex(64);
        let mut framer = Framer::<_, Request>::new(server, 512, IDLE);
        drop(client);
        assert!(matches!(framer.next().await, Err(Error::Closed)));
    }

    #[tokio::test(start_paused = true)]
    async fn silence_times_out() {
        let (_client, server) = tokio::io::duplex(64);
        let mut framer = Framer::<_, Request>::new(server, 512, IDLE);
        let started = Instant::now();
        assert!(matches!(framer.next().await, Err(Error::Timeout)));
        assert!(started.elapsed() >= IDLE);
    }

    #[tokio::test(start_paused = true)]
    async fn partial_line_keeps_the_connection_alive() {
        let (mut client, server) = tokio::io::duplex(64);
        let mut framer = Framer::<_, Request>::new(server, 512, IDLE);
        let writer = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(20)).await;
            client.write_all(br#"{"type":"#).await.unwrap();
            tokio::time::sleep(Duration::from_secs(20)).await;
            client.write_all(b"\"ping\"}\n").await.unwrap();
            client
        });
        assert_eq!(framer.next().await.unwrap().kind(), "ping");
        writer.await.unwrap();
    }

    #[tokio::test]
    async fn streams_until_fatal() {
        let (mut client, server) = tokio::io::duplex(256);
        let framer = Framer::<_, serde_json::Value>::new(server, 512, IDLE);
        client.write_all(b"{\"id\":\"g\"}\n[\n{\"err\":400}\n").await.unwrap();
        drop(client);
        let items = framer.into_stream().collect::<Vec<_>>().await;
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].as_ref().unwrap()["id"], "g");
        assert!(matches!(items[1], Err(Error::Decode(_))));
        assert_eq!(items[2].as_ref().unwrap()["err"], 400);
        assert!(matches!(items[3], Err(Error::Closed)));
    }
}
