use super::*;
use hnb_cards::Deck;
use hnb_gameplay::*;
use hnb_gameroom::*;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Directory of live sessions.
///
/// The only state shared between connection tasks. Lookups take the read
/// lock and run concurrently; `register` and `deregister` are the only
/// writers, and each check-and-modify happens under a single write lock.
pub struct Registry {
    config: HostConfig,
    dealer: fn() -> Deck,
    rooms: RwLock<HashMap<GameID, RoomHandle>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(HostConfig::default())
    }
}

impl Registry {
    pub fn new(config: HostConfig) -> Self {
        Self::with_dealer(config, Deck::new)
    }
    /// Uses `dealer` for every new session's deck instead of a fresh shuffle.
    pub fn with_dealer(config: HostConfig, dealer: fn() -> Deck) -> Self {
        Self {
            config,
            dealer,
            rooms: RwLock::new(HashMap::new()),
        }
    }
    pub fn config(&self) -> HostConfig {
        self.config
    }
}

impl Registry {
    /// Opens a session with the creator already seated and starts it.
    /// Without an id, the session gets a fresh one.
    pub async fn create(
        self: &Arc<Self>,
        game: Option<GameID>,
        player: PlayerID,
        link: Link,
    ) -> Result<RoomHandle, Error> {
        let id = game.unwrap_or_else(GameID::random);
        let (mut room, handle) = Room::new(id, (self.dealer)(), self.config.mailbox);
        room.seat(player, link)?;
        self.register(room, handle.clone()).await?;
        Ok(handle)
    }

    /// Publishes a room under its id and spawns it, plus a supervisor that
    /// removes the entry once the room stops. On an id collision the room
    /// is discarded and its connections are closed.
    pub async fn register(self: &Arc<Self>, room: Room, handle: RoomHandle) -> Result<(), Error> {
        let id = room.id().clone();
        {
            let mut rooms = self.rooms.write().await;
            if rooms.contains_key(&id) {
                drop(rooms);
                log::info!("[registry] game {} already exists", id);
                room.close();
                return Err(Error::Conflict(String::from(
                    "cannot create game. game already exists",
                )));
            }
            rooms.insert(id.clone(), handle);
        }
        log::info!("[registry] opened game {}", id);
        let task = tokio::spawn(room.run());
        let registry = self.clone();
        tokio::spawn(async move {
            match task.await {
                Ok(state) => log::debug!("[registry] game {} ended at score {}", id, state.score()),
                Err(e) => log::warn!("[registry] game {} aborted: {}", id, e),
            }
            registry.deregister(&id).await;
        });
        Ok(())
    }

    /// Attaches a player's connection to an existing session.
    pub async fn join(&self, game: &GameID, player: PlayerID, link: Link) -> Result<RoomHandle, Error> {
        let handle = self
            .get(game)
            .await
            .ok_or_else(|| Error::NotFound(String::from("cannot join game. game does not exist")))?;
        handle.attach(player, link).await?;
        Ok(handle)
    }

    pub async fn get(&self, id: &GameID) -> Option<RoomHandle> {
        self.rooms.read().await.get(id).cloned()
    }

    pub async fn deregister(&self, id: &GameID) -> Option<RoomHandle> {
        let removed = self.rooms.write().await.remove(id);
        if removed.is_some() {
            log::info!("[registry] closed game {}", id);
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.rooms.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rooms.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hnb_cards::Card;
    use tokio::sync::mpsc::unbounded_channel;

    fn registry() -> Arc<Registry> {
        Arc::new(Registry::with_dealer(HostConfig::default(), || {
            Deck::from(Card::parse(&"W3 ".repeat(20)).unwrap_or_default())
        }))
    }
    fn id(s: &str) -> PlayerID {
        PlayerID::from(s)
    }

    #[tokio::test]
    async fn create_then_join() {
        let registry = registry();
        let (tx, _a) = unbounded_channel();
        let handle = registry
            .create(Some(GameID::from("g")), id("a"), tx)
            .await
            .unwrap();
        assert_eq!(handle.id(), &GameID::from("g"));
        assert_eq!(registry.len().await, 1);
        let (tx, _b) = unbounded_channel();
        let joined = registry.join(&GameID::from("g"), id("b"), tx).await.unwrap();
        assert_eq!(joined.id(), handle.id());
        assert_eq!(joined.snapshot().players().len(), 2);
    }

    #[tokio::test]
    async fn create_without_id_assigns_one() {
        let registry = registry();
        let (tx, _rx) = unbounded_channel();
        let handle = registry.create(None, id("a"), tx).await.unwrap();
        assert!(!handle.id().is_empty());
        assert!(registry.get(handle.id()).await.is_some());
    }

    #[tokio::test]
    async fn duplicate_create_is_rejected_and_closed() {
        let registry = registry();
        let (tx, _a) = unbounded_channel();
        registry
            .create(Some(GameID::from("g")), id("a"), tx)
            .await
            .unwrap();
        let (tx, mut b) = unbounded_channel();
        let error = registry
            .create(Some(GameID::from("g")), id("b"), tx)
            .await
            .unwrap_err();
        assert_eq!(error.status(), 409);
        assert!(matches!(b.recv().await, Some(Event::Close)));
        assert_eq!(registry.len().await, 1);
        let first = registry.get(&GameID::from("g")).await.unwrap();
        assert!(first.snapshot().has_player(&id("a")));
        assert!(!first.snapshot().has_player(&id("b")));
    }

    #[tokio::test]
    async fn concurrent_creates_register_exactly_once() {
        let registry = registry();
        let mut tasks = Vec::new();
        let mut receivers = Vec::new();
        for p in ["a", "b", "c", "d", "e", "f", "g", "h"] {
            let (tx, rx) = unbounded_channel();
            receivers.push(rx);
            let registry = registry.clone();
            tasks.push(tokio::spawn(async move {
                registry.create(Some(GameID::from("same")), id(p), tx).await.is_ok()
            }));
        }
        let mut created = 0;
        for task in tasks {
            if task.await.unwrap() {
                created += 1;
            }
        }
        assert_eq!(created, 1);
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn join_missing_game_is_not_found() {
        let registry = registry();
        let (tx, _rx) = unbounded_channel();
        let error = registry.join(&GameID::from("nope"), id("a"), tx).await.unwrap_err();
        assert_eq!(error.status(), 404);
    }

    #[tokio::test]
    async fn join_full_game_is_refused() {
        let registry = registry();
        let (tx, _a) = unbounded_channel();
        registry.create(Some(GameID::from("g")), id("a"), tx).await.unwrap();
        let mut links = Vec::new();
        for p in ["b", "c", "d", "e"] {
            let (tx, rx) = unbounded_channel();
            links.push(rx);
            registry.join(&GameID::from("g"), id(p), tx).await.unwrap();
        }
        let (tx, _f) = unbounded_channel();
        let error = registry.join(&GameID::from("g"), id("f"), tx).await.unwrap_err();
        assert_eq!(error.status(), 412);
        let handle = registry.get(&GameID::from("g")).await.unwrap();
        assert_eq!(handle.snapshot().players().len(), 5);
    }

    #[tokio::test]
    async fn finished_games_are_deregistered() {
        let registry = registry();
        let (tx, mut a) = unbounded_channel();
        let handle = registry.create(Some(GameID::from("g")), id("a"), tx).await.unwrap();
        let (tx, _b) = unbounded_channel();
        registry.join(&GameID::from("g"), id("b"), tx).await.unwrap();
        handle.send(Action::Start { player: id("a") }).await.unwrap();
        for p in ["a", "b", "a"] {
            handle
                .send(Action::Play {
                    player: id(p),
                    slot: 0,
                })
                .await
                .unwrap();
        }
        while a.recv().await.is_some() {}
        for _ in 0..100 {
            if registry.is_empty().await {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(registry.is_empty().await);
    }
}
