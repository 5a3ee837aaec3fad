//! Core identifiers, type aliases, and constants for the hanabi server.
//!
//! This crate provides the foundational types and tunable parameters shared
//! by every other crate in the workspace.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Clue and life token counts.
pub type Tokens = u8;
/// Visible deck counter. Goes negative once the deck is exhausted.
pub type Remaining = i16;
/// Stable index of a card slot within a player's hand.
pub type Slot = usize;

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Opaque string identifier with a compile-time marker for what it names.
///
/// Clients pick their own session and player names, so the inner value is an
/// arbitrary string rather than a parsed UUID. Server-assigned identifiers are
/// UUID v7 strings.
pub struct ID<T> {
    inner: String,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    /// Fresh server-assigned identifier.
    pub fn random() -> Self {
        Self::from(uuid::Uuid::now_v7().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.inner
    }
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<T> From<String> for ID<T> {
    fn from(inner: String) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}
impl<T> From<&str> for ID<T> {
    fn from(inner: &str) -> Self {
        Self::from(inner.to_string())
    }
}
impl<T> From<ID<T>> for String {
    fn from(id: ID<T>) -> Self {
        id.inner
    }
}

impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        Self::from(self.inner.clone())
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl<T> serde::Serialize for ID<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.inner)
    }
}
impl<'de, T> serde::Deserialize<'de> for ID<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::from)
    }
}

// ============================================================================
// GAME RULES
// ============================================================================
/// Clue tokens available at the start of a game, and the ceiling thereafter.
pub const MAX_CLUES: Tokens = 8;
/// Life tokens available at the start of a game.
pub const MAX_LIVES: Tokens = 3;
/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 2;
/// Most players (and attached connections) a session admits.
pub const MAX_PLAYERS: usize = 5;
/// Hand size for tables of up to `LARGE_TABLE` players.
pub const SMALL_TABLE_HAND: usize = 5;
/// Hand size for tables of more than `LARGE_TABLE` players.
pub const LARGE_TABLE_HAND: usize = 4;
/// Player count above which hands shrink.
pub const LARGE_TABLE: usize = 3;

// ============================================================================
// NETWORKING
// ============================================================================
/// Idle window before a silent connection is dropped.
pub const IDLE_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);
/// Inbound actions a session buffers before senders block.
pub const MAILBOX_CAPACITY: usize = 5;
/// Longest request line (in bytes) a connection may send.
pub const FRAME_CAPACITY: usize = 512;
/// Listen port when none is configured.
pub const DEFAULT_PORT: u16 = 579;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate termination.
/// Sessions are not persisted, so there is nothing to flush.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}
