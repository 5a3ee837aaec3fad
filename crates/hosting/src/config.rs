use hnb_core::*;
use std::time::Duration;

/// Tunables threaded into the registry and every connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    /// How long a connection may stay silent.
    pub idle: Duration,
    /// Actions a session buffers before senders wait.
    pub mailbox: usize,
    /// Longest request line in bytes, newline included.
    pub frame: usize,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            idle: IDLE_TIMEOUT,
            mailbox: MAILBOX_CAPACITY,
            frame: FRAME_CAPACITY,
        }
    }
}
