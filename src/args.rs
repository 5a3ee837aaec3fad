use clap::Parser;
use std::time::Duration;

/// Command-line configuration for the hosting binary.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value_t = format!("0.0.0.0:{}", hnb_core::DEFAULT_PORT))]
    pub bind: String,
    /// Seconds a connection may stay silent before it is dropped.
    #[arg(long, default_value_t = hnb_core::IDLE_TIMEOUT.as_secs())]
    pub idle: u64,
    /// Actions a session queues before senders wait.
    #[arg(long, default_value_t = hnb_core::MAILBOX_CAPACITY)]
    pub mailbox: usize,
    /// Longest accepted request line, in bytes.
    #[arg(long, default_value_t = hnb_core::FRAME_CAPACITY)]
    pub frame: usize,
}

impl From<&Args> for hnb_hosting::HostConfig {
    fn from(args: &Args) -> Self {
        Self {
            idle: Duration::from_secs(args.idle),
            mailbox: args.mailbox,
            frame: args.frame,
        }
    }
}
