//! Hosting Server Binary
//!
//! Accepts TCP connections and hosts hanabi sessions over
//! newline-delimited JSON.
//!
//! Options: --bind (or BIND_ADDR), --idle, --mailbox, --frame

use clap::Parser;
use hanabi::Args;
use hanabi::hosting;
use hanabi::kys;
use hanabi::log;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    kys();
    let args = Args::parse();
    let config = hosting::HostConfig::from(&args);
    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    log::info!("listening on {}", listener.local_addr()?);
    let registry = Arc::new(hosting::Registry::new(config));
    hosting::Server::new(registry).serve(listener).await
}
