//! Library root for `yt-tracker`.
//!
//! yt-tracker watches a fixed set of YouTube channels and relays new uploads
//! to a Telegram chat:
//! - Polls every channel's newest upload on a fixed interval
//! - Announces videos published within the recency window
//! - Remembers the last announced video per channel in a JSON file
//! - Sends a heartbeat after every pass
//!
//! A companion binary resolves channel handles to channel IDs. The
//! architecture is built around extensible traits that allow for different
//! implementations of each service.

pub mod base;
pub mod runtime;
pub mod service;
pub mod task;

use std::path::Path;

use base::{
    config::Config,
    types::{Res, Void},
};
use service::{directory, platform::PlatformClient};
use tracing::info;

/// Public async entry for the tracker binary.
///
/// Sets up the runtime and either runs a single check cycle (`once`) or
/// the scheduled loop until Ctrl-C.
pub async fn start(config: Config, once: bool) -> Void {
    info!("Starting yt-tracker ...");

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config).await?;

    if once {
        runtime.run_once().await?;
        return Ok(());
    }

    // Start the runtime.
    runtime.start().await
}

/// Public async entry for the resolver binary.
///
/// Loads the handle list and returns the channel IDs that could be resolved.
pub async fn resolve(config: Config) -> Res<Vec<String>> {
    let platform = PlatformClient::youtube(&config)?;
    let handles = directory::load_handle_list(Path::new(&config.handles_file)).await;

    Ok(task::resolve::resolve_handles(&platform, &handles).await)
}
