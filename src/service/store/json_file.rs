//! Flat JSON file implementation of the state store.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::base::{
    config::Config,
    types::{LastSeenState, Res, Void},
};

use super::{GenericStateStore, StateStore};

// Extra methods on `StateStore` applied by the JSON file implementation.

impl StateStore {
    /// Creates a store backed by the configured state file.
    pub fn json_file(config: &Config) -> Self {
        Self {
            inner: Arc::new(JsonFileStateStore::new(&config.state_file)),
        }
    }
}

/// Stores the mapping as a pretty-printed JSON object.
///
/// Saving overwrites the file in place; a crash mid-write can truncate it.
#[derive(Debug, Clone)]
pub struct JsonFileStateStore {
    path: PathBuf,
}

impl JsonFileStateStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl GenericStateStore for JsonFileStateStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Res<LastSeenState> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("State file not found, starting empty.");
                return Ok(LastSeenState::new());
            }
            Err(err) => return Err(err).with_context(|| format!("Failed to read state file `{}`", self.path.display())),
        };

        let state = serde_json::from_slice(&raw).with_context(|| format!("Malformed state file `{}`", self.path.display()))?;

        Ok(state)
    }

    #[instrument(skip_all, fields(path = %self.path.display(), entries = state.len()))]
    async fn save(&self, state: &LastSeenState) -> Void {
        let json = serde_json::to_string_pretty(state)?;

        tokio::fs::write(&self.path, json).await.with_context(|| format!("Failed to write state file `{}`", self.path.display()))?;

        Ok(())
    }
}
