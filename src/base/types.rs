use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

/// Mapping from channel ID to the ID of the last video we notified about.
pub type LastSeenState = BTreeMap<String, String>;

/// The latest upload of a channel, as returned by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub title: String,
    pub video_id: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
}

/// Outcome of handing a message to a notifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The chat service accepted the message.
    Sent,
    /// Nothing was sent, e.g. because credentials are missing.
    Skipped,
    /// Sending was attempted and failed.
    Failed,
}

/// Failure of a platform lookup.
///
/// "No data" is not an error; lookups return `Ok(None)` for that.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Connection failures, timeouts, server errors, and throttling.
    #[error("transient lookup failure: {0}")]
    Transient(String),
    /// Rejected requests and bodies we could not make sense of.
    #[error("permanent lookup failure: {0}")]
    Permanent(String),
}

impl LookupError {
    pub fn is_transient(&self) -> bool {
        matches!(self, LookupError::Transient(_))
    }
}

pub type LookupResult<T> = Result<Option<T>, LookupError>;
