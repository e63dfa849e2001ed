//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc, time::Duration};

use serde::Deserialize;

use super::types::Res;

/// Default YouTube Data API base URL.
fn default_youtube_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

/// Default prefix for links to a video.
fn default_watch_url_base() -> String {
    "https://www.youtube.com/watch?v=".to_string()
}

/// Default Telegram Bot API base URL.
fn default_telegram_api_url() -> String {
    "https://api.telegram.org".to_string()
}

fn default_channels_file() -> String {
    "channels.json".to_string()
}

fn default_handles_file() -> String {
    "idYoutube.json".to_string()
}

fn default_state_file() -> String {
    "last_videos.json".to_string()
}

/// Default time between two check cycles, in seconds.
fn default_check_interval_secs() -> u64 {
    600
}

/// Default width of the recency window, in seconds.
fn default_recency_window_secs() -> u64 {
    600
}

/// Widest accepted recency window: one year.
pub const MAX_RECENCY_WINDOW_SECS: u64 = 365 * 24 * 60 * 60;

/// Configuration for the tracker.
#[derive(Debug, Clone)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConfigInner {
    /// YouTube Data API key (`YOUTUBE_API_KEY`).
    #[serde(default)]
    pub youtube_api_key: String,
    /// YouTube Data API base URL (`YOUTUBE_URL`).
    #[serde(default = "default_youtube_url")]
    pub youtube_url: String,
    /// Prefix that a video ID is appended to when building its link (`WATCH_URL_BASE`).
    #[serde(default = "default_watch_url_base")]
    pub watch_url_base: String,
    /// Telegram bot token (`TELEGRAM_BOT_TOKEN`).
    #[serde(default)]
    pub telegram_bot_token: Option<String>,
    /// Telegram chat that receives the notifications (`TELEGRAM_CHAT_ID`).
    #[serde(default)]
    pub telegram_chat_id: Option<String>,
    /// Telegram Bot API base URL (`TELEGRAM_API_URL`).
    #[serde(default = "default_telegram_api_url")]
    pub telegram_api_url: String,
    /// JSON file listing the tracked channel IDs (`CHANNELS_FILE`).
    #[serde(default = "default_channels_file")]
    pub channels_file: String,
    /// JSON file listing the handles for `yt-resolve` (`HANDLES_FILE`).
    #[serde(default = "default_handles_file")]
    pub handles_file: String,
    /// JSON file holding the last notified video per channel (`STATE_FILE`).
    #[serde(default = "default_state_file")]
    pub state_file: String,
    /// Seconds between two check cycles (`CHECK_INTERVAL_SECS`).
    #[serde(default = "default_check_interval_secs")]
    pub check_interval_secs: u64,
    /// Only videos published within this many seconds before a cycle are announced (`RECENCY_WINDOW_SECS`).
    #[serde(default = "default_recency_window_secs")]
    pub recency_window_secs: u64,
    /// Optional timeout applied to every outbound request (`REQUEST_TIMEOUT_SECS`).
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ConfigInner {
    fn default() -> Self {
        Self {
            youtube_api_key: String::new(),
            youtube_url: default_youtube_url(),
            watch_url_base: default_watch_url_base(),
            telegram_bot_token: None,
            telegram_chat_id: None,
            telegram_api_url: default_telegram_api_url(),
            channels_file: default_channels_file(),
            handles_file: default_handles_file(),
            state_file: default_state_file(),
            check_interval_secs: default_check_interval_secs(),
            recency_window_secs: default_recency_window_secs(),
            request_timeout_secs: None,
        }
    }
}

impl ConfigInner {
    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_secs)
    }

    pub fn recency_window(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.recency_window_secs as i64)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Returns the bot token and chat ID, if both are set and non-empty.
    pub fn telegram_credentials(&self) -> Option<(&str, &str)> {
        let token = self.telegram_bot_token.as_deref().filter(|t| !t.is_empty())?;
        let chat_id = self.telegram_chat_id.as_deref().filter(|c| !c.is_empty())?;

        Some((token, chat_id))
    }
}

impl Config {
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder();

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        cfg = cfg.add_source(config::Environment::default().prefix("YT_TRACKER").prefix_separator("_"));

        Self::new(cfg.build()?.try_deserialize()?)
    }

    /// Wraps and validates an already built configuration.
    pub fn new(inner: ConfigInner) -> Res<Self> {
        if inner.check_interval_secs == 0 {
            return Err(anyhow::anyhow!("Check interval must be greater than 0 seconds."));
        }

        if inner.recency_window_secs == 0 {
            return Err(anyhow::anyhow!("Recency window must be greater than 0 seconds."));
        }

        if inner.recency_window_secs > MAX_RECENCY_WINDOW_SECS {
            return Err(anyhow::anyhow!("Recency window must be at most {} seconds.", MAX_RECENCY_WINDOW_SECS));
        }

        Ok(Self { inner: Arc::new(inner) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_ten_minute_cadence() {
        let config = Config::new(ConfigInner::default()).unwrap();

        assert_eq!(config.check_interval(), Duration::from_secs(600));
        assert_eq!(config.recency_window(), chrono::Duration::minutes(10));
        assert_eq!(config.state_file, "last_videos.json");
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn zero_interval_is_rejected() {
        let inner = ConfigInner { check_interval_secs: 0, ..Default::default() };

        assert!(Config::new(inner).is_err());
    }

    #[test]
    fn zero_window_is_rejected() {
        let inner = ConfigInner { recency_window_secs: 0, ..Default::default() };

        assert!(Config::new(inner).is_err());
    }

    #[test]
    fn huge_window_is_rejected() {
        let inner = ConfigInner { recency_window_secs: 10_000_000_000_000, ..Default::default() };
        assert!(Config::new(inner).is_err());

        let inner = ConfigInner { recency_window_secs: MAX_RECENCY_WINDOW_SECS + 1, ..Default::default() };
        assert!(Config::new(inner).is_err());

        let inner = ConfigInner { recency_window_secs: MAX_RECENCY_WINDOW_SECS, ..Default::default() };
        assert!(Config::new(inner).is_ok());
    }

    #[test]
    fn credentials_require_both_values() {
        let inner = ConfigInner {
            telegram_bot_token: Some("123:abc".to_string()),
            ..Default::default()
        };
        assert!(inner.telegram_credentials().is_none());

        let inner = ConfigInner {
            telegram_bot_token: Some("123:abc".to_string()),
            telegram_chat_id: Some(String::new()),
            ..Default::default()
        };
        assert!(inner.telegram_credentials().is_none());

        let inner = ConfigInner {
            telegram_bot_token: Some("123:abc".to_string()),
            telegram_chat_id: Some("-10042".to_string()),
            ..Default::default()
        };
        assert_eq!(inner.telegram_credentials(), Some(("123:abc", "-10042")));
    }

    #[test]
    fn toml_file_overrides_defaults() {
        let path = std::env::temp_dir().join(format!("yt-tracker-config-{}.toml", std::process::id()));
        std::fs::write(&path, "youtube_api_key = \"key\"\ncheck_interval_secs = 60\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(config.youtube_api_key, "key");
        assert_eq!(config.check_interval_secs, 60);
        assert_eq!(config.youtube_url, "https://www.googleapis.com/youtube/v3");
    }
}
