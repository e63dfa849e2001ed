//! Static JSON lists of channels and handles.

use std::path::Path;

use serde::{Deserialize, de::DeserializeOwned};
use tracing::{error, info, instrument};

use crate::base::types::Res;

/// `{"channels": [...]}`
#[derive(Debug, Deserialize)]
struct ChannelDirectory {
    channels: Vec<String>,
}

/// `{"usernames": [...]}`
#[derive(Debug, Deserialize)]
struct HandleList {
    usernames: Vec<String>,
}

/// Load the tracked channel IDs.
///
/// A missing or unreadable file is logged and treated as an empty directory.
#[instrument]
pub async fn load_channel_directory(path: &Path) -> Vec<String> {
    match read_json::<ChannelDirectory>(path).await {
        Ok(directory) => {
            info!("Loaded {} channels.", directory.channels.len());
            directory.channels
        }
        Err(err) => {
            error!("❌ Could not load channel directory: {:#}", err);
            Vec::new()
        }
    }
}

/// Load the channel handles to resolve.
///
/// A missing or unreadable file is logged and treated as an empty list.
#[instrument]
pub async fn load_handle_list(path: &Path) -> Vec<String> {
    match read_json::<HandleList>(path).await {
        Ok(list) => list.usernames,
        Err(err) => {
            error!("❌ Could not load handle list: {:#}", err);
            Vec::new()
        }
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Res<T> {
    let raw = tokio::fs::read(path).await.map_err(|e| anyhow::anyhow!("`{}`: {}", path.display(), e))?;

    Ok(serde_json::from_slice(&raw)?)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("yt-tracker-directory-{}-{}.json", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn channels_are_read_in_order() {
        let path = write_temp("channels", r#"{ "channels": ["UC2", "UC1"] }"#);

        let channels = load_channel_directory(&path).await;
        let _ = std::fs::remove_file(&path);

        assert_eq!(channels, vec!["UC2".to_string(), "UC1".to_string()]);
    }

    #[tokio::test]
    async fn missing_directory_is_empty() {
        let path = std::env::temp_dir().join("yt-tracker-directory-does-not-exist.json");

        assert!(load_channel_directory(&path).await.is_empty());
    }

    #[tokio::test]
    async fn invalid_directory_is_empty() {
        let path = write_temp("invalid", r#"{ "channels": "UC1" }"#);

        let channels = load_channel_directory(&path).await;
        let _ = std::fs::remove_file(&path);

        assert!(channels.is_empty());
    }

    #[tokio::test]
    async fn handles_are_read_from_usernames() {
        let path = write_temp("handles", r#"{ "usernames": ["alpha", "beta"] }"#);

        let handles = load_handle_list(&path).await;
        let _ = std::fs::remove_file(&path);

        assert_eq!(handles, vec!["alpha".to_string(), "beta".to_string()]);
    }
}
