pub mod youtube;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::base::types::{LookupResult, VideoRecord};

// Traits.

/// Generic video platform trait that clients must implement.
///
/// Each call is a single request against the platform. "Nothing found" is
/// reported as `Ok(None)`; an `Err` carries whether the failure looked
/// transient or permanent.
#[async_trait]
pub trait GenericPlatformClient: Send + Sync + 'static {
    /// Resolve the ID of the playlist that holds a channel's uploads.
    async fn uploads_playlist_id(&self, channel_id: &str) -> LookupResult<String>;

    /// Fetch the most recent item of a playlist.
    async fn latest_playlist_item(&self, playlist_id: &str) -> LookupResult<VideoRecord>;

    /// Resolve a channel handle to its channel ID.
    async fn channel_id_for_handle(&self, handle: &str) -> LookupResult<String>;
}

// Structs.

/// Video platform client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct PlatformClient {
    inner: Arc<dyn GenericPlatformClient>,
}

impl Deref for PlatformClient {
    type Target = dyn GenericPlatformClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl PlatformClient {
    pub fn new(inner: Arc<dyn GenericPlatformClient>) -> Self {
        Self { inner }
    }

    /// Get the latest upload of a channel.
    ///
    /// Takes two sequential calls: one to find the uploads playlist, one to
    /// read its newest item. Either coming back empty yields `Ok(None)`.
    #[instrument(skip(self))]
    pub async fn latest_video(&self, channel_id: &str) -> LookupResult<VideoRecord> {
        let Some(playlist_id) = self.uploads_playlist_id(channel_id).await? else {
            debug!("Channel `{}` has no uploads playlist.", channel_id);
            return Ok(None);
        };

        self.latest_playlist_item(&playlist_id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::base::types::LookupError;

    struct FixedPlatform {
        playlist: LookupResult<String>,
        item: LookupResult<VideoRecord>,
    }

    #[async_trait]
    impl GenericPlatformClient for FixedPlatform {
        async fn uploads_playlist_id(&self, _channel_id: &str) -> LookupResult<String> {
            self.playlist.clone()
        }

        async fn latest_playlist_item(&self, _playlist_id: &str) -> LookupResult<VideoRecord> {
            self.item.clone()
        }

        async fn channel_id_for_handle(&self, _handle: &str) -> LookupResult<String> {
            Ok(None)
        }
    }

    fn video() -> VideoRecord {
        VideoRecord {
            title: "Title".to_string(),
            video_id: "vid".to_string(),
            url: "https://www.youtube.com/watch?v=vid".to_string(),
            published_at: Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap(),
        }
    }

    fn client(playlist: LookupResult<String>, item: LookupResult<VideoRecord>) -> PlatformClient {
        PlatformClient::new(Arc::new(FixedPlatform { playlist, item }))
    }

    #[tokio::test]
    async fn latest_video_follows_uploads_playlist() {
        let client = client(Ok(Some("UU1".to_string())), Ok(Some(video())));

        assert_eq!(client.latest_video("UC1").await, Ok(Some(video())));
    }

    #[tokio::test]
    async fn missing_playlist_is_no_data() {
        let client = client(Ok(None), Err(LookupError::Permanent("unreachable".to_string())));

        assert_eq!(client.latest_video("UC1").await, Ok(None));
    }

    #[tokio::test]
    async fn playlist_failure_is_propagated() {
        let client = client(Err(LookupError::Transient("down".to_string())), Ok(Some(video())));

        let err = client.latest_video("UC1").await.unwrap_err();
        assert!(err.is_transient());
    }
}
