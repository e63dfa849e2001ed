//! YouTube Data API implementation of the platform client.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{instrument, trace, warn};

use crate::base::{
    config::Config,
    types::{LookupError, LookupResult, Res, VideoRecord},
};

use super::{GenericPlatformClient, PlatformClient};

// Extra methods on `PlatformClient` applied by the YouTube implementation.

impl PlatformClient {
    /// Creates a new YouTube platform client.
    pub fn youtube(config: &Config) -> Res<Self> {
        let client = YouTubePlatformClient::new(config)?;
        Ok(Self { inner: Arc::new(client) })
    }
}

// Wire types.

#[derive(Debug, Deserialize)]
struct ChannelListResponse {
    #[serde(default)]
    items: Vec<ChannelResource>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelResource {
    id: String,
    content_details: Option<ChannelContentDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelContentDetails {
    related_playlists: RelatedPlaylists,
}

#[derive(Debug, Deserialize)]
struct RelatedPlaylists {
    uploads: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlaylistItemListResponse {
    #[serde(default)]
    items: Vec<PlaylistItem>,
}

#[derive(Debug, Deserialize)]
struct PlaylistItem {
    snippet: PlaylistItemSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItemSnippet {
    title: String,
    published_at: DateTime<Utc>,
    resource_id: ResourceId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceId {
    video_id: String,
}

// Structs.

/// YouTube Data API v3 client.
#[derive(Clone)]
pub struct YouTubePlatformClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    watch_url_base: String,
}

impl YouTubePlatformClient {
    #[instrument(name = "YouTubePlatformClient::new", skip_all)]
    pub fn new(config: &Config) -> Res<Self> {
        if config.youtube_api_key.is_empty() {
            warn!("YouTube API key is not set; lookups will be rejected by the API.");
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.youtube_url.trim_end_matches('/').to_string(),
            api_key: config.youtube_api_key.clone(),
            watch_url_base: config.watch_url_base.clone(),
        })
    }

    /// Issue a GET against an API resource and decode the JSON body.
    async fn get<T>(&self, resource: &str, query: &[(&str, &str)]) -> Result<T, LookupError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, resource);

        let response = self
            .client
            .get(&url)
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(classify)?;

        trace!("GET {} -> {}", resource, response.status());

        response.json::<T>().await.map_err(classify)
    }

    fn to_record(&self, item: PlaylistItem) -> VideoRecord {
        let snippet = item.snippet;

        VideoRecord {
            url: format!("{}{}", self.watch_url_base, snippet.resource_id.video_id),
            title: snippet.title,
            video_id: snippet.resource_id.video_id,
            published_at: snippet.published_at,
        }
    }
}

#[async_trait]
impl GenericPlatformClient for YouTubePlatformClient {
    #[instrument(skip(self))]
    async fn uploads_playlist_id(&self, channel_id: &str) -> LookupResult<String> {
        let response: ChannelListResponse = self.get("channels", &[("part", "contentDetails"), ("id", channel_id)]).await?;

        let Some(channel) = response.items.into_iter().next() else {
            return Ok(None);
        };

        channel
            .content_details
            .and_then(|d| d.related_playlists.uploads)
            .map(Some)
            .ok_or_else(|| LookupError::Permanent(format!("channel `{}` has no uploads playlist", channel.id)))
    }

    #[instrument(skip(self))]
    async fn latest_playlist_item(&self, playlist_id: &str) -> LookupResult<VideoRecord> {
        let response: PlaylistItemListResponse = self.get("playlistItems", &[("part", "snippet"), ("playlistId", playlist_id), ("maxResults", "1")]).await?;

        Ok(response.items.into_iter().next().map(|item| self.to_record(item)))
    }

    #[instrument(skip(self))]
    async fn channel_id_for_handle(&self, handle: &str) -> LookupResult<String> {
        let response: ChannelListResponse = self.get("channels", &[("part", "id"), ("forHandle", handle)]).await?;

        Ok(response.items.into_iter().next().map(|c| c.id))
    }
}

// Helpers.

/// Sort a `reqwest` failure into transient or permanent.
///
/// The URL is stripped from the message since it carries the API key.
fn classify(err: reqwest::Error) -> LookupError {
    let transient = match err.status() {
        Some(status) => status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS,
        None => !(err.is_decode() || err.is_builder()),
    };

    let message = err.without_url().to_string();

    if transient { LookupError::Transient(message) } else { LookupError::Permanent(message) }
}
