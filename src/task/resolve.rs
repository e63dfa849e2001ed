//! Resolve channel handles to channel IDs.

use tracing::{error, instrument, warn};

use crate::service::platform::PlatformClient;

/// Resolve each handle, in order, to its channel ID.
///
/// Handles without a match, and failed lookups, are left out of the result.
#[instrument(skip_all, fields(handles = handles.len()))]
pub async fn resolve_handles(platform: &PlatformClient, handles: &[String]) -> Vec<String> {
    let mut channel_ids = Vec::with_capacity(handles.len());

    for handle in handles {
        match platform.channel_id_for_handle(handle).await {
            Ok(Some(channel_id)) => channel_ids.push(channel_id),
            Ok(None) => warn!("No data found for @{}", handle),
            Err(err) => error!("Error fetching channel @{}: {}", handle, err),
        }
    }

    channel_ids
}
