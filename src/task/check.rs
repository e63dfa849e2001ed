//! One pass of the tracker over every configured channel.

use chrono::{DateTime, Duration, Local, Utc};
use tracing::{debug, error, info, instrument, warn};

use crate::{
    base::{messages, types::Res},
    runtime::Runtime,
};

/// What happened during one check cycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    /// Channels looked up.
    pub checked: usize,
    /// Channels without a lookup result (no data or a failed lookup).
    pub skipped: usize,
    /// New-video notifications sent.
    pub notified: usize,
}

/// Whether a video counts as new: published within `[now - window, now)`.
///
/// A window reaching past the earliest representable time is open-ended.
pub fn is_recent(published_at: DateTime<Utc>, now: DateTime<Utc>, window: Duration) -> bool {
    let after_start = now.checked_sub_signed(window).is_none_or(|start| published_at >= start);

    after_start && published_at < now
}

/// Run a single check cycle as of `now`.
///
/// The last-seen state is loaded at the start and written back at the end.
/// Every qualifying video is announced and recorded, even if its ID is
/// already the one stored for the channel, so a video that stays inside the
/// window across two cycles is announced twice.
///
/// Only state load/save failures are returned; lookup and notification
/// failures are logged and skipped.
#[instrument(skip(runtime), fields(channels = runtime.channels.len()))]
pub async fn run_check_cycle(runtime: &Runtime, now: DateTime<Utc>) -> Res<CycleReport> {
    let mut last_seen = runtime.store.load().await?;
    let window = runtime.config.recency_window();

    let mut report = CycleReport::default();

    for channel_id in runtime.channels.iter() {
        report.checked += 1;

        let video = match runtime.platform.latest_video(channel_id).await {
            Ok(Some(video)) => video,
            Ok(None) => {
                warn!("No videos found for channel `{}`.", channel_id);
                report.skipped += 1;
                continue;
            }
            Err(err) => {
                error!("Error fetching channel `{}`: {}", channel_id, err);
                report.skipped += 1;
                continue;
            }
        };

        if !is_recent(video.published_at, now, window) {
            debug!("Skipping video `{}` published at {}.", video.title, video.published_at.to_rfc3339());
            continue;
        }

        info!("🎬 New Video: {} - {} (Published at: {})", video.title, video.url, video.published_at.to_rfc3339());

        runtime.notifier.notify_new_video(&video).await;
        last_seen.insert(channel_id.clone(), video.video_id);

        report.notified += 1;
    }

    runtime.store.save(&last_seen).await?;

    let finished_at = Local::now();
    info!("{} {}", messages::CYCLE_FINISHED, finished_at.format(messages::HEARTBEAT_TIME_FORMAT));
    runtime.notifier.notify_status(&messages::cycle_finished_message(&finished_at)).await;

    Ok(report)
}
