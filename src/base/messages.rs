//! Chat message templates.

use chrono::{DateTime, TimeZone};

use super::types::VideoRecord;

/// Header line of the status heartbeat sent after every check cycle.
pub const CYCLE_FINISHED: &str = "✅ YouTube tracker finished checking.";

/// Format used for the heartbeat timestamp.
pub const HEARTBEAT_TIME_FORMAT: &str = "%d-%m-%Y %I:%M:%S";

/// Markdown alert for a newly published video.
pub fn new_video_message(video: &VideoRecord) -> String {
    format!("🎬 *New Video Uploaded!*\n📌 *{}*\n🔗 [Watch Now]({})", video.title, video.url)
}

/// Heartbeat announcing the end of a check cycle.
pub fn cycle_finished_message<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("{CYCLE_FINISHED}\n------------------------------ {}", at.format(HEARTBEAT_TIME_FORMAT))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn new_video_message_contains_title_and_link() {
        let video = VideoRecord {
            title: "Launch day".to_string(),
            video_id: "abc123".to_string(),
            url: "https://www.youtube.com/watch?v=abc123".to_string(),
            published_at: Utc::now(),
        };

        let message = new_video_message(&video);

        assert!(message.contains("*Launch day*"));
        assert!(message.contains("[Watch Now](https://www.youtube.com/watch?v=abc123)"));
    }

    #[test]
    fn cycle_finished_message_uses_twelve_hour_clock() {
        let at = Utc.with_ymd_and_hms(2025, 3, 7, 15, 4, 5).unwrap();

        let message = cycle_finished_message(&at);

        assert!(message.starts_with(CYCLE_FINISHED));
        assert!(message.ends_with("07-03-2025 03:04:05"));
    }
}
