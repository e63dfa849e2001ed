pub mod telegram;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;
use tracing::{error, info, instrument};

use crate::base::{
    messages,
    types::{Delivery, Res, VideoRecord},
};

// Traits.

/// Generic notification trait that chat clients must implement.
///
/// Implementations that are missing their credentials log the problem and
/// return `Ok(Delivery::Skipped)` without sending anything.
#[async_trait]
pub trait GenericNotifier: Send + Sync + 'static {
    /// Post a Markdown message to the configured chat.
    async fn send_message(&self, text: &str) -> Res<Delivery>;
}

// Structs.

/// Notification client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
/// Its high-level operations never fail: send errors are logged, dropped,
/// and reported as `Delivery::Failed`.
#[derive(Clone)]
pub struct NotifierClient {
    inner: Arc<dyn GenericNotifier>,
}

impl Deref for NotifierClient {
    type Target = dyn GenericNotifier;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl NotifierClient {
    pub fn new(inner: Arc<dyn GenericNotifier>) -> Self {
        Self { inner }
    }

    /// Announce a newly published video.
    #[instrument(skip_all, fields(video_id = %video.video_id))]
    pub async fn notify_new_video(&self, video: &VideoRecord) -> Delivery {
        match self.send_message(&messages::new_video_message(video)).await {
            Ok(Delivery::Sent) => {
                info!("Notification sent: {}", video.title);
                Delivery::Sent
            }
            Ok(outcome) => outcome,
            Err(err) => {
                error!("Error sending new video notification: {}", err);
                Delivery::Failed
            }
        }
    }

    /// Send a plain status message.
    #[instrument(skip(self))]
    pub async fn notify_status(&self, message: &str) -> Delivery {
        self.send_message(message).await.unwrap_or_else(|err| {
            error!("Error sending status message: {}", err);
            Delivery::Failed
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::Utc;

    use super::*;

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<String>>,
        fail: bool,
        skip: bool,
    }

    #[async_trait]
    impl GenericNotifier for RecordingNotifier {
        async fn send_message(&self, text: &str) -> Res<Delivery> {
            self.sent.lock().unwrap().push(text.to_string());

            match (self.fail, self.skip) {
                (true, _) => Err(anyhow::anyhow!("chat is down")),
                (_, true) => Ok(Delivery::Skipped),
                _ => Ok(Delivery::Sent),
            }
        }
    }

    fn video() -> VideoRecord {
        VideoRecord {
            title: "Release".to_string(),
            video_id: "v1".to_string(),
            url: "https://www.youtube.com/watch?v=v1".to_string(),
            published_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn new_video_is_formatted() {
        let recorder = Arc::new(RecordingNotifier::default());
        let client = NotifierClient::new(recorder.clone());

        assert_eq!(client.notify_new_video(&video()).await, Delivery::Sent);

        let sent = recorder.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("*Release*"));
    }

    #[tokio::test]
    async fn send_errors_are_swallowed() {
        let recorder = Arc::new(RecordingNotifier { fail: true, ..Default::default() });
        let client = NotifierClient::new(recorder.clone());

        assert_eq!(client.notify_new_video(&video()).await, Delivery::Failed);
        assert_eq!(client.notify_status("done").await, Delivery::Failed);

        assert_eq!(recorder.sent.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn skipped_sends_are_not_reported_as_sent() {
        let recorder = Arc::new(RecordingNotifier { skip: true, ..Default::default() });
        let client = NotifierClient::new(recorder.clone());

        assert_eq!(client.notify_new_video(&video()).await, Delivery::Skipped);
        assert_eq!(client.notify_status("done").await, Delivery::Skipped);
    }
}
