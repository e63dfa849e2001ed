//! Telegram Bot API implementation of the notifier.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, error, instrument, warn};

use crate::base::{
    config::Config,
    types::{Delivery, Res},
};

use super::{GenericNotifier, NotifierClient};

// Extra methods on `NotifierClient` applied by the Telegram implementation.

impl NotifierClient {
    /// Creates a new Telegram notifier.
    pub fn telegram(config: &Config) -> Res<Self> {
        let client = TelegramNotifier::new(config)?;
        Ok(Self { inner: Arc::new(client) })
    }
}

// Structs.

/// Body of a `sendMessage` call.
#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

#[derive(Clone)]
struct Credentials {
    bot_token: String,
    chat_id: String,
}

/// Telegram notifier implementation.
#[derive(Clone)]
pub struct TelegramNotifier {
    client: reqwest::Client,
    api_url: String,
    credentials: Option<Credentials>,
}

impl TelegramNotifier {
    #[instrument(name = "TelegramNotifier::new", skip_all)]
    pub fn new(config: &Config) -> Res<Self> {
        let credentials = config.telegram_credentials().map(|(bot_token, chat_id)| Credentials {
            bot_token: bot_token.to_string(),
            chat_id: chat_id.to_string(),
        });

        if credentials.is_none() {
            warn!("Telegram credentials are not set; notifications are disabled.");
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_url: config.telegram_api_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }
}

#[async_trait]
impl GenericNotifier for TelegramNotifier {
    #[instrument(skip_all)]
    async fn send_message(&self, text: &str) -> Res<Delivery> {
        let Some(credentials) = &self.credentials else {
            error!("Telegram credentials not set; dropping message.");
            return Ok(Delivery::Skipped);
        };

        let url = format!("{}/bot{}/sendMessage", self.api_url, credentials.bot_token);
        let request = SendMessageRequest {
            chat_id: &credentials.chat_id,
            text,
            parse_mode: "Markdown",
        };

        // The URL embeds the bot token, so keep it out of the error.
        let response = self.client.post(&url).json(&request).send().await.map_err(|e| anyhow::anyhow!("Failed to send message: {}", e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Telegram API returned {}: {}", status, body));
        }

        debug!("Telegram message sent.");

        Ok(Delivery::Sent)
    }
}
