//! Runtime services and shared state for the tracker.

use std::{future::Future, path::Path, sync::Arc};

use chrono::Utc;
use tracing::{error, info, instrument};

use crate::{
    base::{
        config::Config,
        types::{Res, Void},
    },
    service::{directory, notify::NotifierClient, platform::PlatformClient, store::StateStore},
    task::{
        check::{self, CycleReport},
        schedule::{IntervalTicker, Ticker},
    },
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the configuration, the service clients, and the
/// channel directory. It is designed to be trivially cloneable, allowing it
/// to be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The video platform client instance.
    pub platform: PlatformClient,
    /// The notification client instance.
    pub notifier: NotifierClient,
    /// The last-seen state store.
    pub store: StateStore,
    /// The channels to check, loaded once at startup.
    pub channels: Arc<Vec<String>>,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub async fn new(config: Config) -> Res<Self> {
        // Initialize the platform client.
        let platform = PlatformClient::youtube(&config)?;

        // Initialize the notifier.
        let notifier = NotifierClient::telegram(&config)?;

        // Initialize the state store.
        let store = StateStore::json_file(&config);

        // Load the channel directory.
        let channels = Arc::new(directory::load_channel_directory(Path::new(&config.channels_file)).await);

        Ok(Self {
            config,
            platform,
            notifier,
            store,
            channels,
        })
    }

    /// Run check cycles on the configured interval until Ctrl-C.
    pub async fn start(&self) -> Void {
        let mut ticker = IntervalTicker::new(self.config.check_interval());
        self.run_until(&mut ticker, tokio::signal::ctrl_c()).await
    }

    /// Run check cycles until the ticker stops or `shutdown` completes.
    ///
    /// `shutdown` is polled for the whole run, including while a cycle is in
    /// flight; a cycle interrupted this way is abandoned where it stands.
    pub async fn run_until<T, F>(&self, ticker: &mut T, shutdown: F) -> Void
    where
        T: Ticker,
        F: Future,
    {
        tokio::select! {
            result = self.run(ticker) => result,
            _ = shutdown => {
                info!("Received shutdown signal, stopping ...");
                Ok(())
            }
        }
    }

    /// Run one check cycle per tick until the ticker stops.
    ///
    /// A failed cycle is logged; the next tick starts a fresh one.
    pub async fn run<T>(&self, ticker: &mut T) -> Void
    where
        T: Ticker,
    {
        info!("🚀 YouTube Tracker Started...");

        while ticker.tick().await {
            info!("⏳ Running YouTube tracker check ...");

            match self.run_once().await {
                Ok(report) => info!("Checked {} channels: {} skipped, {} notified.", report.checked, report.skipped, report.notified),
                Err(err) => error!("Check cycle failed: {:#}", err),
            }
        }

        Ok(())
    }

    /// Run a single check cycle as of now.
    pub async fn run_once(&self) -> Res<CycleReport> {
        check::run_check_cycle(self, Utc::now()).await
    }
}
