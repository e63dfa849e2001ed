//! Binary entry point for `yt-resolve`.
//!
//! Resolves the channel handles listed in the handle file to channel IDs and
//! prints them as a JSON array, ready to paste into the channel directory.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use yt_tracker::base::{config::Config, types::Void};

/// yt-resolve – turn YouTube channel handles into channel IDs.
///
/// Logs go to stderr; the resolved list goes to stdout.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Override the config file path (optional).
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
    /// Increase log verbosity (-v, -vv, etc.).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Void {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    let level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let stderr = tracing_subscriber::fmt::layer().without_time().with_target(false).with_writer(std::io::stderr);

    tracing_subscriber::registry().with(tracing_subscriber::filter::LevelFilter::from_level(level)).with(stderr).init();

    let config = Config::load(args.config.as_deref())?;

    let channel_ids = yt_tracker::resolve(config).await?;

    println!("{}", serde_json::to_string_pretty(&channel_ids)?);

    Ok(())
}
