//! Service integrations for external APIs and local files.
//!
//! This module contains implementations for the services used by the tracker:
//! - Video platform lookups (e.g., the YouTube Data API)
//! - Notifications (e.g., a Telegram bot)
//! - Last-seen state storage (e.g., a JSON file)
//! - Static channel and handle lists
//!
//! Each service module defines both generic traits and concrete implementations,
//! allowing for extensibility and easy testing.

pub mod directory;
pub mod notify;
pub mod platform;
pub mod store;
