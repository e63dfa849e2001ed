//! Core components, types, and utilities for the tracker.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - Chat message templates.
//! - Common types and result handling.

pub mod config;
pub mod messages;
pub mod types;
