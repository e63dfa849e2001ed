//! The work the tracker does.
//!
//! - The check cycle that looks for new uploads and announces them
//! - The tick sources that schedule check cycles
//! - The one-off handle resolver

pub mod check;
pub mod resolve;
pub mod schedule;
