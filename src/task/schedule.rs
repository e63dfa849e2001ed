//! Tick sources that drive the check cycle.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{Interval, MissedTickBehavior};

/// Something that decides when the next check cycle starts.
#[async_trait]
pub trait Ticker: Send {
    /// Wait for the next tick. Returns `false` once no further cycles should run.
    async fn tick(&mut self) -> bool;
}

/// Ticks immediately, then once per period, forever.
///
/// Ticks that fall due while a cycle is still running are skipped, so cycles
/// never overlap.
pub struct IntervalTicker {
    interval: Interval,
}

impl IntervalTicker {
    pub fn new(period: Duration) -> Self {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Self { interval }
    }
}

#[async_trait]
impl Ticker for IntervalTicker {
    async fn tick(&mut self) -> bool {
        self.interval.tick().await;
        true
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn first_tick_is_immediate_then_periodic() {
        let mut ticker = IntervalTicker::new(Duration::from_secs(600));
        let start = Instant::now();

        assert!(ticker.tick().await);
        assert_eq!(start.elapsed(), Duration::ZERO);

        assert!(ticker.tick().await);
        assert!(start.elapsed() >= Duration::from_secs(600));
    }
}
