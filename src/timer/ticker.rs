//! Wall-clock to tick conversion.

use std::time::{Duration, Instant};

/// Smallest interval a ticker accepts.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Turns elapsed wall-clock time into whole ticks.
///
/// Time only accrues while the countdown is running. When the caller reports
/// it is not, the anchor is dropped and the partial interval already run is
/// kept, so short pauses neither bank time nor lose it.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    anchor: Option<Instant>,
    carried: Duration,
}

impl Ticker {
    /// Create a ticker firing every `interval`.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
            anchor: None,
            carried: Duration::ZERO,
        }
    }

    /// The tick interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of whole intervals elapsed since the last accounted tick.
    ///
    /// The fractional remainder is carried to the next call, including
    /// across a pause.
    pub fn elapsed_ticks(&mut self, now: Instant, running: bool) -> u32 {
        if !running {
            if let Some(anchor) = self.anchor.take() {
                self.carried = self.remainder(now.saturating_duration_since(anchor));
            }
            return 0;
        }

        let Some(anchor) = self.anchor else {
            let carried = std::mem::take(&mut self.carried);
            self.anchor = Some(now.checked_sub(carried).unwrap_or(now));
            return 0;
        };

        let elapsed = now.saturating_duration_since(anchor);
        let ticks = u32::try_from(elapsed.as_nanos() / self.interval.as_nanos()).unwrap_or(u32::MAX);
        if ticks > 0 {
            self.anchor = Some(anchor + self.interval * ticks);
        }
        ticks
    }

    /// Forget the anchor and any partial interval.
    pub fn reset(&mut self) {
        self.anchor = None;
        self.carried = Duration::ZERO;
    }

    fn remainder(&self, elapsed: Duration) -> Duration {
        let nanos = elapsed.as_nanos() % self.interval.as_nanos();
        // Below one interval, which is far smaller than u64::MAX nanoseconds
        Duration::from_nanos(u64::try_from(nanos).unwrap_or_default())
    }

    /// Time until the next tick is due.
    #[must_use]
    pub fn until_next(&self, now: Instant) -> Duration {
        self.anchor.map_or(self.interval - self.carried, |anchor| {
            (anchor + self.interval).saturating_duration_since(now)
        })
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}
