//! Wall clock shown in the footer, refreshed once a second.

use std::time::{Duration, Instant};

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::timer::IntervalTimer;

/// India Standard Time. IST has no daylight saving, so a fixed offset is exact.
pub const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

const TICK: Duration = Duration::from_secs(1);

/// `19/10/2026, 3:04:05 pm`
const DISPLAY_FORMAT: &str = "%d/%m/%Y, %-I:%M:%S %P";

/// The India Standard Time offset.
pub fn ist() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Format a timestamp the way the footer shows it.
pub fn format_timestamp(time: &DateTime<FixedOffset>) -> String {
    time.format(DISPLAY_FORMAT).to_string()
}

/// Ticking clock in a fixed timezone. Shares no state with the transcript.
#[derive(Debug, Clone)]
pub struct Clock {
    offset: FixedOffset,
    current: DateTime<FixedOffset>,
    timer: IntervalTimer,
}

impl Clock {
    /// Start a clock reading the system time in `offset`.
    pub fn new(offset: FixedOffset, now: Instant) -> Self {
        Self {
            offset,
            current: Utc::now().with_timezone(&offset),
            timer: IntervalTimer::started(TICK, now),
        }
    }

    /// Refresh from the system clock when a second has elapsed.
    /// Returns true if the displayed time was refreshed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.timer.poll(now) == 0 {
            return false;
        }
        self.set_time(Utc::now());
        true
    }

    /// Pin the clock to a specific instant.
    pub fn set_time(&mut self, time: DateTime<Utc>) {
        self.current = time.with_timezone(&self.offset);
    }

    pub fn current(&self) -> DateTime<FixedOffset> {
        self.current
    }

    pub fn display(&self) -> String {
        format_timestamp(&self.current)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.next_deadline()
    }
}
