//! Time remaining until an event starts.

use std::fmt;

use chrono::{DateTime, LocalResult, TimeDelta, TimeZone};
use serde::Serialize;

use crate::event::Event;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Countdown label for an event, rounded up to whole days or hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RemainingTime {
    /// More than 24 hours away.
    Days(i64),
    /// Starts within the next 24 hours.
    Hours(i64),
    /// Already started.
    Past,
}

impl RemainingTime {
    pub fn from_duration(until_start: TimeDelta) -> Self {
        let hours = until_start.num_milliseconds() as f64 / MILLIS_PER_HOUR;

        if hours > 24.0 {
            RemainingTime::Days((hours / 24.0).ceil() as i64)
        } else if hours > 0.0 {
            RemainingTime::Hours(hours.ceil() as i64)
        } else {
            RemainingTime::Past
        }
    }

    pub fn is_past(&self) -> bool {
        matches!(self, RemainingTime::Past)
    }
}

impl fmt::Display for RemainingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemainingTime::Days(n) => write!(f, "{} days", n),
            RemainingTime::Hours(n) => write!(f, "{} hours", n),
            RemainingTime::Past => write!(f, "Past Event"),
        }
    }
}

/// Time from `now` until the event starts, reading the event's date and start
/// time on `now`'s wall clock.
///
/// Returns `None` for events without a start time. A start time that falls in
/// a DST gap is compared on wall-clock time.
pub fn remaining_time<Tz: TimeZone>(event: &Event, now: &DateTime<Tz>) -> Option<RemainingTime> {
    let starts_at = event.starts_at()?;

    let until_start = match now.timezone().from_local_datetime(&starts_at) {
        LocalResult::Single(start) | LocalResult::Ambiguous(start, _) => {
            start.signed_duration_since(now.clone())
        }
        LocalResult::None => starts_at - now.naive_local(),
    };

    Some(RemainingTime::from_duration(until_start))
}
