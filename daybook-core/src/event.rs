//! Calendar events.
//!
//! An event belongs to exactly one calendar day, identified by its `DateKey`.
//! Start and end times are optional: date-only events carry none, and
//! operations that need a start time (countdowns) are simply unavailable for
//! them.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::date_key::DateKey;
use crate::error::{DaybookError, DaybookResult};

const TIME_FORMAT: &str = "%H:%M";

/// A wall-clock time of day, rendered as 24-hour `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(ClockTime)
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }

    /// Parse a strict `HH:MM` string.
    pub fn parse(s: &str) -> DaybookResult<Self> {
        let trimmed = s.trim();
        if trimmed.len() != 5 {
            return Err(DaybookError::InvalidTime(s.to_string()));
        }
        NaiveTime::parse_from_str(trimmed, TIME_FORMAT)
            .map(ClockTime)
            .map_err(|_| DaybookError::InvalidTime(s.to_string()))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}

impl FromStr for ClockTime {
    type Err = DaybookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClockTime::parse(s)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ClockTime::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Start and end of a timed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSpan {
    pub start: ClockTime,
    pub end: ClockTime,
}

/// A calendar event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub date: DateKey,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub times: Option<TimeSpan>,
}

impl Event {
    /// An event with no time of day.
    pub fn new(date: DateKey, title: impl Into<String>) -> Self {
        Event {
            date,
            title: title.into(),
            times: None,
        }
    }

    pub fn timed(date: DateKey, title: impl Into<String>, start: ClockTime, end: ClockTime) -> Self {
        Event {
            date,
            title: title.into(),
            times: Some(TimeSpan { start, end }),
        }
    }

    pub fn start_time(&self) -> Option<ClockTime> {
        self.times.map(|t| t.start)
    }

    pub fn end_time(&self) -> Option<ClockTime> {
        self.times.map(|t| t.end)
    }

    /// Local wall-clock start of the event, if it has a start time.
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        self.start_time().map(|t| self.date.date().and_time(t.time()))
    }

    /// "19:00 to 20:00" for timed events, "all-day" otherwise.
    pub fn render_time_range(&self) -> String {
        match self.times {
            Some(TimeSpan { start, end }) => format!("{} to {}", start, end),
            None => "all-day".to_string(),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
