//! Canonical calendar-day keys.
//!
//! Events are matched to calendar days by comparing `DateKey`s, never by
//! comparing instants or locale-formatted strings. A key is the day the user
//! saw on their own clock, with no time-of-day and no UTC offset left in it.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Months, NaiveDate, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::clock::Clock;
use crate::error::{DaybookError, DaybookResult};

const KEY_FORMAT: &str = "%Y-%m-%d";

/// A calendar day, rendered as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Key for the local calendar day of `instant`.
    ///
    /// The instant is read on its own wall clock (UTC offset applied) before
    /// the time-of-day is dropped. Converting to UTC first and truncating would
    /// move a local-midnight pick onto the previous day east of Greenwich.
    pub fn from_local<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        DateKey(instant.naive_local().date())
    }

    /// Key for the clock's current local day.
    pub fn today<C: Clock>(clock: &C) -> Self {
        Self::from_local(&clock.now())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Parse a strict `YYYY-MM-DD` string.
    pub fn parse(s: &str) -> DaybookResult<Self> {
        let trimmed = s.trim();
        // chrono accepts unpadded fields; keys are always zero-padded
        if trimmed.len() != 10 {
            return Err(DaybookError::InvalidDate(s.to_string()));
        }
        NaiveDate::parse_from_str(trimmed, KEY_FORMAT)
            .map(DateKey)
            .map_err(|_| DaybookError::InvalidDate(s.to_string()))
    }

    /// First day of this key's month.
    pub fn first_of_month(&self) -> DateKey {
        DateKey(self.0 - chrono::Duration::days(i64::from(self.0.day0())))
    }

    /// Same day `delta` months away, clamped to the end of shorter months.
    /// Out-of-range results leave the key unchanged.
    pub fn add_months(&self, delta: i32) -> DateKey {
        let months = Months::new(delta.unsigned_abs());
        let shifted = if delta >= 0 {
            self.0.checked_add_months(months)
        } else {
            self.0.checked_sub_months(months)
        };
        DateKey(shifted.unwrap_or(self.0))
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(KEY_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = DaybookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateKey::parse(s)
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateKey::parse(&raw).map_err(serde::de::Error::custom)
    }
}
