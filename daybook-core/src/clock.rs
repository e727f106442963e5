//! Sources of "now".
//!
//! Anything that depends on the current time takes a `Clock` instead of
//! reading the system clock, so countdowns and "today" can be pinned in tests.

use chrono::{DateTime, Local, TimeDelta, TimeZone};

pub trait Clock {
    type Tz: TimeZone;

    fn now(&self) -> DateTime<Self::Tz>;
}

/// The local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Tz = Local;

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock stuck at a given instant until moved explicitly.
#[derive(Debug, Clone)]
pub struct FixedClock<Tz: TimeZone> {
    now: DateTime<Tz>,
}

impl<Tz: TimeZone> FixedClock<Tz> {
    pub fn new(now: DateTime<Tz>) -> Self {
        FixedClock { now }
    }

    pub fn set(&mut self, now: DateTime<Tz>) {
        self.now = now;
    }

    pub fn advance(&mut self, by: TimeDelta) {
        self.now = self.now.clone() + by;
    }
}

impl<Tz: TimeZone> Clock for FixedClock<Tz> {
    type Tz = Tz;

    fn now(&self) -> DateTime<Tz> {
        self.now.clone()
    }
}
