//! Month grid model consumed by the calendar renderer.

use chrono::{Datelike, Duration, Weekday};
use serde::{Deserialize, Serialize};

use crate::date_key::DateKey;
use crate::store::EventStore;

/// First column of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(&self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }

    /// Two-letter weekday headers in column order.
    pub fn headers(&self) -> [&'static str; 7] {
        match self {
            WeekStart::Sunday => ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
            WeekStart::Monday => ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: DateKey,
    /// False for the leading/trailing days of neighbouring months.
    pub in_month: bool,
    pub has_events: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

/// Whole weeks covering the month of the selected day.
#[derive(Debug, Clone)]
pub struct MonthView {
    pub first_day: DateKey,
    pub week_start: WeekStart,
    pub weeks: Vec<Vec<DayCell>>,
}

impl MonthView {
    pub fn build(
        selected: DateKey,
        today: DateKey,
        store: &EventStore,
        week_start: WeekStart,
    ) -> Self {
        let first = selected.first_of_month().date();
        let month = first.month();

        let lead = (first.weekday().num_days_from_sunday() + 7
            - week_start.weekday().num_days_from_sunday())
            % 7;
        let mut week_begin = first - Duration::days(i64::from(lead));

        let mut weeks = Vec::new();
        loop {
            let week = (0..7)
                .map(|offset| {
                    let date = DateKey::from(week_begin + Duration::days(offset));
                    DayCell {
                        date,
                        in_month: date.date().month() == month,
                        has_events: store.has_events_on(&date),
                        is_today: date == today,
                        is_selected: date == selected,
                    }
                })
                .collect();
            weeks.push(week);

            week_begin += Duration::days(7);
            if week_begin.month() != month {
                break;
            }
        }

        MonthView {
            first_day: DateKey::from(first),
            week_start,
            weeks,
        }
    }

    /// e.g. "December 2024"
    pub fn title(&self) -> String {
        self.first_day.date().format("%B %Y").to_string()
    }

    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten()
    }
}
