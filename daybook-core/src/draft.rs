//! Draft events: form state that is not yet part of the collection.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::date_key::DateKey;
use crate::error::{DaybookError, DaybookResult};
use crate::event::{ClockTime, Event};

/// Which event shape the add form collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormVariant {
    /// Title, start date, end date, start time and end time.
    #[default]
    Timed,
    /// Title and a single date; events carry no times.
    DateOnly,
}

/// A field of the add form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    StartDate,
    EndDate,
    StartTime,
    EndTime,
}

impl DraftField {
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::StartDate => "start date",
            DraftField::EndDate => "end date",
            DraftField::StartTime => "start time",
            DraftField::EndTime => "end time",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

const TIMED_FIELDS: &[DraftField] = &[
    DraftField::Title,
    DraftField::StartDate,
    DraftField::EndDate,
    DraftField::StartTime,
    DraftField::EndTime,
];

const DATE_ONLY_FIELDS: &[DraftField] = &[DraftField::Title, DraftField::StartDate];

/// Partially filled add-form state.
///
/// Dates are kept as the raw instants the date picker produced, with the
/// offset they were picked in. They are only turned into a `DateKey` when the
/// draft is committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftEvent {
    pub variant: FormVariant,
    pub title: String,
    pub start_date: Option<DateTime<FixedOffset>>,
    /// Required by the timed form but never used to key the stored event.
    pub end_date: Option<DateTime<FixedOffset>>,
    pub start_time: Option<ClockTime>,
    pub end_time: Option<ClockTime>,
}

impl Default for DraftEvent {
    fn default() -> Self {
        DraftEvent::new(FormVariant::default())
    }
}

impl DraftEvent {
    /// An empty draft for the given form variant.
    pub fn new(variant: FormVariant) -> Self {
        DraftEvent {
            variant,
            title: String::new(),
            start_date: None,
            end_date: None,
            start_time: None,
            end_time: None,
        }
    }

    /// Fields the active variant requires, in form order.
    pub fn required_fields(&self) -> &'static [DraftField] {
        match self.variant {
            FormVariant::Timed => TIMED_FIELDS,
            FormVariant::DateOnly => DATE_ONLY_FIELDS,
        }
    }

    pub fn is_filled(&self, field: DraftField) -> bool {
        match field {
            DraftField::Title => !self.title.trim().is_empty(),
            DraftField::StartDate => self.start_date.is_some(),
            DraftField::EndDate => self.end_date.is_some(),
            DraftField::StartTime => self.start_time.is_some(),
            DraftField::EndTime => self.end_time.is_some(),
        }
    }

    /// Required fields that are still empty, in form order.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        self.required_fields()
            .iter()
            .copied()
            .filter(|f| !self.is_filled(*f))
            .collect()
    }

    /// Fails with the first missing required field.
    pub fn validate(&self) -> DaybookResult<()> {
        match self.missing_fields().first() {
            Some(field) => Err(DaybookError::MissingField(*field)),
            None => Ok(()),
        }
    }

    /// Build the event this draft describes.
    ///
    /// Only the start date keys the event. The end date is validated for the
    /// timed form and then dropped.
    pub fn to_event(&self) -> DaybookResult<Event> {
        self.validate()?;

        let start_date = self
            .start_date
            .as_ref()
            .ok_or(DaybookError::MissingField(DraftField::StartDate))?;
        let date = DateKey::from_local(start_date);
        let title = self.title.trim().to_string();

        match self.variant {
            FormVariant::DateOnly => Ok(Event::new(date, title)),
            FormVariant::Timed => {
                let start = self
                    .start_time
                    .ok_or(DaybookError::MissingField(DraftField::StartTime))?;
                let end = self
                    .end_time
                    .ok_or(DaybookError::MissingField(DraftField::EndTime))?;
                Ok(Event::timed(date, title, start, end))
            }
        }
    }

    /// Reset to the empty initial state, keeping the form variant.
    pub fn clear(&mut self) {
        *self = DraftEvent::new(self.variant);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn picked(y: i32, m: u32, d: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(y, m, d, 0, 0, 0)
            .unwrap()
    }

    fn lunch() -> DraftEvent {
        DraftEvent {
            variant: FormVariant::Timed,
            title: "Lunch".to_string(),
            start_date: Some(picked(2025, 1, 5)),
            end_date: Some(picked(2025, 1, 5)),
            start_time: ClockTime::new(12, 0),
            end_time: ClockTime::new(13, 0),
        }
    }

    #[test]
    fn empty_timed_draft_misses_everything() {
        let draft = DraftEvent::new(FormVariant::Timed);
        assert_eq!(draft.missing_fields(), TIMED_FIELDS.to_vec());
        assert!(matches!(
            draft.validate(),
            Err(DaybookError::MissingField(DraftField::Title))
        ));
    }

    #[test]
    fn blank_title_counts_as_missing() {
        let mut draft = lunch();
        draft.title = "   ".to_string();
        assert_eq!(draft.missing_fields(), vec![DraftField::Title]);
    }

    #[test]
    fn first_missing_field_is_reported() {
        let mut draft = lunch();
        draft.end_date = None;
        draft.end_time = None;

        assert!(matches!(
            draft.to_event(),
            Err(DaybookError::MissingField(DraftField::EndDate))
        ));
        assert_eq!(draft.missing_fields(), vec![DraftField::EndDate, DraftField::EndTime]);
    }

    #[test]
    fn end_date_does_not_affect_key() {
        let mut draft = lunch();
        draft.end_date = Some(picked(2025, 1, 9));

        let event = draft.to_event().unwrap();
        assert_eq!(event.date.to_string(), "2025-01-05");
    }

    #[test]
    fn date_only_variant_needs_title_and_start_date() {
        let mut draft = DraftEvent::new(FormVariant::DateOnly);
        draft.title = "Dentist".to_string();
        assert_eq!(draft.missing_fields(), vec![DraftField::StartDate]);

        draft.start_date = Some(picked(2025, 2, 1));
        draft.start_time = ClockTime::new(9, 0);
        let event = draft.to_event().unwrap();

        assert_eq!(event.date.to_string(), "2025-02-01");
        assert!(event.times.is_none());
    }

    #[test]
    fn clear_keeps_variant() {
        let mut draft = DraftEvent::new(FormVariant::DateOnly);
        draft.title = "Dentist".to_string();
        draft.clear();

        assert_eq!(draft, DraftEvent::new(FormVariant::DateOnly));
    }

    #[test]
    fn title_is_trimmed() {
        let mut draft = lunch();
        draft.title = "  Lunch ".to_string();
        assert_eq!(draft.to_event().unwrap().title, "Lunch");
    }
}
