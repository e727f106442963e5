//! Add-event form: turns typed or prompted text into draft fields.

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, LocalResult, NaiveTime, TimeDelta, TimeZone};
use daybook_core::draft::{DraftEvent, DraftField};
use daybook_core::{ClockTime, DateKey};
use dialoguer::Input;
use owo_colors::OwoColorize;

/// Raw form values as typed on the command line.
#[derive(Debug, Default)]
pub struct FormInput {
    pub title: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl FormInput {
    /// Copy every given value into the draft. Fields left out stay as they are.
    pub fn apply_to<Tz: TimeZone>(self, draft: &mut DraftEvent, tz: &Tz) -> Result<()> {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(s) = self.start_date {
            draft.start_date = Some(pick_date(tz, &s).context("Bad --start-date")?);
        }
        if let Some(s) = self.end_date {
            draft.end_date = Some(pick_date(tz, &s).context("Bad --end-date")?);
        }
        if let Some(s) = self.start_time {
            draft.start_time = Some(ClockTime::parse(&s).context("Bad --start-time")?);
        }
        if let Some(s) = self.end_time {
            draft.end_time = Some(ClockTime::parse(&s).context("Bad --end-time")?);
        }
        Ok(())
    }
}

/// What a date picker hands back for a typed `YYYY-MM-DD`: local midnight of
/// that day, with the offset in force at that moment.
pub fn pick_date<Tz: TimeZone>(tz: &Tz, input: &str) -> Result<DateTime<FixedOffset>> {
    let day = DateKey::parse(input)?;
    let midnight = day.date().and_time(NaiveTime::MIN);

    let picked = match tz.from_local_datetime(&midnight) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
        // midnight skipped by a DST change; the day starts an hour later
        LocalResult::None => tz
            .from_local_datetime(&(midnight + TimeDelta::hours(1)))
            .earliest()
            .with_context(|| format!("{} has no local start of day", day))?,
    };

    Ok(picked.fixed_offset())
}

/// Prompt for each required field the draft is still missing.
///
/// Empty answers leave the field empty, so the caller's validation reports it.
pub fn prompt_missing<Tz: TimeZone>(draft: &mut DraftEvent, tz: &Tz) -> Result<()> {
    for field in draft.missing_fields() {
        let prompt = format!("  {}", capitalize(field.label()));
        match field {
            DraftField::Title => {
                draft.title = Input::<String>::new()
                    .with_prompt(prompt)
                    .allow_empty(true)
                    .interact_text()?;
            }
            DraftField::StartDate => {
                draft.start_date = prompt_with_retry(&prompt, "YYYY-MM-DD", |s| pick_date(tz, s))?;
            }
            DraftField::EndDate => {
                draft.end_date = prompt_with_retry(&prompt, "YYYY-MM-DD", |s| pick_date(tz, s))?;
            }
            DraftField::StartTime => {
                draft.start_time =
                    prompt_with_retry(&prompt, "HH:MM", |s| Ok(ClockTime::parse(s)?))?;
            }
            DraftField::EndTime => {
                draft.end_time = prompt_with_retry(&prompt, "HH:MM", |s| Ok(ClockTime::parse(s)?))?;
            }
        }
    }
    Ok(())
}

/// Prompt until the input parses or is left empty.
pub fn prompt_with_retry<T, F>(prompt: &str, hint: &str, parse: F) -> Result<Option<T>>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let input: String = Input::new()
            .with_prompt(format!("{} ({})", prompt, hint))
            .allow_empty(true)
            .interact_text()?;
        if input.trim().is_empty() {
            return Ok(None);
        }
        match parse(&input) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
