//! The in-memory event collection.

use tracing::{debug, info};

use crate::date_key::DateKey;
use crate::draft::DraftEvent;
use crate::error::DaybookResult;
use crate::event::{ClockTime, Event};

/// Sample entries every session starts with: (date, start, end, title).
const SAMPLE_EVENTS: &[(&str, &str, &str, &str)] = &[
    ("2024-12-31", "19:00", "20:00", "Trivia Night"),
    ("2024-12-31", "19:00", "20:00", "Tacos and Trivia"),
];

/// Insertion-ordered list of events. Duplicates are allowed; events are
/// never edited or removed once added.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        EventStore::default()
    }

    /// A store holding the sample events.
    pub fn seeded() -> Self {
        let events = SAMPLE_EVENTS
            .iter()
            .filter_map(|(date, start, end, title)| {
                Some(Event::timed(
                    date.parse::<DateKey>().ok()?,
                    *title,
                    start.parse::<ClockTime>().ok()?,
                    end.parse::<ClockTime>().ok()?,
                ))
            })
            .collect();

        EventStore { events }
    }

    pub fn from_events(events: Vec<Event>) -> Self {
        EventStore { events }
    }

    /// Every event, in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events on the given day, in insertion order.
    pub fn events_on(&self, day: &DateKey) -> Vec<&Event> {
        let events: Vec<&Event> = self.events.iter().filter(|e| e.date == *day).collect();
        debug!(%day, count = events.len(), "events on day");
        events
    }

    pub fn has_events_on(&self, day: &DateKey) -> bool {
        self.events.iter().any(|e| e.date == *day)
    }

    /// Validate a draft and append the event it describes.
    ///
    /// On failure the collection is left as it was.
    pub fn add(&mut self, draft: &DraftEvent) -> DaybookResult<&Event> {
        let event = match draft.to_event() {
            Ok(event) => event,
            Err(e) => {
                debug!(error = %e, "rejected draft");
                return Err(e);
            }
        };

        info!(date = %event.date, title = %event.title, "added event");
        self.events.push(event);
        Ok(&self.events[self.events.len() - 1])
    }
}
