//! Viewer session state.
//!
//! `Session` owns everything the viewer mutates: the event collection, the
//! selected day, the add-form draft and the two visibility toggles. Every UI
//! action maps to one method here.

use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::config::DaybookConfig;
use crate::countdown::{self, RemainingTime};
use crate::date_key::DateKey;
use crate::draft::{DraftEvent, FormVariant};
use crate::error::DaybookResult;
use crate::event::Event;
use crate::month::{MonthView, WeekStart};
use crate::store::EventStore;

/// What the display surface should show below the header.
#[derive(Debug)]
pub enum View<'a> {
    /// Events on the selected day.
    Day { date: DateKey, events: Vec<&'a Event> },
    /// The whole collection.
    List { events: &'a [Event] },
}

pub struct Session<C: Clock = SystemClock> {
    store: EventStore,
    clock: C,
    selected: DateKey,
    draft: DraftEvent,
    show_event_list: bool,
    show_add_form: bool,
    week_start: WeekStart,
}

impl<C: Clock> Session<C> {
    /// New session with today selected, an empty draft and both panels hidden.
    pub fn new(store: EventStore, clock: C, variant: FormVariant) -> Self {
        let selected = DateKey::today(&clock);
        Session {
            store,
            clock,
            selected,
            draft: DraftEvent::new(variant),
            show_event_list: false,
            show_add_form: false,
            week_start: WeekStart::default(),
        }
    }

    pub fn from_config(config: &DaybookConfig, clock: C) -> Self {
        let store = if config.seed_sample_events {
            EventStore::seeded()
        } else {
            EventStore::new()
        };
        Session::new(store, clock, config.form).with_week_start(config.week_start)
    }

    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn today(&self) -> DateKey {
        DateKey::today(&self.clock)
    }

    // SELECTION:

    pub fn selected(&self) -> DateKey {
        self.selected
    }

    pub fn select(&mut self, day: DateKey) {
        debug!(%day, "select day");
        self.selected = day;
    }

    pub fn go_to_today(&mut self) {
        let today = self.today();
        self.select(today);
    }

    /// Move the selection by whole months, clamping the day of month.
    pub fn shift_month(&mut self, delta: i32) {
        let day = self.selected.add_months(delta);
        self.select(day);
    }

    pub fn selected_events(&self) -> Vec<&Event> {
        self.store.events_on(&self.selected)
    }

    // TOGGLES:

    pub fn show_event_list(&self) -> bool {
        self.show_event_list
    }

    pub fn toggle_event_list(&mut self) {
        self.show_event_list = !self.show_event_list;
        debug!(show = self.show_event_list, "toggle event list");
    }

    pub fn show_add_form(&self) -> bool {
        self.show_add_form
    }

    pub fn toggle_add_form(&mut self) {
        self.show_add_form = !self.show_add_form;
        debug!(show = self.show_add_form, "toggle add form");
    }

    // DRAFT:

    pub fn draft(&self) -> &DraftEvent {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftEvent {
        &mut self.draft
    }

    /// Commit the draft to the collection.
    ///
    /// On success the draft is cleared and the form hidden. On failure both
    /// are left as they were so the user can fix the missing fields.
    pub fn submit_draft(&mut self) -> DaybookResult<Event> {
        let event = self.store.add(&self.draft)?.clone();
        self.draft.clear();
        self.show_add_form = false;
        Ok(event)
    }

    // DISPLAY:

    pub fn visible(&self) -> View<'_> {
        if self.show_event_list {
            View::List {
                events: self.store.events(),
            }
        } else {
            View::Day {
                date: self.selected,
                events: self.selected_events(),
            }
        }
    }

    pub fn remaining_time(&self, event: &Event) -> Option<RemainingTime> {
        countdown::remaining_time(event, &self.clock.now())
    }

    pub fn month_view(&self) -> MonthView {
        MonthView::build(self.selected, self.today(), &self.store, self.week_start)
    }
}
