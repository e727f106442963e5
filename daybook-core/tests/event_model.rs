use chrono::{DateTime, FixedOffset, TimeZone};
use daybook_core::clock::FixedClock;
use daybook_core::countdown::remaining_time;
use daybook_core::draft::{DraftEvent, DraftField, FormVariant};
use daybook_core::session::Session;
use daybook_core::store::EventStore;
use daybook_core::{ClockTime, DateKey, DaybookError, Event};

fn key(s: &str) -> DateKey {
    s.parse().expect("valid key")
}

fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
    FixedOffset::west_opt(3 * 3600)
        .expect("offset")
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .unwrap()
}

fn lunch_draft() -> DraftEvent {
    DraftEvent {
        variant: FormVariant::Timed,
        title: "Lunch".to_string(),
        start_date: Some(local(2025, 1, 5, 0, 0)),
        end_date: Some(local(2025, 1, 5, 0, 0)),
        start_time: ClockTime::new(12, 0),
        end_time: ClockTime::new(13, 0),
    }
}

#[test]
fn seed_scenario_new_years_eve() {
    let store = EventStore::seeded();

    let nye = store.events_on(&key("2024-12-31"));
    let titles: Vec<_> = nye.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Trivia Night", "Tacos and Trivia"]);
    assert_eq!(nye[0].start_time(), ClockTime::new(19, 0));
    assert_eq!(nye[0].end_time(), ClockTime::new(20, 0));

    assert!(store.events_on(&key("2024-12-30")).is_empty());
}

#[test]
fn day_queries_partition_the_collection() {
    let store = EventStore::from_events(vec![
        Event::new(key("2025-01-05"), "one"),
        Event::new(key("2025-01-06"), "two"),
        Event::new(key("2025-01-05"), "three"),
        Event::new(key("2025-01-07"), "four"),
        Event::new(key("2025-01-05"), "three"),
    ]);

    let days = [key("2025-01-05"), key("2025-01-06"), key("2025-01-07")];
    let mut total = 0;
    for day in &days {
        let events = store.events_on(day);
        assert!(events.iter().all(|e| e.date == *day));
        // idempotent
        assert_eq!(events, store.events_on(day));
        total += events.len();
    }
    assert_eq!(total, store.len());

    let fifth: Vec<_> = store
        .events_on(&key("2025-01-05"))
        .iter()
        .map(|e| e.title.as_str())
        .collect();
    assert_eq!(fifth, vec!["one", "three", "three"]);
}

#[test]
fn lunch_scenario_adds_one_event() {
    let mut store = EventStore::seeded();

    let added = store.add(&lunch_draft()).expect("complete draft").clone();

    assert_eq!(store.len(), 3);
    assert_eq!(added.date, key("2025-01-05"));
    assert_eq!(added.date.to_string(), "2025-01-05");
    assert_eq!(store.events_on(&key("2025-01-05")), vec![&added]);
}

#[test]
fn each_missing_field_is_rejected() {
    let cases: [(DraftField, fn(&mut DraftEvent)); 5] = [
        (DraftField::Title, |d| d.title.clear()),
        (DraftField::StartDate, |d| d.start_date = None),
        (DraftField::EndDate, |d| d.end_date = None),
        (DraftField::StartTime, |d| d.start_time = None),
        (DraftField::EndTime, |d| d.end_time = None),
    ];

    for (field, blank) in cases {
        let mut store = EventStore::seeded();
        let mut draft = lunch_draft();
        blank(&mut draft);

        match store.add(&draft) {
            Err(DaybookError::MissingField(missing)) => assert_eq!(missing, field),
            other => panic!("expected MissingField({field}), got {other:?}"),
        }
        assert_eq!(store.len(), 2);
    }
}

#[test]
fn missing_title_keeps_draft_in_session() {
    let now = local(2024, 12, 31, 8, 0);
    let mut session = Session::new(EventStore::seeded(), FixedClock::new(now), FormVariant::Timed);
    session.toggle_add_form();
    *session.draft_mut() = lunch_draft();
    session.draft_mut().title = String::new();

    assert!(session.submit_draft().is_err());
    assert_eq!(session.store().len(), 2);
    assert_eq!(session.draft().start_time, ClockTime::new(12, 0));
    assert!(session.show_add_form());

    session.draft_mut().title = "Lunch".to_string();
    let event = session.submit_draft().expect("fixed draft");
    assert_eq!(event.date, key("2025-01-05"));
    assert_eq!(session.store().len(), 3);
    assert!(session.draft().title.is_empty());
}

#[test]
fn normalizing_either_end_of_a_day() {
    assert_eq!(
        DateKey::from_local(&local(2025, 1, 5, 23, 59)),
        DateKey::from_local(&local(2025, 1, 5, 0, 1))
    );
}

#[test]
fn countdown_boundaries() {
    let event = Event::timed(
        key("2025-01-05"),
        "Lunch",
        ClockTime::new(12, 0).expect("time"),
        ClockTime::new(13, 0).expect("time"),
    );
    let label = |now: DateTime<FixedOffset>| {
        remaining_time(&event, &now).expect("timed").to_string()
    };

    assert_eq!(label(local(2025, 1, 1, 12, 0)), "4 days");
    assert_eq!(label(local(2025, 1, 4, 11, 59)), "2 days");
    assert_eq!(label(local(2025, 1, 4, 12, 0)), "24 hours");
    assert_eq!(label(local(2025, 1, 4, 12, 1)), "24 hours");
    assert_eq!(label(local(2025, 1, 5, 11, 0)), "1 hours");
    assert_eq!(label(local(2025, 1, 5, 12, 0)), "Past Event");
    assert_eq!(label(local(2025, 1, 6, 9, 0)), "Past Event");
}

#[test]
fn session_countdown_follows_the_clock() {
    let mut clock = FixedClock::new(local(2024, 12, 31, 17, 0));
    let session = Session::new(EventStore::seeded(), clock.clone(), FormVariant::Timed);
    let first = session.store().events()[0].clone();
    assert_eq!(session.remaining_time(&first).map(|r| r.to_string()), Some("2 hours".into()));

    clock.set(local(2024, 12, 31, 20, 0));
    let later = Session::new(EventStore::seeded(), clock, FormVariant::Timed);
    assert_eq!(later.remaining_time(&first).map(|r| r.to_string()), Some("Past Event".into()));
}
