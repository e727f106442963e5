use anyhow::Result;
use daybook_core::clock::Clock;
use daybook_core::event::Event;
use daybook_core::session::Session;
use serde::Serialize;

use crate::render::{Palette, render_view};

/// An event plus its countdown label, as printed by `list --json`.
#[derive(Serialize)]
struct ListedEvent<'a> {
    #[serde(flatten)]
    event: &'a Event,
    remaining: Option<String>,
}

pub fn run<C: Clock>(session: &mut Session<C>, palette: &Palette, json: bool) -> Result<()> {
    if !session.show_event_list() {
        session.toggle_event_list();
    }

    if json {
        println!("{}", to_json(session)?);
    } else {
        println!("{}", render_view(session, palette));
    }
    Ok(())
}

fn to_json<C: Clock>(session: &Session<C>) -> Result<String> {
    let listed: Vec<ListedEvent> = session
        .store()
        .events()
        .iter()
        .map(|event| ListedEvent {
            event,
            remaining: session.remaining_time(event).map(|r| r.to_string()),
        })
        .collect();

    Ok(serde_json::to_string_pretty(&listed)?)
}
