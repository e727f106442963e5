use std::io::IsTerminal;

use anyhow::Result;
use daybook_core::DaybookError;
use daybook_core::clock::Clock;
use daybook_core::event::Event;
use daybook_core::session::Session;
use owo_colors::OwoColorize;

use crate::form::{self, FormInput};
use crate::render::{Palette, render_view};

pub fn run<C: Clock>(session: &mut Session<C>, palette: &Palette, input: FormInput) -> Result<()> {
    let tz = session.clock().now().timezone();

    if !session.show_add_form() {
        session.toggle_add_form();
    }
    input.apply_to(session.draft_mut(), &tz)?;

    // Prompt for whatever wasn't passed as a flag, if there's someone to ask
    if std::io::stdin().is_terminal() && !session.draft().missing_fields().is_empty() {
        form::prompt_missing(session.draft_mut(), &tz)?;
    }

    let event = session
        .submit_draft()
        .map_err(|e| anyhow::anyhow!(rejection_notice(&e)))?;
    print_added(&event);

    session.select(event.date);
    println!();
    println!("{}", render_view(session, palette));

    Ok(())
}

pub fn print_added(event: &Event) {
    println!(
        "{}",
        format!("  Event added: {} on {}", event.title, event.date).green()
    );
}

/// User-facing notice for a rejected draft.
pub fn rejection_notice(err: &DaybookError) -> String {
    match err {
        DaybookError::MissingField(field) => {
            format!("Please fill out all fields ({} is missing)", field)
        }
        other => other.to_string(),
    }
}
