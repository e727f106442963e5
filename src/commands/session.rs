use anyhow::Result;
use daybook_core::DateKey;
use daybook_core::clock::Clock;
use daybook_core::session::Session;
use dialoguer::Select;
use owo_colors::OwoColorize;
use tracing::debug;

use super::add::{print_added, rejection_notice};
use crate::form;
use crate::render::{Palette, Render, render_header, render_view};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    SelectDay,
    PreviousMonth,
    NextMonth,
    Today,
    ToggleList,
    AddEvent,
    CloseForm,
    Quit,
}

impl Action {
    fn label(&self, showing_list: bool, form_open: bool) -> &'static str {
        match self {
            Action::SelectDay => "Select day",
            Action::PreviousMonth => "Previous month",
            Action::NextMonth => "Next month",
            Action::Today => "Today",
            Action::ToggleList if showing_list => "Hide event list",
            Action::ToggleList => "Show event list",
            Action::AddEvent if form_open => "Finish adding event",
            Action::AddEvent => "Add event",
            Action::CloseForm => "Close form",
            Action::Quit => "Quit",
        }
    }
}

/// Menu entries for the current state. The calendar controls are hidden
/// while the full list is shown.
fn menu(showing_list: bool, form_open: bool) -> Vec<Action> {
    let mut actions = Vec::new();

    if !showing_list {
        actions.extend([
            Action::SelectDay,
            Action::PreviousMonth,
            Action::NextMonth,
            Action::Today,
        ]);
    }
    actions.push(Action::ToggleList);
    actions.push(Action::AddEvent);
    if form_open {
        actions.push(Action::CloseForm);
    }
    actions.push(Action::Quit);

    actions
}

pub fn run<C: Clock>(session: &mut Session<C>, palette: &Palette) -> Result<()> {
    loop {
        println!();
        println!("{}", render_header(session));
        println!();
        if !session.show_event_list() {
            println!("{}", session.month_view().render());
            println!();
        }
        println!("{}", render_view(session, palette));
        println!();

        let showing_list = session.show_event_list();
        let form_open = session.show_add_form();
        let actions = menu(showing_list, form_open);
        let labels: Vec<&str> = actions
            .iter()
            .map(|a| a.label(showing_list, form_open))
            .collect();

        let Some(choice) = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact_opt()?
        else {
            break;
        };

        let action = actions[choice];
        debug!(?action, "menu action");

        match action {
            Action::SelectDay => {
                let day = form::prompt_with_retry("  Day", "YYYY-MM-DD", |s| Ok(DateKey::parse(s)?))?;
                if let Some(day) = day {
                    session.select(day);
                }
            }
            Action::PreviousMonth => session.shift_month(-1),
            Action::NextMonth => session.shift_month(1),
            Action::Today => session.go_to_today(),
            Action::ToggleList => session.toggle_event_list(),
            Action::AddEvent => {
                if !session.show_add_form() {
                    session.toggle_add_form();
                }
                fill_and_submit(session)?;
            }
            Action::CloseForm => session.toggle_add_form(),
            Action::Quit => break,
        }
    }

    Ok(())
}

/// Prompt for the draft's missing fields and try to commit it. A rejected
/// draft is reported and kept for the next attempt.
fn fill_and_submit<C: Clock>(session: &mut Session<C>) -> Result<()> {
    let tz = session.clock().now().timezone();
    println!("{}", "  Add New Event".bold());
    form::prompt_missing(session.draft_mut(), &tz)?;

    match session.submit_draft() {
        Ok(event) => {
            print_added(&event);
            session.select(event.date);
        }
        Err(e) => eprintln!("  {}", rejection_notice(&e).red()),
    }

    Ok(())
}
