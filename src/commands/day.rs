use anyhow::Result;
use daybook_core::clock::Clock;
use daybook_core::session::Session;

use super::parse_day;
use crate::render::{Palette, render_view};

pub fn run<C: Clock>(session: &mut Session<C>, palette: &Palette, date: Option<&str>) -> Result<()> {
    if let Some(day) = parse_day(date)? {
        session.select(day);
    }

    println!("{}", render_view(session, palette));
    Ok(())
}
