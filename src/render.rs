//! Terminal rendering for daybook types.
//!
//! Extension traits and helpers that turn daybook-core types into coloured
//! terminal output using owo_colors.

use chrono::Datelike;
use daybook_core::DateKey;
use daybook_core::clock::Clock;
use daybook_core::config::{DEFAULT_PALETTE, DaybookConfig};
use daybook_core::countdown::RemainingTime;
use daybook_core::event::Event;
use daybook_core::month::MonthView;
use daybook_core::session::{Session, View};
use owo_colors::OwoColorize;
use tracing::warn;

/// Used only if no configured colour parses.
const FALLBACK_COLOR: Rgb = Rgb(0x74, 0xb9, 0xff);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#rrggbb` (the `#` is optional).
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Rgb(r, g, b))
    }
}

/// Event card colours.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Default for Palette {
    fn default() -> Self {
        Palette::from_hex(DEFAULT_PALETTE.iter().copied())
    }
}

impl Palette {
    pub fn from_config(config: &DaybookConfig) -> Self {
        let palette = Palette::from_hex(config.palette.iter().map(String::as_str));
        if palette.colors.is_empty() {
            warn!("no usable palette colours configured, using defaults");
            return Palette::default();
        }
        palette
    }

    fn from_hex<'a>(hex: impl Iterator<Item = &'a str>) -> Self {
        let colors = hex
            .filter_map(|h| {
                let parsed = Rgb::parse_hex(h);
                if parsed.is_none() {
                    warn!(color = h, "ignoring invalid palette colour");
                }
                parsed
            })
            .collect();
        Palette { colors }
    }

    /// Colour for the card at `index`, cycling through the palette.
    /// Picked at render time and never stored on the event.
    pub fn color_for(&self, index: usize) -> Rgb {
        if self.colors.is_empty() {
            return FALLBACK_COLOR;
        }
        self.colors[index % self.colors.len()]
    }
}

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for RemainingTime {
    fn render(&self) -> String {
        match self {
            RemainingTime::Past => self.to_string().dimmed().to_string(),
            RemainingTime::Hours(_) => format!("{} left", self).yellow().to_string(),
            RemainingTime::Days(_) => format!("{} left", self),
        }
    }
}

impl Render for MonthView {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("{:^27}", self.title()).bold().to_string());
        lines.push(
            self.week_start
                .headers()
                .iter()
                .map(|h| format!("{:<3}", h))
                .collect::<Vec<_>>()
                .join(" ")
                .dimmed()
                .to_string(),
        );

        for week in &self.weeks {
            let cells: Vec<String> = week
                .iter()
                .map(|cell| {
                    let marker = if cell.has_events { "•" } else { " " };
                    let text = format!("{:>2}{}", cell.date.date().day(), marker);

                    if cell.is_selected {
                        text.reversed().to_string()
                    } else if cell.is_today {
                        text.bold().underline().to_string()
                    } else if !cell.in_month {
                        text.dimmed().to_string()
                    } else if cell.has_events {
                        text.cyan().to_string()
                    } else {
                        text
                    }
                })
                .collect();
            lines.push(cells.join(" "));
        }

        lines.join("\n")
    }
}

/// "Tue Dec 31 2024"
pub fn format_day(day: DateKey) -> String {
    day.date().format("%a %b %d %Y").to_string()
}

/// One event card: coloured title bar, time range, countdown.
pub fn render_card(
    event: &Event,
    remaining: Option<RemainingTime>,
    color: Rgb,
    show_date: bool,
) -> String {
    let Rgb(r, g, b) = color;
    let title = format!(" {} ", event.title);

    let mut lines = vec![format!("  {}", title.black().bold().on_truecolor(r, g, b))];

    let times = event.render_time_range();
    if show_date {
        lines.push(format!("    {} | {}", event.date, times));
    } else {
        lines.push(format!("    {}", times));
    }

    if let Some(remaining) = remaining {
        lines.push(format!("    {}", remaining.render()));
    }

    lines.join("\n")
}

/// Header line: the selected day.
pub fn render_header<C: Clock>(session: &Session<C>) -> String {
    format_day(session.selected()).bold().to_string()
}

/// The day view or the event list, whichever the session shows.
pub fn render_view<C: Clock>(session: &Session<C>, palette: &Palette) -> String {
    let mut lines = Vec::new();

    match session.visible() {
        View::Day { date, events } => {
            lines.push(format!("Events on {}", format_day(date)).bold().to_string());
            if events.is_empty() {
                lines.push("  No events for this day.".dimmed().to_string());
            }
            for (index, event) in events.iter().enumerate() {
                lines.push(render_card(
                    event,
                    session.remaining_time(event),
                    palette.color_for(index),
                    false,
                ));
            }
        }
        View::List { events } => {
            lines.push("All Events".bold().to_string());
            if events.is_empty() {
                lines.push("  No events found.".dimmed().to_string());
            }
            for (index, event) in events.iter().enumerate() {
                lines.push(render_card(
                    event,
                    session.remaining_time(event),
                    palette.color_for(index),
                    true,
                ));
            }
        }
    }

    lines.join("\n")
}
