pub mod add;
pub mod config;
pub mod day;
pub mod list;
pub mod month;
pub mod session;

use anyhow::Result;
use daybook_core::DateKey;

/// Parse an optional `YYYY-MM-DD` argument.
pub fn parse_day(input: Option<&str>) -> Result<Option<DateKey>> {
    input
        .map(|s| DateKey::parse(s).map_err(anyhow::Error::from))
        .transpose()
}
