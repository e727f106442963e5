//! Core types for daybook.
//!
//! This crate holds everything the viewer needs that isn't drawing:
//! - `date_key` turns picked dates into canonical day keys
//! - `store`, `draft` and `countdown` hold, validate and time events
//! - `session` owns the viewer state and its transitions
//! - `month` builds the grid the calendar renderer draws

pub mod clock;
pub mod config;
pub mod countdown;
pub mod date_key;
pub mod draft;
pub mod error;
pub mod event;
pub mod month;
pub mod session;
pub mod store;

pub use date_key::DateKey;
pub use error::{DaybookError, DaybookResult};
pub use event::{ClockTime, Event};
