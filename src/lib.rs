//! Ship-time reckoning for vessels at sea.
//!
//! A ship keeps local time and changes its clocks as it crosses timezones and
//! the International Date Line. This crate turns a voyage's logged clock
//! changes into ship days of 23 to 25 hours, measures duty time across those
//! changes, and checks work/rest totals per ship day.
//!
//! - [`offset`]: UTC offset arithmetic over the legal band.
//! - [`resolve`]: the offset in force after a clock change.
//! - [`segment`]: one nominal date as a ship day with its length and label.
//! - [`duration`]: real elapsed minutes for a span of clock time.
//! - [`compliance`]: work/rest totals against thresholds.
//! - [`passage`]: consecutive ship days pinned to UTC.
//! - [`edit`]: half-hour snapping drag editor for duty intervals.

pub mod compliance;
pub mod duration;
pub mod edit;
pub mod error;
pub mod model;
pub mod offset;
pub mod passage;
pub mod resolve;
pub mod segment;

pub use error::{ReckonError, Result};
