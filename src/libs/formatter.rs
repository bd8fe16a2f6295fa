//! Time duration formatting utilities for user-friendly display.
//!
//! This module converts millisecond durations and instants into the string
//! representations used throughout the application: stopwatch readouts,
//! reading timestamps and export columns.
//!
//! ## Format Specifications
//!
//! ### Stopwatch Format
//! Durations follow the "HH:MM:SS.hh" pattern:
//! - Hours, minutes and seconds are zero-padded to 2 digits
//! - Hundredths of a second are appended after a dot
//! - Values are truncated (never rounded) to the hundredth
//! - Negative durations are normalized by taking the absolute value,
//!   which defends against clock skew between start and stop reads
//!
//! ### Instant Format
//! Points in time are rendered as "MM/DD/YYYY, HH:MM:SS" in 24-hour local
//! time for audit display in the readings table and the export sheets.
//!
//! ## Examples
//!
//! ```rust
//! use motus::libs::formatter::{format_time, parse_time};
//!
//! assert_eq!(format_time(5_430), "00:00:05.43");
//! assert_eq!(format_time(3_600_000), "01:00:00.00");
//! assert_eq!(parse_time("00:00:05.43"), Some(5_430));
//! ```

use chrono::{Local, TimeZone};

/// Zero-duration stopwatch display, used wherever a timer has no value yet.
pub const ZERO_TIME: &str = "00:00:00.00";

/// Formats a millisecond duration as a zero-padded `HH:MM:SS.hh` string.
///
/// Negative input is treated as its absolute value; all components are
/// truncated, so `999` ms renders as `00:00:00.99`.
pub fn format_time(ms: i64) -> String {
    let ms = ms.abs();

    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let hundredths = (ms % 1_000) / 10;

    format!("{:02}:{:02}:{:02}.{:02}", hours, minutes, seconds, hundredths)
}

/// Parses a `HH:MM:SS.hh` string back into milliseconds.
///
/// Returns `None` for anything that does not match the stopwatch format.
/// Round-trips with [`format_time`] at hundredth-of-a-second resolution.
pub fn parse_time(text: &str) -> Option<i64> {
    let (clock, hundredths) = text.split_once('.')?;
    let mut parts = clock.splitn(3, ':');

    let hours: i64 = parts.next()?.parse().ok()?;
    let minutes: i64 = parts.next()?.parse().ok()?;
    let seconds: i64 = parts.next()?.parse().ok()?;
    if hundredths.len() != 2 || minutes >= 60 || seconds >= 60 {
        return None;
    }
    let hundredths: i64 = hundredths.parse().ok()?;

    Some(hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + hundredths * 10)
}

/// Formats an epoch-millisecond instant as `MM/DD/YYYY, HH:MM:SS` local time.
///
/// The layout matches the 24-hour en-US audit format used in the readings
/// table and export sheets. Instants that fall outside the representable
/// range render as an empty string rather than panicking.
pub fn format_datetime(ms: i64) -> String {
    match Local.timestamp_millis_opt(ms).single() {
        Some(dt) => dt.format("%m/%d/%Y, %H:%M:%S").to_string(),
        None => String::new(),
    }
}

/// Formats an epoch-millisecond instant as an ISO 8601 timestamp.
///
/// Used for the machine-readable `recorded_at` / start / end fields stored
/// on readings.
pub fn format_iso(ms: i64) -> String {
    match Local.timestamp_millis_opt(ms).single() {
        Some(dt) => dt.to_rfc3339(),
        None => String::new(),
    }
}
