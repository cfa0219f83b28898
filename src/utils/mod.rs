//! Some utility functions

use chrono::NaiveDateTime;

use crate::error::CommandError;

pub mod comparison;

/// The format users type timestamps in, e.g. `10-02-2025 2359`
pub const INPUT_TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H%M";
/// The format timestamps are displayed (and stored) in, e.g. `10 Feb 2025 23:59`
pub const DISPLAY_TIMESTAMP_FORMAT: &str = "%d %b %Y %H:%M";

/// Parse a timestamp typed as `DD-MM-YYYY HHMM`.
///
/// chrono alone would accept single-digit fields or signed years, so the shape is checked first.
pub fn parse_input_timestamp(input: &str) -> Result<NaiveDateTime, CommandError> {
    let malformed = || CommandError::MalformedTimestamp(input.to_string());

    if has_input_shape(input) == false {
        return Err(malformed());
    }
    NaiveDateTime::parse_from_str(input, INPUT_TIMESTAMP_FORMAT).map_err(|err| {
        log::debug!("Rejecting timestamp {:?}: {}", input, err);
        malformed()
    })
}

fn has_input_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 15
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'-',
            10 => *b == b' ',
            _ => b.is_ascii_digit(),
        })
}

/// Format a timestamp as `DD Mon YYYY HH:MM`
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(DISPLAY_TIMESTAMP_FORMAT).to_string()
}

/// Parse a timestamp written by [`format_timestamp`]
pub fn parse_display_timestamp(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, DISPLAY_TIMESTAMP_FORMAT).ok()
}
