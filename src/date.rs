//! `--date` canonicalisation.
//!
//! Users write dates however they like (`"2022-01-01 23:00"`, `"yesterday"`,
//! `"2 weeks ago"`); duplicity wants one fixed format.  Parsing is delegated
//! to the `dateparser` crate and the result is rendered as
//! `%Y-%m-%dT%H%M%S` in local time, so a naive input keeps its wall-clock
//! reading.  The same canonical form is used no matter which action consumes
//! the date.

use chrono::Local;

use crate::error::BackupError;

/// Parse a free-text date and render it in duplicity's time format.
pub fn canonicalize(input: &str) -> Result<String, BackupError> {
    let parsed = dateparser::parse_with_timezone(input, &Local)
        .map_err(|_| BackupError::InvalidDate(input.to_string()))?;

    Ok(parsed
        .with_timezone(&Local)
        .format("%Y-%m-%dT%H%M%S")
        .to_string())
}

// ─── Tests ────────────────────────────────────────────────────────────────────
