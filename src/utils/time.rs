use std::sync::LazyLock;

use chrono::{DateTime, Utc};

use crate::error::AppError;

/// Captured on first use and never refreshed; every card shows this instant.
static LOADED_AT: LazyLock<DateTime<Utc>> = LazyLock::new(Utc::now);

pub(crate) fn loaded_at() -> DateTime<Utc> {
    *LOADED_AT
}

/// Parse an RFC 3339 timestamp (`2024-05-01T09:30:00Z`, `2024-05-01T11:30:00+02:00`)
pub(crate) fn parse_instant(s: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidTimestamp {
            input: s.to_string(),
        })
}
