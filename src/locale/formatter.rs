//! Locale-aware date/time formatting
//!
//! Each style token maps to a strftime pattern built from the locale's own
//! date and time layouts (`locale::pattern`). Month and weekday
//! names come from the POSIX locale data bundled with chrono.

use std::fmt::{self, Write};

use chrono::{DateTime, Local, Locale, SecondsFormat, TimeZone, Utc};

use crate::catalog::FormatOption;
use crate::error::AppError;
use crate::locale::pattern::{date_pattern, time_pattern};
use crate::utils::Timezone;

/// Host formatting facility.
///
/// Implementations may fail for identifiers they have no data for; callers
/// validate the locale before asking.
pub(crate) trait DateTimeFormatter {
    fn format(
        &self,
        locale: &str,
        option: FormatOption,
        instant: DateTime<Utc>,
    ) -> Result<String, AppError>;
}

/// ISO-8601 in UTC with millisecond precision: `2024-05-01T09:30:00.000Z`
pub(crate) fn iso_fallback(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Formats with chrono's localized strftime in a fixed display timezone
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChronoFormatter {
    timezone: Timezone,
}

impl ChronoFormatter {
    pub(crate) fn new(timezone: Timezone) -> Self {
        ChronoFormatter { timezone }
    }

    fn pattern(&self, locale: Locale, option: FormatOption) -> String {
        let date = option.date_style.map(|style| date_pattern(locale, style));
        let time = option
            .time_style
            .map(|style| time_pattern(locale, style, self.timezone.name()));
        match (date, time) {
            (Some(d), Some(t)) => format!("{d}, {t}"),
            (Some(d), None) => d,
            (None, Some(t)) => t,
            (None, None) => String::new(),
        }
    }
}

/// `en-GB` -> `en_GB`
fn posix_locale(tag: &str) -> Option<Locale> {
    let posix = tag.replace('-', "_");
    Locale::try_from(posix.as_str()).ok()
}

fn render<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    pattern: &str,
    locale: Locale,
) -> Result<String, fmt::Error>
where
    Tz::Offset: fmt::Display,
{
    let mut out = String::new();
    write!(out, "{}", dt.format_localized(pattern, locale))?;
    Ok(out)
}

impl DateTimeFormatter for ChronoFormatter {
    fn format(
        &self,
        locale: &str,
        option: FormatOption,
        instant: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let posix = posix_locale(locale).ok_or_else(|| AppError::MissingLocaleData {
            locale: locale.to_string(),
        })?;
        let pattern = self.pattern(posix, option);
        let rendered = match self.timezone {
            Timezone::Local => render(&instant.with_timezone(&Local), &pattern, posix),
            Timezone::Named(tz) => render(&instant.with_timezone(&tz), &pattern, posix),
        };
        rendered.map_err(|_| AppError::Format {
            locale: locale.to_string(),
        })
    }
}
