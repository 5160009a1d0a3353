//! Locale handling
//!
//! Membership checks against the supported locale list, and the formatter
//! that turns a format option into a localized string.

pub(crate) mod formatter;
mod pattern;
mod supported;

use std::collections::HashSet;
use std::sync::LazyLock;

pub(crate) use formatter::{ChronoFormatter, DateTimeFormatter, iso_fallback};
pub(crate) use supported::SUPPORTED_LOCALES;

static SUPPORTED_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SUPPORTED_LOCALES.iter().copied().collect());

/// Exact, case-sensitive membership test. No trimming or normalization.
pub(crate) fn is_supported(candidate: &str) -> bool {
    SUPPORTED_SET.contains(candidate)
}
