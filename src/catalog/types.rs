//! Format option types
//!
//! A format option mirrors the `{ dateStyle, timeStyle }` object handed to a
//! locale-aware date formatter.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Formatting verbosity for the date or time component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum StyleToken {
    Short,
    Medium,
    Long,
    Full,
}

impl StyleToken {
    /// All tokens in declared order
    pub(crate) const ALL: [StyleToken; 4] = [
        StyleToken::Short,
        StyleToken::Medium,
        StyleToken::Long,
        StyleToken::Full,
    ];

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            StyleToken::Short => "short",
            StyleToken::Medium => "medium",
            StyleToken::Long => "long",
            StyleToken::Full => "full",
        }
    }
}

impl fmt::Display for StyleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entry: an optional date style and an optional time style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FormatOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) date_style: Option<StyleToken>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) time_style: Option<StyleToken>,
}

impl FormatOption {
    pub(crate) fn paired(date: StyleToken, time: StyleToken) -> Self {
        FormatOption {
            date_style: Some(date),
            time_style: Some(time),
        }
    }

    pub(crate) fn date_only(date: StyleToken) -> Self {
        FormatOption {
            date_style: Some(date),
            time_style: None,
        }
    }

    pub(crate) fn time_only(time: StyleToken) -> Self {
        FormatOption {
            date_style: None,
            time_style: Some(time),
        }
    }

    /// Display label, also the identity used for copy feedback.
    ///
    /// Paired entries join both tokens with ", " (date first). Single-field
    /// entries name their field so `date: short` and `time: short` stay distinct.
    pub(crate) fn label(&self) -> String {
        match (self.date_style, self.time_style) {
            (Some(date), Some(time)) => format!("{date}, {time}"),
            (Some(date), None) => format!("date: {date}"),
            (None, Some(time)) => format!("time: {time}"),
            (None, None) => String::new(),
        }
    }

    /// Compact JSON, absent fields omitted: `{"dateStyle":"short","timeStyle":"long"}`
    pub(crate) fn to_json(&self) -> String {
        // Two optional unit enums always serialize
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Which list of combinations the sheet shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum CatalogVariant {
    /// Every date style paired with every time style (16 entries)
    Paired,
    /// Date-only and time-only entries followed by every pair (24 entries)
    #[default]
    Extended,
}
