use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Invalid timestamp \"{input}\" (expected RFC 3339, e.g. 2024-05-01T09:30:00Z)")]
    InvalidTimestamp { input: String },

    #[error("Unknown entry \"{input}\" (expected a number from 1 to {len} or an exact style label)")]
    UnknownEntry { input: String, len: usize },

    #[error("No formatting data for locale: {locale}")]
    MissingLocaleData { locale: String },

    #[error("Failed to format date for locale {locale}")]
    Format { locale: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Jq(#[from] JqError),
}

#[derive(Debug, Error)]
pub(crate) enum JqError {
    #[error("jq not found. Please install jq to use --jq option.")]
    NotFound,

    #[error("Failed to run jq: {0}")]
    Io(std::io::Error),

    #[error("Invalid UTF-8 from jq: {0}")]
    Utf8(std::string::FromUtf8Error),

    #[error("jq error: {0}")]
    Filter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_timezone() {
        let e = AppError::InvalidTimezone {
            input: "Mars/Olympus".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid timezone: Mars/Olympus");
    }

    #[test]
    fn app_error_display_timestamp() {
        let e = AppError::InvalidTimestamp {
            input: "yesterday".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid timestamp "yesterday" (expected RFC 3339, e.g. 2024-05-01T09:30:00Z)"#
        );
    }

    #[test]
    fn app_error_display_unknown_entry() {
        let e = AppError::UnknownEntry {
            input: "99".to_string(),
            len: 24,
        };
        assert_eq!(
            e.to_string(),
            r#"Unknown entry "99" (expected a number from 1 to 24 or an exact style label)"#
        );
    }

    #[test]
    fn jq_error_not_found() {
        assert_eq!(
            JqError::NotFound.to_string(),
            "jq not found. Please install jq to use --jq option."
        );
    }

    #[test]
    fn app_error_from_jq_error() {
        let jq = JqError::Filter("bad filter".to_string());
        let app: AppError = jq.into();
        assert_eq!(app.to_string(), "jq error: bad filter");
    }
}
