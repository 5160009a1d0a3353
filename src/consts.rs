/// Locale used when neither the command line nor the config file names one
pub(crate) const DEFAULT_LOCALE: &str = "en-GB";

/// Vertical scroll offset past which the header turns sticky
pub(crate) const STICKY_THRESHOLD: f64 = 128.0;

pub(crate) const TITLE: &str = "Date Format Cheat Sheet";

/// Text shown in place of the options overlay after a copy
pub(crate) const COPIED: &str = "copied";
