//! CLI subcommand definitions

use clap::Subcommand;

#[derive(Debug, Clone, Subcommand)]
pub(crate) enum Commands {
    /// Show the format sheet (default)
    Sheet,
    /// List supported locales
    Locales,
    /// Copy one entry's options JSON to the clipboard
    Copy {
        /// Entry number (1-based) or exact style label, e.g. "long, short"
        entry: String,
    },
    /// Drive the sheet from stdin: locale, scroll, copy, leave
    Interactive,
}
