//! Display surface
//!
//! Owns the UI state (sticky header, locale text, copied label) and turns it
//! into a [`View`] that the output layer prints. All mutation happens through
//! the event methods here.

pub(crate) mod clipboard;
pub(crate) mod scroll;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::FormatOption;
use crate::consts::{STICKY_THRESHOLD, TITLE};
use crate::error::AppError;
use crate::locale::{DateTimeFormatter, is_supported, iso_fallback};
use crate::utils::debug_enabled;

pub(crate) use clipboard::{Clipboard, SystemClipboard};
pub(crate) use scroll::{ScrollObserver, Subscription, Viewport};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct UiState {
    pub(crate) sticky: bool,
    pub(crate) locale: String,
    /// Label of the most recently copied entry, empty when none
    pub(crate) copied: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Header {
    pub(crate) title: &'static str,
    pub(crate) sticky: bool,
    /// Duplicate title pinned in the header, only while sticky
    pub(crate) compact_title: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LocaleInput {
    pub(crate) value: String,
    pub(crate) valid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Card {
    /// 1-based position in the catalog
    pub(crate) index: usize,
    pub(crate) label: String,
    pub(crate) output: String,
    pub(crate) options: FormatOption,
    #[serde(skip)]
    pub(crate) json: String,
    #[serde(skip)]
    pub(crate) copied: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct View {
    pub(crate) header: Header,
    pub(crate) input: LocaleInput,
    pub(crate) cards: Vec<Card>,
}

pub(crate) struct Surface<'a> {
    state: UiState,
    entries: &'static [FormatOption],
    instant: DateTime<Utc>,
    formatter: &'a dyn DateTimeFormatter,
    clipboard: &'a dyn Clipboard,
    observer: ScrollObserver,
    subscription: Option<Subscription>,
    sticky_changes: usize,
}

impl<'a> Surface<'a> {
    pub(crate) fn new(
        entries: &'static [FormatOption],
        instant: DateTime<Utc>,
        locale: impl Into<String>,
        formatter: &'a dyn DateTimeFormatter,
        clipboard: &'a dyn Clipboard,
    ) -> Self {
        Surface {
            state: UiState {
                locale: locale.into(),
                ..UiState::default()
            },
            entries,
            instant,
            formatter,
            clipboard,
            observer: ScrollObserver::new(STICKY_THRESHOLD),
            subscription: None,
            sticky_changes: 0,
        }
    }

    pub(crate) fn state(&self) -> &UiState {
        &self.state
    }

    pub(crate) fn entries(&self) -> &'static [FormatOption] {
        self.entries
    }

    /// Number of times the sticky flag actually flipped
    pub(crate) fn sticky_changes(&self) -> usize {
        self.sticky_changes
    }

    pub(crate) fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Locale input changed; the text is taken verbatim
    pub(crate) fn set_locale(&mut self, value: impl Into<String>) {
        self.state.locale = value.into();
    }

    /// Start listening to viewport events. Mounting twice keeps one listener.
    pub(crate) fn mount(&mut self, viewport: &mut Viewport) {
        if !self.is_mounted() {
            self.subscription = Some(viewport.subscribe());
        }
    }

    pub(crate) fn unmount(&mut self, viewport: &mut Viewport) {
        if let Some(sub) = self.subscription.take() {
            viewport.unsubscribe(sub.id);
        }
    }

    /// Drain queued viewport events; returns true if the sticky state changed
    pub(crate) fn pump(&mut self) -> bool {
        let Some(sub) = &self.subscription else {
            return false;
        };
        let mut changed = false;
        for event in sub.events.try_iter() {
            if let Some(sticky) = self.observer.handle(event, self.state.sticky) {
                self.state.sticky = sticky;
                self.sticky_changes += 1;
                changed = true;
            }
        }
        changed
    }

    /// Primary activation of a card's overlay (0-based position)
    pub(crate) fn copy(&mut self, position: usize) -> Result<(), AppError> {
        let option = self
            .entries
            .get(position)
            .ok_or_else(|| AppError::UnknownEntry {
                input: (position + 1).to_string(),
                len: self.entries.len(),
            })?;
        self.state.copied = option.label();
        self.clipboard.write_text(option.to_json());
        Ok(())
    }

    /// Pointer left a card; clears the feedback whichever card set it
    pub(crate) fn pointer_leave(&mut self) {
        self.state.copied.clear();
    }

    pub(crate) fn render(&self) -> View {
        let valid = is_supported(&self.state.locale);
        let fallback = iso_fallback(self.instant);

        let cards = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let label = option.label();
                let output = if valid {
                    self.format_entry(*option, &fallback)
                } else {
                    fallback.clone()
                };
                Card {
                    index: i + 1,
                    copied: label == self.state.copied,
                    label,
                    output,
                    options: *option,
                    json: option.to_json(),
                }
            })
            .collect();

        View {
            header: Header {
                title: TITLE,
                sticky: self.state.sticky,
                compact_title: self.state.sticky.then_some(TITLE),
            },
            input: LocaleInput {
                value: self.state.locale.clone(),
                valid,
            },
            cards,
        }
    }

    fn format_entry(&self, option: FormatOption, fallback: &str) -> String {
        match self.formatter.format(&self.state.locale, option, self.instant) {
            Ok(s) => s,
            Err(e) => {
                if debug_enabled() {
                    eprintln!("[DEBUG] {e}; showing ISO time for \"{}\"", option.label());
                }
                fallback.to_string()
            }
        }
    }
}
