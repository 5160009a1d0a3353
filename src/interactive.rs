//! Line-driven session over the display surface
//!
//! Each input line is one frame: its events are dispatched, then the
//! viewport signals a frame and the surface applies any coalesced scroll
//! input. The sheet is redrawn only when something visible changed.

use std::io::{BufRead, Write};

use crate::catalog::find_entry;
use crate::error::AppError;
use crate::output::{SheetOptions, render_sheet};
use crate::surface::{Surface, Viewport};
use crate::utils::debug_enabled;

const HELP: &str = "\
Commands:
  locale <code>     set the locale text (verbatim, may be empty)
  scroll <y>...     scroll to one or more offsets within this frame
  copy <entry>      copy an entry's options (number or label)
  leave             pointer left the card, clears the copied marker
  frame             advance one frame (a blank line does the same)
  show              redraw the sheet
  help              show this help
  quit              end the session";

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SessionCommand {
    Locale(String),
    Scroll(Vec<f64>),
    Copy(String),
    Leave,
    Show,
    Help,
    Quit,
    /// `frame` or a blank line: only advance a frame
    Frame,
}

impl SessionCommand {
    pub(crate) fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim_start();
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
        match cmd.trim_end() {
            "" | "frame" => Ok(SessionCommand::Frame),
            "locale" => Ok(SessionCommand::Locale(rest.to_string())),
            "scroll" => {
                let offsets = rest
                    .split_whitespace()
                    .map(|raw| {
                        raw.parse::<f64>()
                            .map_err(|_| format!("Invalid scroll offset \"{raw}\""))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                if offsets.is_empty() {
                    return Err("scroll needs at least one offset".to_string());
                }
                Ok(SessionCommand::Scroll(offsets))
            }
            "copy" => {
                let entry = rest.trim();
                if entry.is_empty() {
                    return Err("copy needs an entry number or label".to_string());
                }
                Ok(SessionCommand::Copy(entry.to_string()))
            }
            "leave" => Ok(SessionCommand::Leave),
            "show" => Ok(SessionCommand::Show),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" => Ok(SessionCommand::Quit),
            other => Err(format!("Unknown command \"{other}\" (type help)")),
        }
    }
}

/// Mount the surface, process `input` until quit or EOF, then unmount
pub(crate) fn run_session<R: BufRead, W: Write>(
    surface: &mut Surface<'_>,
    input: R,
    mut out: W,
    opts: SheetOptions,
) -> Result<(), AppError> {
    let mut viewport = Viewport::default();
    surface.mount(&mut viewport);
    let result = drive(surface, &mut viewport, input, &mut out, opts);
    surface.unmount(&mut viewport);
    result
}

fn drive<R: BufRead, W: Write>(
    surface: &mut Surface<'_>,
    viewport: &mut Viewport,
    input: R,
    out: &mut W,
    opts: SheetOptions,
) -> Result<(), AppError> {
    write!(out, "{}", render_sheet(&surface.render(), opts))?;
    writeln!(out, "Type help for commands.")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let command = match SessionCommand::parse(&line) {
            Ok(command) => command,
            Err(msg) => {
                writeln!(out, "{msg}")?;
                continue;
            }
        };

        let mut redraw = false;
        match command {
            SessionCommand::Locale(value) => {
                surface.set_locale(value);
                redraw = true;
            }
            SessionCommand::Scroll(offsets) => {
                for y in offsets {
                    viewport.scroll_to(y);
                }
            }
            SessionCommand::Copy(entry) => {
                match find_entry(surface.entries(), &entry).and_then(|p| surface.copy(p)) {
                    Ok(()) => redraw = true,
                    Err(e) => writeln!(out, "{e}")?,
                }
            }
            SessionCommand::Leave => {
                surface.pointer_leave();
                redraw = true;
            }
            SessionCommand::Show => redraw = true,
            SessionCommand::Help => writeln!(out, "{HELP}")?,
            SessionCommand::Quit => break,
            SessionCommand::Frame => {}
        }

        viewport.frame();
        if surface.pump() {
            redraw = true;
        }
        if redraw {
            write!(out, "{}", render_sheet(&surface.render(), opts))?;
        }
        out.flush()?;
    }

    if debug_enabled() {
        eprintln!("[DEBUG] sticky header changed {} times", surface.sticky_changes());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogVariant, catalog};
    use crate::consts::TITLE;
    use crate::locale::ChronoFormatter;
    use crate::surface::Clipboard;
    use crate::utils::Timezone;
    use chrono::{DateTime, Utc};
    use std::cell::RefCell;
    use std::io::Cursor;

    #[derive(Default)]
    struct RecordingClipboard {
        writes: RefCell<Vec<String>>,
    }

    impl Clipboard for RecordingClipboard {
        fn write_text(&self, text: String) {
            self.writes.borrow_mut().push(text);
        }
    }

    const OPTS: SheetOptions = SheetOptions {
        use_color: false,
        show_json: true,
    };

    fn session(script: &str, clipboard: &RecordingClipboard) -> (String, bool, usize) {
        let formatter = ChronoFormatter::new(Timezone::Named(chrono_tz::UTC));
        let instant = "2024-05-01T09:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let mut surface = Surface::new(
            catalog(CatalogVariant::Paired),
            instant,
            "en-GB",
            &formatter,
            clipboard,
        );
        let mut out = Vec::new();
        run_session(&mut surface, Cursor::new(script), &mut out, OPTS).unwrap();
        (
            String::from_utf8(out).unwrap(),
            surface.is_mounted(),
            surface.sticky_changes(),
        )
    }

    #[test]
    fn parse_commands() {
        assert_eq!(
            SessionCommand::parse("locale de-DE").unwrap(),
            SessionCommand::Locale("de-DE".to_string())
        );
        assert_eq!(
            SessionCommand::parse("locale").unwrap(),
            SessionCommand::Locale(String::new())
        );
        assert_eq!(
            SessionCommand::parse("scroll 10 200.5").unwrap(),
            SessionCommand::Scroll(vec![10.0, 200.5])
        );
        assert_eq!(
            SessionCommand::parse("copy long, short").unwrap(),
            SessionCommand::Copy("long, short".to_string())
        );
        assert_eq!(SessionCommand::parse("").unwrap(), SessionCommand::Frame);
        assert_eq!(SessionCommand::parse("frame").unwrap(), SessionCommand::Frame);
        assert_eq!(SessionCommand::parse("leave").unwrap(), SessionCommand::Leave);
        assert_eq!(SessionCommand::parse("exit").unwrap(), SessionCommand::Quit);
    }

    #[test]
    fn locale_text_is_verbatim() {
        assert_eq!(
            SessionCommand::parse("locale  en-GB ").unwrap(),
            SessionCommand::Locale(" en-GB ".to_string())
        );
    }

    #[test]
    fn parse_errors() {
        assert!(SessionCommand::parse("scroll").is_err());
        assert!(SessionCommand::parse("scroll up").is_err());
        assert!(SessionCommand::parse("copy").is_err());
        assert!(SessionCommand::parse("dance").unwrap_err().contains("dance"));
    }

    #[test]
    fn copy_then_leave() {
        let clipboard = RecordingClipboard::default();
        let (out, mounted, _) = session("copy 1\nleave\nquit\n", &clipboard);
        assert!(!mounted);
        assert_eq!(
            clipboard.writes.borrow().as_slice(),
            [r#"{"dateStyle":"short","timeStyle":"short"}"#]
        );
        // initial, after copy, after leave
        assert_eq!(out.matches("Locale: en-GB").count(), 3);
        assert_eq!(out.matches("│ copied").count(), 1);
    }

    #[test]
    fn scroll_burst_is_one_transition() {
        let clipboard = RecordingClipboard::default();
        let (out, _, changes) = session("scroll 150 300 600\nscroll 700\nscroll 0\n", &clipboard);
        assert_eq!(changes, 2);
        assert!(out.contains(&format!("  {TITLE}\n  ─")));
    }

    #[test]
    fn unsupported_locale_redraws_with_fallback() {
        let clipboard = RecordingClipboard::default();
        let (out, _, _) = session("locale xx-XX\n", &clipboard);
        assert!(out.contains("Locale: xx-XX ✗"));
        assert!(out.contains("2024-05-01T09:30:00.000Z"));
    }

    #[test]
    fn bad_lines_are_reported_and_skipped() {
        let clipboard = RecordingClipboard::default();
        let (out, _, _) = session("copy 99\nfly\nquit\n", &clipboard);
        assert!(out.contains("Unknown entry \"99\""));
        assert!(out.contains("Unknown command \"fly\""));
        assert!(clipboard.writes.borrow().is_empty());
    }
}
