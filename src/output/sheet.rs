use std::fmt::Write;

use comfy_table::{Cell, Color};

use crate::consts::COPIED;
use crate::output::format::{create_styled_table, header_cell, right_cell, styled_cell, tint};
use crate::surface::{Header, LocaleInput, View};

#[derive(Debug, Clone, Copy)]
pub(crate) struct SheetOptions {
    pub(crate) use_color: bool,
    /// Show the options JSON column
    pub(crate) show_json: bool,
}

fn header_lines(out: &mut String, header: &Header, use_color: bool) {
    match header.compact_title.filter(|_| header.sticky) {
        Some(compact) => {
            let rule = "─".repeat(compact.chars().count() + 4);
            let _ = writeln!(out, "  {compact}\n  {rule}");
        }
        None if use_color => {
            let _ = writeln!(out, "\n  \x1b[1m{}\x1b[0m\n", header.title);
        }
        None => {
            let _ = writeln!(out, "\n  {}\n", header.title);
        }
    }
}

fn locale_line(out: &mut String, input: &LocaleInput, use_color: bool) {
    let (mark, color, note) = if input.valid {
        ("✓", "\x1b[34m", "")
    } else {
        ("✗", "\x1b[31m", "  (unsupported, showing ISO-8601)")
    };
    if use_color {
        let _ = writeln!(out, "  Locale: {color}{} {mark}\x1b[0m{note}\n", input.value);
    } else {
        let _ = writeln!(out, "  Locale: {} {mark}{note}\n", input.value);
    }
}

/// Render the whole sheet: header, locale input, and one row per card
pub(crate) fn render_sheet(view: &View, opts: SheetOptions) -> String {
    let c = opts.use_color;
    let mut out = String::new();
    header_lines(&mut out, &view.header, c);
    locale_line(&mut out, &view.input, c);

    let mut table = create_styled_table();
    if !c {
        table.force_no_tty();
    }
    let mut header = vec![
        header_cell("#", c),
        header_cell("Style", c),
        header_cell("Output", c),
    ];
    if opts.show_json {
        header.push(header_cell("Options", c));
    }
    table.set_header(header);

    for card in &view.cards {
        let label = if card.copied && !opts.show_json {
            styled_cell(&format!("{} · {COPIED}", card.label), tint(Color::Green, c), true)
        } else {
            Cell::new(&card.label)
        };
        let mut row = vec![
            right_cell(&card.index.to_string()),
            label,
            Cell::new(&card.output),
        ];
        if opts.show_json {
            row.push(if card.copied {
                styled_cell(COPIED, tint(Color::Green, c), true)
            } else {
                styled_cell(&card.json, tint(Color::DarkGrey, c), false)
            });
        }
        table.add_row(row);
    }

    let _ = writeln!(out, "{table}");
    out
}

pub(crate) fn print_sheet(view: &View, opts: SheetOptions) {
    print!("{}", render_sheet(view, opts));
}
