use comfy_table::Color;

use crate::output::format::{create_styled_table, header_cell, right_cell, styled_cell, tint};

/// Print the supported locales, highlighting the active one
pub(crate) fn print_locales(locales: &[&str], current: &str, use_color: bool) {
    let mut table = create_styled_table();
    if !use_color {
        table.force_no_tty();
    }
    table.set_header(vec![header_cell("#", use_color), header_cell("Locale", use_color)]);

    for (i, tag) in locales.iter().enumerate() {
        let active = *tag == current;
        let text = if active {
            format!("{tag} (current)")
        } else {
            tag.to_string()
        };
        table.add_row(vec![
            right_cell(&(i + 1).to_string()),
            styled_cell(&text, tint(Color::Blue, use_color && active), active),
        ]);
    }

    println!("\n  Supported locales\n");
    println!("{table}");
}
