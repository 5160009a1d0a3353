mod format;
mod json;
mod locales;
mod sheet;

pub(crate) use json::{locales_json, sheet_json};
pub(crate) use locales::print_locales;
pub(crate) use sheet::{SheetOptions, print_sheet, render_sheet};
