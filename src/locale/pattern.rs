//! Style patterns derived from a locale's `LC_TIME` data
//!
//! `D_FMT` and `T_FMT` give the field order, separators and clock of the
//! locale's numeric forms. The longer date styles keep that order and swap
//! in month and weekday names; the shorter time style drops the seconds.

use chrono::Locale;
use pure_rust_locales::locale_match;

use crate::catalog::StyleToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Year,
    Month,
    Day,
    Weekday,
    Hour,
    Second,
    Zone,
    Other,
}

impl Field {
    fn of(conv: char) -> Self {
        match conv {
            'Y' | 'y' | 'C' | 'G' | 'g' => Field::Year,
            'm' | 'b' | 'B' | 'h' => Field::Month,
            'd' | 'e' => Field::Day,
            'a' | 'A' | 'u' | 'w' => Field::Weekday,
            'H' | 'I' | 'k' | 'l' => Field::Hour,
            'S' => Field::Second,
            'Z' | 'z' => Field::Zone,
            _ => Field::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Field {
        field: Field,
        conv: char,
        spec: String,
    },
    Literal(String),
}

impl Piece {
    fn is(&self, want: Field) -> bool {
        matches!(self, Piece::Field { field, .. } if *field == want)
    }

    fn conv(&self) -> Option<char> {
        match self {
            Piece::Field { conv, .. } => Some(*conv),
            Piece::Literal(_) => None,
        }
    }

    /// Literal text that reads as a word suffix (`月`, `년 `, `ren`)
    fn is_word(&self) -> bool {
        matches!(self, Piece::Literal(s) if s.chars().any(char::is_alphabetic))
    }
}

fn push_literal(pieces: &mut Vec<Piece>, text: &str) {
    if text.is_empty() {
        return;
    }
    match pieces.last_mut() {
        Some(Piece::Literal(prev)) => prev.push_str(text),
        _ => pieces.push(Piece::Literal(text.to_string())),
    }
}

/// Split a strftime pattern into fields and literals.
///
/// Composite conversions are expanded. `%O` and `%E` modifiers are dropped,
/// chrono has no alternative digits or eras.
fn parse(fmt: &str) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut chars = fmt.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            let mut buf = [0; 4];
            push_literal(&mut pieces, c.encode_utf8(&mut buf));
            continue;
        }
        let mut flag = None;
        let mut next = chars.next();
        while let Some(m @ ('O' | 'E' | '-' | '_' | '0')) = next {
            if m != 'O' && m != 'E' {
                flag = Some(m);
            }
            next = chars.next();
        }
        let Some(conv) = next else {
            push_literal(&mut pieces, "%%");
            break;
        };
        match conv {
            '%' => push_literal(&mut pieces, "%%"),
            'T' => pieces.extend(parse("%H:%M:%S")),
            'R' => pieces.extend(parse("%H:%M")),
            'r' => pieces.extend(parse("%I:%M:%S %p")),
            'D' => pieces.extend(parse("%m/%d/%y")),
            'F' => pieces.extend(parse("%Y-%m-%d")),
            _ => {
                let spec = match flag {
                    Some(f) => format!("%{f}{conv}"),
                    None => format!("%{conv}"),
                };
                pieces.push(Piece::Field {
                    field: Field::of(conv),
                    conv,
                    spec,
                });
            }
        }
    }
    pieces
}

fn join(pieces: &[Piece]) -> String {
    pieces
        .iter()
        .map(|p| match p {
            Piece::Field { spec, .. } => spec.as_str(),
            Piece::Literal(s) => s.as_str(),
        })
        .collect()
}

fn without(pieces: Vec<Piece>, drop: Field) -> Vec<Piece> {
    let mut out = Vec::with_capacity(pieces.len());
    for piece in pieces {
        match piece {
            p if p.is(drop) => {}
            Piece::Literal(s) => push_literal(&mut out, &s),
            p => out.push(p),
        }
    }
    out
}

/// Strip separator-only literals at either end and trim edge whitespace
fn trim_edges(mut pieces: Vec<Piece>) -> Vec<Piece> {
    while pieces.first().is_some_and(|p| p.conv().is_none() && !p.is_word()) {
        pieces.remove(0);
    }
    while pieces.last().is_some_and(|p| p.conv().is_none() && !p.is_word()) {
        pieces.pop();
    }
    if let Some(Piece::Literal(s)) = pieces.first_mut() {
        *s = s.trim_start().to_string();
    }
    if let Some(Piece::Literal(s)) = pieces.last_mut() {
        *s = s.trim_end().to_string();
    }
    pieces
}

fn is_separator(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_punctuation() || c.is_whitespace())
}

pub(crate) fn date_pattern(locale: Locale, style: StyleToken) -> String {
    date_pattern_from(locale_match!(locale => LC_TIME::D_FMT), style)
}

pub(crate) fn time_pattern(locale: Locale, style: StyleToken, zone: Option<&str>) -> String {
    time_pattern_from(locale_match!(locale => LC_TIME::T_FMT), style, zone)
}

fn date_pattern_from(d_fmt: &str, style: StyleToken) -> String {
    let pieces = parse(d_fmt);
    if style == StyleToken::Short {
        return join(&pieces);
    }

    let pieces = trim_edges(without(pieces, Field::Weekday));
    let month = pieces.iter().position(|p| p.is(Field::Month));
    let numeric = month.is_some_and(|i| pieces[i].conv() == Some('m'));
    // 2024年5月1日: the suffix already names the month
    let suffixed =
        numeric && month.is_some_and(|i| pieces.get(i + 1).is_some_and(Piece::is_word));
    let spaced = numeric && !suffixed;
    let medium = style == StyleToken::Medium;

    let body: String = pieces
        .iter()
        .map(|p| match p {
            Piece::Literal(s) if spaced && is_separator(s) => " ".to_string(),
            Piece::Literal(s) => s.clone(),
            Piece::Field {
                field: Field::Year, ..
            } => "%Y".to_string(),
            Piece::Field {
                field: Field::Day, ..
            } => (if suffixed && medium { "%d" } else { "%-d" }).to_string(),
            Piece::Field {
                field: Field::Month,
                ..
            } => {
                let spec = match (suffixed, medium) {
                    (true, true) => "%m",
                    (true, false) => "%-m",
                    (false, true) => "%b",
                    (false, false) => "%B",
                };
                spec.to_string()
            }
            Piece::Field { spec, .. } => spec.clone(),
        })
        .collect();

    if style != StyleToken::Full {
        return body;
    }
    let year_first = pieces
        .iter()
        .find(|p| p.conv().is_some())
        .is_some_and(|p| p.is(Field::Year));
    if year_first {
        format!("{body} %A")
    } else {
        format!("%A, {body}")
    }
}

fn time_pattern_from(t_fmt: &str, style: StyleToken, zone: Option<&str>) -> String {
    let pieces = trim_edges(without(parse(t_fmt), Field::Zone));
    match style {
        StyleToken::Short => join(&short_time(pieces)),
        StyleToken::Medium => join(&pieces),
        StyleToken::Long => format!("{} %Z", join(&pieces)),
        StyleToken::Full => match zone {
            Some(name) => format!("{} %Z ({name})", join(&pieces)),
            None => format!("{} %Z", join(&pieces)),
        },
    }
}

/// Drop the seconds with their separator or unit suffix
fn short_time(mut pieces: Vec<Piece>) -> Vec<Piece> {
    if let Some(i) = pieces.iter().position(|p| p.is(Field::Second)) {
        pieces.remove(i);
        if i > 0 && pieces[i - 1].conv().is_none() && !pieces[i - 1].is_word() {
            pieces.remove(i - 1);
        } else if pieces.get(i).is_some_and(Piece::is_word) {
            pieces.remove(i);
        }
    }
    let pieces = pieces
        .into_iter()
        .map(|p| match p {
            Piece::Field {
                field: Field::Hour,
                conv: 'I',
                ..
            } => Piece::Field {
                field: Field::Hour,
                conv: 'I',
                spec: "%-I".to_string(),
            },
            p => p,
        })
        .collect();
    trim_edges(pieces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StyleToken::{Full, Long, Medium, Short};

    #[test]
    fn day_first_locale() {
        assert_eq!(date_pattern_from("%d/%m/%y", Short), "%d/%m/%y");
        assert_eq!(date_pattern_from("%d/%m/%y", Medium), "%-d %b %Y");
        assert_eq!(date_pattern_from("%d.%m.%Y", Long), "%-d %B %Y");
        assert_eq!(date_pattern_from("%d/%m/%Y", Full), "%A, %-d %B %Y");
    }

    #[test]
    fn month_first_locale() {
        assert_eq!(date_pattern_from("%m/%d/%Y", Long), "%B %-d %Y");
        assert_eq!(time_pattern_from("%I:%M:%S %p", Short, None), "%-I:%M %p");
        assert_eq!(time_pattern_from("%r", Medium, None), "%I:%M:%S %p");
    }

    #[test]
    fn year_first_with_unit_suffixes() {
        let ja = "%Y年%m月%d日";
        assert_eq!(date_pattern_from(ja, Medium), "%Y年%m月%d日");
        assert_eq!(date_pattern_from(ja, Long), "%Y年%-m月%-d日");
        assert_eq!(date_pattern_from(ja, Full), "%Y年%-m月%-d日 %A");
        assert_eq!(time_pattern_from("%H時%M分%S秒", Short, None), "%H時%M分");
        assert_eq!(time_pattern_from("%H시 %M분 %S초", Short, None), "%H시 %M분");
    }

    #[test]
    fn year_first_with_separators() {
        assert_eq!(date_pattern_from("%Y-%m-%d", Long), "%Y %B %-d");
        assert_eq!(date_pattern_from("%Y-%m-%d", Full), "%Y %B %-d %A");
    }

    #[test]
    fn textual_month_keeps_literals() {
        assert_eq!(date_pattern_from("%A, %d ta %b, %Y", Long), "%-d ta %B, %Y");
        assert_eq!(date_pattern_from("%a, %Y.eko %bren %da", Medium), "%Y.eko %bren %-da");
    }

    #[test]
    fn alternative_digits_are_dropped() {
        assert_eq!(date_pattern_from("%Oy/%Om/%Od", Short), "%y/%m/%d");
        assert_eq!(date_pattern_from("%d/%m/%Ey", Short), "%d/%m/%y");
        assert_eq!(time_pattern_from("%OH:%OM:%OS", Medium, None), "%H:%M:%S");
    }

    #[test]
    fn zone_is_added_once() {
        assert_eq!(time_pattern_from("%Z %I:%M:%S %p", Medium, None), "%I:%M:%S %p");
        assert_eq!(time_pattern_from("%T %Z", Long, None), "%H:%M:%S %Z");
        assert_eq!(
            time_pattern_from("%T", Full, Some("Asia/Tokyo")),
            "%H:%M:%S %Z (Asia/Tokyo)"
        );
        assert_eq!(time_pattern_from("kl. %H.%M %z", Short, None), "kl. %H.%M");
    }

    #[test]
    fn reads_locale_data() {
        assert_eq!(date_pattern(Locale::en_US, Short), "%m/%d/%Y");
        assert_eq!(time_pattern(Locale::en_GB, Short, None), "%H:%M");
        assert_eq!(time_pattern(Locale::ja_JP, Medium, None), "%H時%M分%S秒");
    }
}
