use serde_json::json;

use crate::surface::View;

/// Serialize the cards as a JSON array
pub(crate) fn sheet_json(view: &View) -> String {
    serde_json::to_string_pretty(&view.cards).unwrap_or_else(|_| "[]".to_string())
}

/// Serialize the supported locale list, flagging the active one
pub(crate) fn locales_json(locales: &[&str], current: &str) -> String {
    let output: Vec<serde_json::Value> = locales
        .iter()
        .map(|tag| {
            json!({
                "locale": tag,
                "current": *tag == current,
            })
        })
        .collect();
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FormatOption, StyleToken};
    use crate::consts::TITLE;
    use crate::surface::{Card, Header, LocaleInput};
    use serde_json::Value;

    #[test]
    fn sheet_json_lists_cards() {
        let option = FormatOption::time_only(StyleToken::Medium);
        let view = View {
            header: Header {
                title: TITLE,
                sticky: false,
                compact_title: None,
            },
            input: LocaleInput {
                value: "en-GB".to_string(),
                valid: true,
            },
            cards: vec![Card {
                index: 1,
                label: option.label(),
                output: "09:30:00".to_string(),
                options: option,
                json: option.to_json(),
                copied: false,
            }],
        };
        let parsed: Value = serde_json::from_str(&sheet_json(&view)).unwrap();
        let arr = parsed.as_array().unwrap();
        assert_eq!(arr.len(), 1);
        assert_eq!(arr[0]["index"], 1);
        assert_eq!(arr[0]["label"], "time: medium");
        assert_eq!(arr[0]["output"], "09:30:00");
        assert_eq!(arr[0]["options"], json!({"timeStyle": "medium"}));
        assert!(arr[0].get("json").is_none());
    }

    #[test]
    fn locales_json_marks_current() {
        let parsed: Value =
            serde_json::from_str(&locales_json(&["de-DE", "en-GB"], "en-GB")).unwrap();
        assert_eq!(parsed[0]["current"], false);
        assert_eq!(parsed[1]["locale"], "en-GB");
        assert_eq!(parsed[1]["current"], true);
    }
}
