//! Format catalog
//!
//! Builds the ordered list of style combinations once per process.

pub(crate) mod types;

use std::sync::LazyLock;

use crate::error::AppError;

pub(crate) use types::{CatalogVariant, FormatOption, StyleToken};

static PAIRED: LazyLock<Vec<FormatOption>> = LazyLock::new(|| build(CatalogVariant::Paired));
static EXTENDED: LazyLock<Vec<FormatOption>> = LazyLock::new(|| build(CatalogVariant::Extended));

/// Build the entries for a variant.
///
/// The paired block walks time styles in the outer loop and date styles in
/// the inner loop, so consecutive rows share a time style.
pub(crate) fn build(variant: CatalogVariant) -> Vec<FormatOption> {
    let paired = StyleToken::ALL.into_iter().flat_map(|time| {
        StyleToken::ALL
            .into_iter()
            .map(move |date| FormatOption::paired(date, time))
    });

    match variant {
        CatalogVariant::Paired => paired.collect(),
        CatalogVariant::Extended => StyleToken::ALL
            .into_iter()
            .map(FormatOption::date_only)
            .chain(StyleToken::ALL.into_iter().map(FormatOption::time_only))
            .chain(paired)
            .collect(),
    }
}

/// The process-wide catalog for a variant
pub(crate) fn catalog(variant: CatalogVariant) -> &'static [FormatOption] {
    match variant {
        CatalogVariant::Paired => &PAIRED,
        CatalogVariant::Extended => &EXTENDED,
    }
}

/// Resolve a 1-based index or an exact label to a 0-based position
pub(crate) fn find_entry(entries: &[FormatOption], selector: &str) -> Result<usize, AppError> {
    let trimmed = selector.trim();
    if let Ok(n) = trimmed.parse::<usize>()
        && (1..=entries.len()).contains(&n)
    {
        return Ok(n - 1);
    }
    entries
        .iter()
        .position(|e| e.label() == trimmed)
        .ok_or_else(|| AppError::UnknownEntry {
            input: trimmed.to_string(),
            len: entries.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn paired_has_sixteen_entries() {
        let entries = build(CatalogVariant::Paired);
        assert_eq!(entries.len(), 16);
        assert!(entries.iter().all(|e| e.date_style.is_some() && e.time_style.is_some()));
    }

    #[test]
    fn extended_has_twenty_four_entries() {
        let entries = build(CatalogVariant::Extended);
        assert_eq!(entries.len(), 24);
        assert!(entries[..4].iter().all(|e| e.time_style.is_none()));
        assert!(entries[4..8].iter().all(|e| e.date_style.is_none()));
        assert_eq!(&entries[8..], build(CatalogVariant::Paired).as_slice());
    }

    #[test]
    fn labels_are_unique() {
        for variant in [CatalogVariant::Paired, CatalogVariant::Extended] {
            let entries = build(variant);
            let labels: HashSet<String> = entries.iter().map(FormatOption::label).collect();
            assert_eq!(labels.len(), entries.len(), "{variant:?}");
        }
    }

    #[test]
    fn paired_order_varies_date_fastest() {
        let labels: Vec<String> = build(CatalogVariant::Paired)
            .iter()
            .take(5)
            .map(FormatOption::label)
            .collect();
        assert_eq!(
            labels,
            [
                "short, short",
                "medium, short",
                "long, short",
                "full, short",
                "short, medium"
            ]
        );
    }

    #[test]
    fn build_is_stable() {
        assert_eq!(build(CatalogVariant::Extended), build(CatalogVariant::Extended));
        assert_eq!(catalog(CatalogVariant::Paired), build(CatalogVariant::Paired).as_slice());
    }

    #[test]
    fn catalog_is_shared() {
        let a = catalog(CatalogVariant::Extended).as_ptr();
        let b = catalog(CatalogVariant::Extended).as_ptr();
        assert_eq!(a, b);
    }

    #[test]
    fn find_entry_by_index() {
        let entries = catalog(CatalogVariant::Paired);
        assert_eq!(find_entry(entries, "1").unwrap(), 0);
        assert_eq!(find_entry(entries, " 16 ").unwrap(), 15);
    }

    #[test]
    fn find_entry_by_label() {
        let entries = catalog(CatalogVariant::Extended);
        assert_eq!(find_entry(entries, "time: short").unwrap(), 4);
        assert_eq!(find_entry(entries, "medium, short").unwrap(), 9);
    }

    #[test]
    fn find_entry_rejects_out_of_range() {
        let entries = catalog(CatalogVariant::Paired);
        assert!(find_entry(entries, "0").is_err());
        assert!(find_entry(entries, "17").is_err());
        let err = find_entry(entries, "tiny").unwrap_err();
        assert!(err.to_string().contains("tiny"));
    }
}
