//! Field selection: raw [`CountryRecord`] -> flat [`ExtractedCountry`].
//!
//! Missing fields never fail; they become empty strings so every rendered block
//! carries the full schema.

use crate::models::{CountryRecord, Currency, ExtractedCountry};

/// Language codes tried, in order, when picking the local (native) country name.
pub const DEFAULT_LANGUAGE_PRIORITY: [&str; 7] = ["hin", "jpn", "deu", "fra", "spa", "ara", "zho"];

/// Extract using [`DEFAULT_LANGUAGE_PRIORITY`].
pub fn extract(record: &CountryRecord) -> ExtractedCountry {
    extract_with_priority(record, &DEFAULT_LANGUAGE_PRIORITY)
}

/// Extract the XML-relevant fields of one record.
///
/// - `local_name`: the `official` native name of the first language in `priority`
///   present in the record; otherwise the first native name in document order.
/// - `currency`: the first currency in document order, keyed by its code.
pub fn extract_with_priority<S: AsRef<str>>(
    record: &CountryRecord,
    priority: &[S],
) -> ExtractedCountry {
    let name = &record.name;
    ExtractedCountry {
        code: record.cca2.clone().unwrap_or_default(),
        original_name: name.official.clone().unwrap_or_default(),
        common_name: name.common.clone().unwrap_or_default(),
        local_name: local_name(record, priority),
        currency: primary_currency(record),
    }
}

fn local_name<S: AsRef<str>>(record: &CountryRecord, priority: &[S]) -> String {
    let native = &record.name.native_name;
    let chosen = priority
        .iter()
        .find_map(|lang| native.get(lang.as_ref()))
        .or_else(|| native.first().map(|(_, v)| v));
    chosen.and_then(|n| n.official.clone()).unwrap_or_default()
}

fn primary_currency(record: &CountryRecord) -> Currency {
    match record.currencies.first() {
        Some((code, info)) => Currency {
            code: code.clone(),
            name: info.name.clone().unwrap_or_default(),
            symbol: info.symbol.clone().unwrap_or_default(),
        },
        None => Currency::default(),
    }
}
