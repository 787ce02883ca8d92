//! API payload types and the flat rows handed to the XML formatter.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Serde helper: `null` decodes to `T::default()` instead of failing.
fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Serde helper for the keyed mappings (`nativeName`, `currencies`).
///
/// Keys stay in document order. A `null` mapping is empty; a `null` value becomes
/// `V::default()` so the entry is kept with all fields absent.
fn de_keyed<'de, D, V>(deserializer: D) -> Result<IndexMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Default + Deserialize<'de>,
{
    let raw = Option::<IndexMap<String, Option<V>>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(k, v)| (k, v.unwrap_or_default()))
        .collect())
}

/// One native spelling of the country name (`name.nativeName.<lang>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeName {
    #[serde(default)]
    pub official: Option<String>,
    #[serde(default)]
    pub common: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryName {
    #[serde(default)]
    pub common: Option<String>,
    #[serde(default)]
    pub official: Option<String>,
    /// Language code -> native spelling, in document order.
    #[serde(rename = "nativeName", default, deserialize_with = "de_keyed")]
    pub native_name: IndexMap<String, NativeName>,
}

/// Currency entry (`currencies.<code>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// Raw country record as returned by `GET /v3.1/name/{name}` (one array element).
///
/// Every key is optional: absent keys and `null` both decode to "absent", including
/// `null` entries inside `nativeName` and `currencies`. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    #[serde(default, deserialize_with = "de_null_default")]
    pub name: CountryName,
    #[serde(default)]
    pub cca2: Option<String>,
    /// Currency code -> currency, in document order.
    #[serde(default, deserialize_with = "de_keyed")]
    pub currencies: IndexMap<String, CurrencyInfo>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub capital: Vec<String>,
    #[serde(default)]
    pub region: Option<String>,
}

/// Currency sub-record of an [`ExtractedCountry`]. Fields may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub name: String,
    pub symbol: String,
}

/// Flat row used by the XML formatter (one row = one `<Countries>` block).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedCountry {
    /// ISO 3166-1 alpha-2, e.g. "IN"
    pub code: String,
    pub original_name: String,
    pub common_name: String,
    pub local_name: String,
    pub currency: Currency,
}
