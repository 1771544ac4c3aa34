// crates/atlas-core/src/raw.rs

//! Raw catalog record as served by the REST countries endpoint.
//!
//! Every field is decoded leniently: a sub-field with an unexpected shape
//! falls back to its default instead of rejecting the whole record.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CountryRaw {
    #[serde(deserialize_with = "lenient")]
    pub name: NameRaw,
    #[serde(deserialize_with = "lenient")]
    pub capital: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub region: String,
    #[serde(deserialize_with = "lenient")]
    pub flag: String,
    #[serde(deserialize_with = "lenient")]
    pub timezones: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub population: i64,
    #[serde(deserialize_with = "lenient")]
    pub area: f64,
    /// Language code → language name.
    #[serde(deserialize_with = "lenient")]
    pub languages: BTreeMap<String, String>,
    /// Currency code → arbitrary object, expected to carry a `name`.
    #[serde(deserialize_with = "lenient")]
    pub currencies: BTreeMap<String, Value>,
    #[serde(deserialize_with = "lenient")]
    pub idd: IddRaw,
    #[serde(deserialize_with = "lenient")]
    pub car: CarRaw,
    #[serde(deserialize_with = "lenient")]
    pub borders: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NameRaw {
    #[serde(deserialize_with = "lenient")]
    pub common: String,
}

/// International direct dialing parts, e.g. root `+3` and suffixes `["3"]`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IddRaw {
    #[serde(deserialize_with = "lenient")]
    pub root: String,
    #[serde(deserialize_with = "lenient")]
    pub suffixes: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CarRaw {
    #[serde(deserialize_with = "lenient")]
    pub side: String,
}

/// Decodes `T` from whatever JSON is present, using `T::default()` when the
/// value is `null` or has the wrong shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

impl CountryRaw {
    /// Decodes one catalog entry. Returns `None` for entries that are not
    /// JSON objects; anything object-shaped decodes, possibly with defaults.
    pub fn from_value(value: Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_full_record() {
        let raw = CountryRaw::from_value(json!({
            "name": {"common": "France", "official": "French Republic"},
            "capital": ["Paris"],
            "region": "Europe",
            "timezones": ["UTC-10:00", "UTC+01:00"],
            "population": 67391582,
            "area": 551695.0,
            "languages": {"fra": "French"},
            "currencies": {"EUR": {"name": "Euro", "symbol": "€"}},
            "idd": {"root": "+3", "suffixes": ["3"]},
            "car": {"side": "right"},
            "borders": ["AND", "BEL"]
        }))
        .unwrap();

        assert_eq!(raw.name.common, "France");
        assert_eq!(raw.capital, vec!["Paris"]);
        assert_eq!(raw.idd.suffixes, vec!["3"]);
        assert_eq!(raw.car.side, "right");
        assert_eq!(raw.borders.len(), 2);
    }

    #[test]
    fn malformed_sub_fields_degrade_to_defaults() {
        let raw = CountryRaw::from_value(json!({
            "name": {"common": "Oddland"},
            "capital": "not-a-list",
            "population": "lots",
            "area": null,
            "languages": ["eng"],
            "idd": {"root": 44}
        }))
        .unwrap();

        assert_eq!(raw.name.common, "Oddland");
        assert!(raw.capital.is_empty());
        assert_eq!(raw.population, 0);
        assert_eq!(raw.area, 0.0);
        assert!(raw.languages.is_empty());
        assert_eq!(raw.idd.root, "");
    }

    #[test]
    fn non_objects_are_rejected() {
        assert!(CountryRaw::from_value(json!("France")).is_none());
        assert!(CountryRaw::from_value(json!(null)).is_none());
    }
}
