use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

const DAY_MONTH_YEAR: &str = "%d-%m-%Y";

/// Serializes a timestamp as `dd-mm-yyyy`.
pub fn serialize_day_month_year<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(DAY_MONTH_YEAR))
}

/// Trims surrounding whitespace; a blank string becomes `None`.
///
/// Pair with `#[serde(default)]` so an absent field is also `None`.
pub fn deserialize_trimmed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// Trims surrounding whitespace but keeps a blank string, for optional
/// fields where an explicit empty value must still fail validation.
pub fn deserialize_trimmed_keep_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|s| s.trim().to_string()))
}

/// Trimmed and lowercased email; a blank string becomes `None`.
pub fn deserialize_email<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_trimmed(deserializer)?.map(|s| s.to_lowercase()))
}
