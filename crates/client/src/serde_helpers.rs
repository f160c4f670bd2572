//! Serde helpers for the API's inconsistent JSON typing.
//!
//! Responsibilities:
//! - Accept either JSON numbers or strings for ids and threshold values.
//! - Keep parsing behavior centralized so model definitions stay readable.
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (ranges, required companion fields).
//!
//! Invariants / assumptions:
//! - List endpoints return ids as `"123"` in some resources and `123` in others.
//! - Errors are generic parse errors and never echo request credentials.

use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum U64OrString {
    U64(u64),
    I64(i64),
    String(String),
}

impl U64OrString {
    fn into_u64<E: serde::de::Error>(self) -> Result<u64, E> {
        match self {
            U64OrString::U64(v) => Ok(v),
            U64OrString::I64(v) => u64::try_from(v).map_err(E::custom),
            U64OrString::String(s) => s.trim().parse::<u64>().map_err(E::custom),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    U64(u64),
    I64(i64),
    F64(f64),
}

impl StringOrNumber {
    fn into_string(self) -> String {
        match self {
            StringOrNumber::String(s) => s,
            StringOrNumber::U64(v) => v.to_string(),
            StringOrNumber::I64(v) => v.to_string(),
            StringOrNumber::F64(v) => v.to_string(),
        }
    }
}

pub fn u64_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    U64OrString::deserialize(deserializer)?.into_u64()
}

pub fn opt_u64_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<U64OrString>::deserialize(deserializer)?
        .map(U64OrString::into_u64)
        .transpose()
}

pub fn vec_u64_from_strings_or_numbers<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<Vec<U64OrString>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(U64OrString::into_u64)
        .collect()
}

pub fn string_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(StringOrNumber::deserialize(deserializer)?.into_string())
}

pub fn opt_f64_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOrNumber::F64(v)) => Ok(Some(v)),
        Some(StringOrNumber::U64(v)) => Ok(Some(v as f64)),
        Some(StringOrNumber::I64(v)) => Ok(Some(v as f64)),
        Some(StringOrNumber::String(s)) => s.trim().parse::<f64>().map(Some).map_err(D::Error::custom),
    }
}
