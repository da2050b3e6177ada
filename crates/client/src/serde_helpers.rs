//! Serde helpers for Splunk's inconsistent JSON typing.
//!
//! Responsibilities:
//! - Provide deserializers that accept either JSON numbers or strings for numeric fields.
//! - Accept the several spellings Splunk uses for boolean job flags.
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (ranges, required/optional business rules).
//!
//! Invariants / assumptions:
//! - Splunk may return numeric fields as `"123"` strings or as `123` numbers depending on endpoint/version.
//! - Boolean flags may arrive as `true`, `"1"`, `"true"` or `1` (and their negatives).

use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum U64OrString {
    U64(u64),
    I64(i64),
    F64(f64),
    String(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BoolLike {
    Bool(bool),
    U64(u64),
    I64(i64),
    F64(f64),
    String(String),
}

fn parse_u64<E: serde::de::Error>(value: U64OrString) -> Result<u64, E> {
    match value {
        U64OrString::U64(v) => Ok(v),
        U64OrString::I64(v) => u64::try_from(v).map_err(E::custom),
        U64OrString::F64(v) if v >= 0.0 && v.fract() == 0.0 => Ok(v as u64),
        U64OrString::F64(v) => Err(E::custom(format!("expected a whole number, got {v}"))),
        U64OrString::String(s) => s.trim().parse::<u64>().map_err(E::custom),
    }
}

pub fn opt_u64_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<U64OrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(value) => parse_u64::<D::Error>(value).map(Some),
    }
}

/// Deserialize a Splunk boolean flag. `null` reads as `false`.
pub fn bool_from_any<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<BoolLike>::deserialize(deserializer)? {
        None => Ok(false),
        Some(BoolLike::Bool(b)) => Ok(b),
        Some(BoolLike::U64(n)) => Ok(n != 0),
        Some(BoolLike::I64(n)) => Ok(n != 0),
        Some(BoolLike::F64(n)) => Ok(n != 0.0),
        Some(BoolLike::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" => Ok(true),
            "0" | "false" | "" => Ok(false),
            other => Err(D::Error::custom(format!(
                "invalid boolean flag value '{other}'"
            ))),
        },
    }
}
