//! Provider payload normalization.
//!
//! One module per catalog, each exposing pure build functions from that
//! catalog's raw payload shape into the canonical model. The calling
//! repository picks the module; nothing here inspects payloads to guess
//! their provenance. Missing optional fields are skipped, a missing
//! mandatory field is a [`MalformedPayload`](crate::Error::MalformedPayload)
//! error, and every built entity is tagged with the provider's own id as an
//! external id so entities can be correlated across catalogs later.

pub mod guidebox;
pub mod netflix;
pub mod omdb;
pub mod snapshot;
pub mod tmdb;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use serde_json::Value;

/// Year fields arrive as numbers or strings depending on the catalog, and
/// one of them emits ranges like `"2014–2016"` for running shows.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum YearField {
    Number(i64),
    Text(String),
}

impl YearField {
    pub fn year(&self) -> Option<u16> {
        match self {
            YearField::Number(value) => u16::try_from(*value).ok(),
            YearField::Text(value) => {
                let digits: String = value
                    .chars()
                    .take_while(char::is_ascii_digit)
                    .take(4)
                    .collect();
                if digits.len() == 4 {
                    digits.parse().ok()
                } else {
                    None
                }
            }
        }
    }
}

pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

pub(crate) fn year_of_date(value: &str) -> Option<u16> {
    parse_date(value).and_then(|date| u16::try_from(date.year()).ok())
}

/// Year read straight off an untyped payload field.
pub(crate) fn value_year(value: &Value) -> Option<u16> {
    match value {
        Value::Number(number) => number.as_i64().and_then(|year| u16::try_from(year).ok()),
        Value::String(text) => YearField::Text(text.clone()).year(),
        _ => None,
    }
}

/// Provider ids are opaque strings or numbers; numbers render in decimal.
pub(crate) fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) => Some(text.clone()),
        _ => None,
    }
}
