use candid::CandidType;
use serde::{Deserialize, Serialize};

use super::DateValue;

/// Upper bound of an `integer` column, as declared by the schema author.
#[derive(Clone, Debug, PartialEq, CandidType, Serialize, Deserialize)]
pub enum MaxValue {
    /// An exact integer bound, wide enough for unsigned 64-bit columns.
    #[serde(rename = "integer")]
    Integer(u64),
    #[serde(rename = "number")]
    Number(f64),
    #[serde(rename = "text")]
    Text(String),
    #[serde(rename = "date")]
    Date(DateValue),
}

impl From<u64> for MaxValue {
    fn from(value: u64) -> Self {
        MaxValue::Integer(value)
    }
}

impl From<u32> for MaxValue {
    fn from(value: u32) -> Self {
        MaxValue::Integer(value.into())
    }
}

impl From<f64> for MaxValue {
    fn from(value: f64) -> Self {
        MaxValue::Number(value)
    }
}

impl From<&str> for MaxValue {
    fn from(value: &str) -> Self {
        MaxValue::Text(value.to_string())
    }
}

impl From<String> for MaxValue {
    fn from(value: String) -> Self {
        MaxValue::Text(value)
    }
}

impl From<DateValue> for MaxValue {
    fn from(value: DateValue) -> Self {
        MaxValue::Date(value)
    }
}
