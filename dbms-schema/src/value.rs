//! Column default values and the generic coercions applied to them.

use candid::CandidType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::DateValue;

/// A value declared as the default of a column.
///
/// An absent default is not a variant: a column models it as `None`.
#[derive(Clone, Debug, PartialEq, CandidType, Serialize, Deserialize)]
pub enum DefaultValue {
    /// An explicit SQL `NULL` default.
    #[serde(rename = "null")]
    Null,
    /// A number; `NaN` and infinities are written as text on the wire.
    #[serde(rename = "number", with = "number_repr")]
    Number(f64),
    #[serde(rename = "text")]
    Text(String),
    #[serde(rename = "boolean")]
    Boolean(bool),
    #[serde(rename = "date")]
    Date(DateValue),
}

// macro rules for implementing From trait for DefaultValue enum variants
macro_rules! impl_conv_for_default {
    ($variant:ident, $ty:ty, $name:ident) => {
        impl From<$ty> for DefaultValue {
            fn from(value: $ty) -> Self {
                DefaultValue::$variant(value.into())
            }
        }

        impl DefaultValue {
            /// Attempts to extract a reference to the inner value if it matches the variant.
            pub fn $name(&self) -> Option<&$ty> {
                if let DefaultValue::$variant(v) = self {
                    Some(v)
                } else {
                    None
                }
            }
        }
    };
}

impl_conv_for_default!(Number, f64, as_number);
impl_conv_for_default!(Text, String, as_text);
impl_conv_for_default!(Boolean, bool, as_boolean);
impl_conv_for_default!(Date, DateValue, as_date);

impl From<i32> for DefaultValue {
    fn from(value: i32) -> Self {
        DefaultValue::Number(value.into())
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        DefaultValue::Text(value.to_string())
    }
}

impl From<DateTime<Utc>> for DefaultValue {
    fn from(value: DateTime<Utc>) -> Self {
        DefaultValue::Date(value.into())
    }
}

impl DefaultValue {
    /// Checks if the value is [`DefaultValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, DefaultValue::Null)
    }

    /// Checks if the value is the not-a-number sentinel.
    pub fn is_nan(&self) -> bool {
        matches!(self, DefaultValue::Number(n) if n.is_nan())
    }

    /// Returns the name of the representation, as used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DefaultValue::Null => "null",
            DefaultValue::Number(_) => "number",
            DefaultValue::Text(_) => "text",
            DefaultValue::Boolean(_) => "boolean",
            DefaultValue::Date(_) => "date",
        }
    }

    /// Converts the value to a number.
    ///
    /// Text that is not a numeric literal and invalid dates give `NaN`.
    pub fn to_number(&self) -> f64 {
        match self {
            DefaultValue::Null => 0.0,
            DefaultValue::Number(n) => *n,
            DefaultValue::Text(text) => parse_number(text),
            DefaultValue::Boolean(b) => f64::from(u8::from(*b)),
            DefaultValue::Date(date) => date.timestamp_millis(),
        }
    }

    /// Converts the value to its canonical text form.
    pub fn to_text(&self) -> String {
        match self {
            DefaultValue::Null => "null".to_string(),
            DefaultValue::Number(n) => format_number(*n),
            DefaultValue::Text(text) => text.clone(),
            DefaultValue::Boolean(b) => b.to_string(),
            DefaultValue::Date(date) => date.to_string(),
        }
    }

    /// Converts the value to a date.
    ///
    /// Numbers are milliseconds since the Unix epoch; text is parsed with
    /// [`DateValue::parse`]. Unusable input gives [`DateValue::INVALID`].
    pub fn to_date(&self) -> DateValue {
        match self {
            DefaultValue::Date(date) => *date,
            DefaultValue::Text(text) => DateValue::parse(text),
            other => DateValue::from_millis(other.to_number()),
        }
    }
}

/// Reads a numeric literal; blank text is zero and anything unreadable is `NaN`.
fn parse_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    let radix = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| text.strip_prefix(prefix).map(|digits| (digits, radix)));
    if let Some((digits, radix)) = radix {
        return u64::from_str_radix(digits, radix).map_or(f64::NAN, |n| n as f64);
    }

    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // f64::from_str also reads "inf" and "nan", which are not numeric literals here
    let is_literal = text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !is_literal {
        return f64::NAN;
    }
    text.parse().unwrap_or(f64::NAN)
}

/// Serde representation of numbers which keeps the non finite sentinels,
/// as formats such as JSON have no literal for them.
mod number_repr {
    use std::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(n: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if n.is_finite() {
            serializer.serialize_f64(*n)
        } else {
            serializer.serialize_str(&super::format_number(*n))
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NumberVisitor)
    }

    struct NumberVisitor;

    impl Visitor<'_> for NumberVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number, \"NaN\", \"Infinity\" or \"-Infinity\"")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            match v {
                "NaN" => Ok(f64::NAN),
                "Infinity" => Ok(f64::INFINITY),
                "-Infinity" => Ok(f64::NEG_INFINITY),
                other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
            }
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        // covers negative zero
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // exponent form, with an explicit sign on positive exponents
        let formatted = format!("{n:e}");
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        }
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_should_convert_from_primitives() {
        assert_eq!(DefaultValue::from(5), DefaultValue::Number(5.0));
        assert_eq!(DefaultValue::from(2.5), DefaultValue::Number(2.5));
        assert_eq!(
            DefaultValue::from("abc"),
            DefaultValue::Text("abc".to_string())
        );
        assert_eq!(DefaultValue::from(true), DefaultValue::Boolean(true));
    }

    #[test]
    fn test_should_get_inner_values() {
        assert_eq!(DefaultValue::from(5).as_number(), Some(&5.0));
        assert_eq!(DefaultValue::from(5).as_text(), None);
        assert_eq!(
            DefaultValue::from("x").as_text().map(String::as_str),
            Some("x")
        );
        assert!(DefaultValue::Null.is_null());
        assert!(!DefaultValue::from(0).is_null());
    }

    #[test]
    fn test_should_convert_text_to_number() {
        assert_eq!(DefaultValue::from("5").to_number(), 5.0);
        assert_eq!(DefaultValue::from("  -2.5e2 ").to_number(), -250.0);
        assert_eq!(DefaultValue::from(".5").to_number(), 0.5);
        assert_eq!(DefaultValue::from("").to_number(), 0.0);
        assert_eq!(DefaultValue::from("0x1F").to_number(), 31.0);
        assert_eq!(DefaultValue::from("0b101").to_number(), 5.0);
        assert_eq!(DefaultValue::from("Infinity").to_number(), f64::INFINITY);
        assert_eq!(
            DefaultValue::from("-Infinity").to_number(),
            f64::NEG_INFINITY
        );
    }

    #[test]
    fn test_should_degrade_to_nan() {
        for text in ["abc", "5px", "inf", "nan", "1e", "--1", "0xZZ"] {
            assert!(
                DefaultValue::from(text).to_number().is_nan(),
                "'{text}' should be NaN"
            );
        }
        assert!(DefaultValue::Date(DateValue::INVALID).to_number().is_nan());
        assert!(DefaultValue::Number(f64::NAN).is_nan());
        assert!(!DefaultValue::from("NaN").is_nan());
    }

    #[test]
    fn test_should_convert_other_values_to_number() {
        assert_eq!(DefaultValue::Boolean(true).to_number(), 1.0);
        assert_eq!(DefaultValue::Boolean(false).to_number(), 0.0);
        assert_eq!(DefaultValue::Null.to_number(), 0.0);
        assert_eq!(
            DefaultValue::Date(DateValue::from_millis(86_400_000.0)).to_number(),
            86_400_000.0
        );
    }

    #[test]
    fn test_should_convert_to_text() {
        assert_eq!(DefaultValue::from(5).to_text(), "5");
        assert_eq!(DefaultValue::from(5.5).to_text(), "5.5");
        assert_eq!(DefaultValue::from(-0.0).to_text(), "0");
        assert_eq!(DefaultValue::Number(f64::NAN).to_text(), "NaN");
        assert_eq!(DefaultValue::Number(f64::INFINITY).to_text(), "Infinity");
        assert_eq!(
            DefaultValue::Number(f64::NEG_INFINITY).to_text(),
            "-Infinity"
        );
        assert_eq!(DefaultValue::Boolean(false).to_text(), "false");
        assert_eq!(DefaultValue::Null.to_text(), "null");
        assert_eq!(
            DefaultValue::Date(DateValue::from_millis(0.0)).to_text(),
            "1970-01-01T00:00:00.000Z"
        );
        assert_eq!(
            DefaultValue::Date(DateValue::INVALID).to_text(),
            "Invalid Date"
        );
    }

    #[test]
    fn test_should_use_exponent_form_for_extreme_numbers() {
        assert_eq!(DefaultValue::from(1e21).to_text(), "1e+21");
        assert_eq!(DefaultValue::from(-1.5e300).to_text(), "-1.5e+300");
        assert_eq!(DefaultValue::from(1e-7).to_text(), "1e-7");
        assert_eq!(DefaultValue::from(2.5e-8).to_text(), "2.5e-8");
        assert_eq!(DefaultValue::from(1e20).to_text(), "100000000000000000000");
        assert_eq!(DefaultValue::from(1e-6).to_text(), "0.000001");
    }

    #[test]
    fn test_should_convert_to_date() {
        assert_eq!(
            DefaultValue::from("2024-06-15").to_date(),
            DateValue::parse("2024-06-15")
        );
        assert_eq!(
            DefaultValue::from(1_000).to_date(),
            DateValue::from_millis(1_000.0)
        );
        assert_eq!(
            DefaultValue::Boolean(true).to_date(),
            DateValue::from_millis(1.0)
        );
        assert!(!DefaultValue::from("soon").to_date().is_valid());
    }

    #[test]
    fn test_should_serialize_tagged() {
        let json = serde_json::to_string(&DefaultValue::from("x")).expect("failed to serialize");
        assert_eq!(json, r#"{"text":"x"}"#);
        let json = serde_json::to_string(&DefaultValue::Null).expect("failed to serialize");
        assert_eq!(json, r#""null""#);
        let json = serde_json::to_string(&DefaultValue::from(5)).expect("failed to serialize");
        assert_eq!(json, r#"{"number":5.0}"#);
    }

    #[test]
    fn test_should_serialize_non_finite_numbers_as_text() {
        for (value, text) in [
            (f64::NAN, r#"{"number":"NaN"}"#),
            (f64::INFINITY, r#"{"number":"Infinity"}"#),
            (f64::NEG_INFINITY, r#"{"number":"-Infinity"}"#),
        ] {
            let json =
                serde_json::to_string(&DefaultValue::Number(value)).expect("failed to serialize");
            assert_eq!(json, text);
        }

        let decoded: DefaultValue =
            serde_json::from_str(r#"{"number":"NaN"}"#).expect("failed to deserialize");
        assert!(decoded.is_nan());
        let decoded: DefaultValue =
            serde_json::from_str(r#"{"number":"-Infinity"}"#).expect("failed to deserialize");
        assert_eq!(decoded, DefaultValue::Number(f64::NEG_INFINITY));
        let decoded: DefaultValue =
            serde_json::from_str(r#"{"number":3}"#).expect("failed to deserialize");
        assert_eq!(decoded, DefaultValue::Number(3.0));

        assert!(serde_json::from_str::<DefaultValue>(r#"{"number":"five"}"#).is_err());
    }
}
