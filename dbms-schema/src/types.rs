//! This module exposes the column type descriptor and its modifiers.

use candid::CandidType;
use serde::{Deserialize, Serialize};

mod date;
mod max_value;
mod name;

pub use self::date::DateValue;
pub use self::max_value::MaxValue;
pub use self::name::TypeName;

/// Describes the semantic storage type of a column and its modifiers.
///
/// The [`TypeName`] is fixed at construction. Modifiers only make sense for some variants
/// (e.g. `values` for `enum` and `set`), but nothing prevents setting them on any variant:
/// consumers decide what to do with them.
#[derive(Clone, Debug, PartialEq, CandidType, Serialize, Deserialize)]
pub struct Type {
    name: TypeName,
    /// Collation of textual types.
    pub collate: Option<String>,
    /// Length of `bit`, `blob`, `decimal` and `string` types.
    pub length: Option<u32>,
    /// Upper bound of `integer` types.
    #[serde(rename = "maxValue")]
    pub max_value: Option<MaxValue>,
    /// Precision of `decimal` and `float` types.
    pub precision: Option<u32>,
    /// Signedness of numeric types.
    pub signed: Option<bool>,
    /// Allowed values of `enum` and `set` types.
    pub values: Option<Vec<String>>,
    #[serde(default, rename = "variableLength")]
    pub variable_length: bool,
    #[serde(default, rename = "zeroFill")]
    pub zero_fill: bool,
}

/// Optional modifiers applied on top of a [`Type`].
///
/// Every field left to `None` keeps the current value; every `Some` field wins.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeInit {
    pub collate: Option<String>,
    pub length: Option<u32>,
    pub max_value: Option<MaxValue>,
    pub precision: Option<u32>,
    pub signed: Option<bool>,
    pub values: Option<Vec<String>>,
    pub variable_length: Option<bool>,
    pub zero_fill: Option<bool>,
}

impl Type {
    /// Creates a new type with the given name, applying `init` over the defaults.
    pub fn new(name: TypeName, init: TypeInit) -> Self {
        Self {
            name,
            collate: None,
            length: None,
            max_value: None,
            precision: None,
            signed: None,
            values: None,
            variable_length: false,
            zero_fill: false,
        }
        .with(init)
    }

    /// Applies the modifiers set in `init`, overriding the current ones.
    ///
    /// No check is made on whether a modifier makes sense for this type.
    pub fn with(mut self, init: TypeInit) -> Self {
        let TypeInit {
            collate,
            length,
            max_value,
            precision,
            signed,
            values,
            variable_length,
            zero_fill,
        } = init;

        if collate.is_some() {
            self.collate = collate;
        }
        if length.is_some() {
            self.length = length;
        }
        if max_value.is_some() {
            self.max_value = max_value;
        }
        if precision.is_some() {
            self.precision = precision;
        }
        if signed.is_some() {
            self.signed = signed;
        }
        if values.is_some() {
            self.values = values;
        }
        if let Some(variable_length) = variable_length {
            self.variable_length = variable_length;
        }
        if let Some(zero_fill) = zero_fill {
            self.zero_fill = zero_fill;
        }

        self
    }

    /// Returns the type name.
    pub fn name(&self) -> TypeName {
        self.name
    }

    /// A `bit` type of `length` bits.
    pub fn bit(length: u32) -> Self {
        Self::new(
            TypeName::Bit,
            TypeInit {
                length: Some(length),
                ..Default::default()
            },
        )
    }

    /// A binary type, named `blob`.
    pub fn binary(length: u32, variable_length: bool) -> Self {
        Self::new(
            TypeName::Blob,
            TypeInit {
                length: Some(length),
                variable_length: Some(variable_length),
                ..Default::default()
            },
        )
    }

    pub fn boolean() -> Self {
        Self::new(TypeName::Boolean, TypeInit::default())
    }

    pub fn date() -> Self {
        Self::new(TypeName::Date, TypeInit::default())
    }

    pub fn date_time() -> Self {
        Self::new(TypeName::DateTime, TypeInit::default())
    }

    /// A fixed point type with `length` digits, `precision` of them after the point.
    pub fn decimal(length: u32, precision: u32, signed: bool) -> Self {
        Self::new(
            TypeName::Decimal,
            TypeInit {
                length: Some(length),
                precision: Some(precision),
                signed: Some(signed),
                ..Default::default()
            },
        )
    }

    /// An `enum` type accepting one of `values`.
    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            TypeName::Enum,
            TypeInit {
                values: Some(values.into_iter().map(Into::into).collect()),
                ..Default::default()
            },
        )
    }

    pub fn float(precision: u32, signed: bool) -> Self {
        Self::new(
            TypeName::Float,
            TypeInit {
                precision: Some(precision),
                signed: Some(signed),
                ..Default::default()
            },
        )
    }

    /// An `integer` type, optionally bounded by `max_value`.
    pub fn integer(max_value: Option<MaxValue>, signed: bool) -> Self {
        Self::new(
            TypeName::Integer,
            TypeInit {
                max_value,
                signed: Some(signed),
                ..Default::default()
            },
        )
    }

    /// A `set` type accepting any combination of `values`.
    pub fn set<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            TypeName::Set,
            TypeInit {
                values: Some(values.into_iter().map(Into::into).collect()),
                ..Default::default()
            },
        )
    }

    /// A textual type of `length` characters.
    pub fn string(length: u32, variable_length: bool, collate: Option<&str>) -> Self {
        Self::new(
            TypeName::String,
            TypeInit {
                collate: collate.map(str::to_string),
                length: Some(length),
                variable_length: Some(variable_length),
                ..Default::default()
            },
        )
    }

    pub fn time() -> Self {
        Self::new(TypeName::Time, TypeInit::default())
    }

    pub fn timestamp() -> Self {
        Self::new(TypeName::Timestamp, TypeInit::default())
    }

    pub fn year() -> Self {
        Self::new(TypeName::Year, TypeInit::default())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_should_create_type_with_defaults() {
        let ty = Type::new(TypeName::Time, TypeInit::default());
        assert_eq!(ty.name(), TypeName::Time);
        assert_eq!(ty.length, None);
        assert_eq!(ty.signed, None);
        assert!(!ty.variable_length);
        assert!(!ty.zero_fill);
    }

    #[test]
    fn test_should_create_bit() {
        let ty = Type::bit(8);
        assert_eq!(ty.name(), TypeName::Bit);
        assert_eq!(ty.length, Some(8));
    }

    #[test]
    fn test_should_create_binary_as_blob() {
        let ty = Type::binary(255, true);
        assert_eq!(ty.name(), TypeName::Blob);
        assert_eq!(ty.length, Some(255));
        assert!(ty.variable_length);

        assert!(!Type::binary(16, false).variable_length);
    }

    #[test]
    fn test_should_create_decimal() {
        let ty = Type::decimal(10, 2, false);
        assert_eq!(ty.name(), TypeName::Decimal);
        assert_eq!(ty.length, Some(10));
        assert_eq!(ty.precision, Some(2));
        assert_eq!(ty.signed, Some(false));
    }

    #[test]
    fn test_should_create_enum_and_set() {
        let ty = Type::enumeration(["draft", "published"]);
        assert_eq!(ty.name(), TypeName::Enum);
        assert_eq!(
            ty.values,
            Some(vec!["draft".to_string(), "published".to_string()])
        );

        let ty = Type::set(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(ty.name(), TypeName::Set);
        assert_eq!(ty.values.as_deref().map(<[String]>::len), Some(2));
    }

    #[test]
    fn test_should_create_float() {
        let ty = Type::float(7, true);
        assert_eq!(ty.name(), TypeName::Float);
        assert_eq!(ty.precision, Some(7));
        assert_eq!(ty.signed, Some(true));
    }

    #[test]
    fn test_should_create_integer() {
        let ty = Type::integer(Some(4_294_967_295u64.into()), false);
        assert_eq!(ty.name(), TypeName::Integer);
        assert_eq!(ty.max_value, Some(MaxValue::Integer(4_294_967_295)));
        assert_eq!(ty.signed, Some(false));

        assert_eq!(Type::integer(None, true).max_value, None);
    }

    #[test]
    fn test_should_create_string() {
        let ty = Type::string(255, true, Some("utf8mb4_general_ci"));
        assert_eq!(ty.name(), TypeName::String);
        assert_eq!(ty.length, Some(255));
        assert!(ty.variable_length);
        assert_eq!(ty.collate.as_deref(), Some("utf8mb4_general_ci"));

        assert_eq!(Type::string(2, false, None).collate, None);
    }

    #[test]
    fn test_should_create_parameterless_types() {
        assert_eq!(Type::boolean().name(), TypeName::Boolean);
        assert_eq!(Type::date().name(), TypeName::Date);
        assert_eq!(Type::date_time().name(), TypeName::DateTime);
        assert_eq!(Type::time().name(), TypeName::Time);
        assert_eq!(Type::timestamp().name(), TypeName::Timestamp);
        assert_eq!(Type::year().name(), TypeName::Year);
    }

    #[test]
    fn test_should_override_factory_values() {
        let ty = Type::float(7, true).with(TypeInit {
            signed: Some(false),
            zero_fill: Some(true),
            ..Default::default()
        });
        assert_eq!(ty.name(), TypeName::Float);
        assert_eq!(ty.precision, Some(7));
        assert_eq!(ty.signed, Some(false));
        assert!(ty.zero_fill);
    }

    #[test]
    fn test_should_accept_modifiers_foreign_to_variant() {
        let ty = Type::year().with(TypeInit {
            values: Some(vec!["x".to_string()]),
            collate: Some("latin1_swedish_ci".to_string()),
            ..Default::default()
        });
        assert_eq!(ty.name(), TypeName::Year);
        assert_eq!(ty.values, Some(vec!["x".to_string()]));
        assert_eq!(ty.collate.as_deref(), Some("latin1_swedish_ci"));
    }

    #[test]
    fn test_should_serialize_with_camel_case_keys() {
        let ty = Type::binary(16, true);
        let json = serde_json::to_value(&ty).expect("failed to serialize");
        assert_eq!(json["name"], "blob");
        assert_eq!(json["variableLength"], true);
        assert_eq!(json["zeroFill"], false);
    }
}
