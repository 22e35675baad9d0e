//! This module contains the column entity and its default normalization.

use candid::CandidType;
use serde::{Deserialize, Serialize};

use crate::types::{Type, TypeName};
use crate::value::DefaultValue;

/// A column of a table.
///
/// The default is normalized once, when the column is built: see [`normalize_default`].
/// Fields stay public so that tooling can patch a column afterwards; in that case
/// [`Column::cleanup_default`] may be run again.
///
/// A deserialized column goes through the same normalization.
#[derive(Clone, Debug, PartialEq, CandidType, Serialize)]
pub struct Column {
    /// The name of the column.
    pub name: String,
    /// The type of the column.
    #[serde(rename = "type")]
    pub data_type: Type,
    /// Indicates if this column can contain NULL values.
    #[serde(default, rename = "canBeNull")]
    pub can_be_null: bool,
    #[serde(default, rename = "autoIncrement")]
    pub auto_increment: bool,
    /// Previous names of the column, oldest first, used to detect renames.
    #[serde(default, rename = "formerNames")]
    pub former_names: Vec<String>,
    /// The default value; `None` when the column declares no default.
    pub default: Option<DefaultValue>,
}

/// Wire form of a [`Column`], before the default is normalized.
#[derive(Deserialize)]
struct RawColumn {
    name: String,
    #[serde(rename = "type")]
    data_type: Type,
    #[serde(default, rename = "canBeNull")]
    can_be_null: bool,
    #[serde(default, rename = "autoIncrement")]
    auto_increment: bool,
    #[serde(default, rename = "formerNames")]
    former_names: Vec<String>,
    default: Option<DefaultValue>,
}

impl<'de> Deserialize<'de> for Column {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawColumn::deserialize(deserializer)?;
        let mut column = Self {
            name: raw.name,
            data_type: raw.data_type,
            can_be_null: raw.can_be_null,
            auto_increment: raw.auto_increment,
            former_names: raw.former_names,
            default: raw.default,
        };
        column.cleanup_default();

        Ok(column)
    }
}

/// Optional attributes of a [`Column`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnInit {
    pub auto_increment: Option<bool>,
    pub can_be_null: Option<bool>,
    pub default: Option<DefaultValue>,
    pub former_names: Option<Vec<String>>,
}

impl Column {
    /// Creates a non nullable column without default.
    pub fn new(name: impl Into<String>, data_type: Type) -> Self {
        Self::with_init(name, data_type, ColumnInit::default())
    }

    /// Creates a column, applies `init` and normalizes the default.
    pub fn with_init(name: impl Into<String>, data_type: Type, init: ColumnInit) -> Self {
        let mut column = Self {
            name: name.into(),
            data_type,
            can_be_null: init.can_be_null.unwrap_or(false),
            auto_increment: init.auto_increment.unwrap_or(false),
            former_names: init.former_names.unwrap_or_default(),
            default: init.default,
        };
        column.cleanup_default();

        column
    }

    /// Normalizes the default against the column type and nullability.
    ///
    /// Running it on an already normalized column is a no-op.
    pub fn cleanup_default(&mut self) {
        self.default =
            normalize_default(self.data_type.name(), self.can_be_null, self.default.take());
    }
}

/// Reconciles a declared default with the type of its column.
///
/// - no default stays absent;
/// - a `NULL` default is kept on nullable columns, and dropped otherwise;
/// - `date` and `datetime` defaults become dates, `float`, `integer`, `timestamp` and `year`
///   defaults become numbers, `string` defaults become text;
/// - defaults of any other type are kept as given.
///
/// This never fails: unusable input becomes `NaN` or [`crate::DateValue::INVALID`].
pub fn normalize_default(
    type_name: TypeName,
    can_be_null: bool,
    default: Option<DefaultValue>,
) -> Option<DefaultValue> {
    let value = match default? {
        DefaultValue::Null if !can_be_null => {
            tracing::debug!(%type_name, "dropping NULL default of non nullable column");
            return None;
        }
        value => value,
    };
    if value.is_null() {
        return Some(value);
    }

    let coerced = match type_name {
        TypeName::Date | TypeName::DateTime => match value {
            DefaultValue::Date(_) => value,
            other => coerce(type_name, &other, DefaultValue::Date(other.to_date())),
        },
        TypeName::Float | TypeName::Integer | TypeName::Timestamp | TypeName::Year => {
            match value {
                DefaultValue::Number(_) => value,
                other => coerce(type_name, &other, DefaultValue::Number(other.to_number())),
            }
        }
        TypeName::String => match value {
            DefaultValue::Text(_) => value,
            other => coerce(type_name, &other, DefaultValue::Text(other.to_text())),
        },
        TypeName::Bit
        | TypeName::Boolean
        | TypeName::Blob
        | TypeName::Decimal
        | TypeName::Enum
        | TypeName::Set
        | TypeName::Time => value,
    };

    Some(coerced)
}

fn coerce(type_name: TypeName, from: &DefaultValue, to: DefaultValue) -> DefaultValue {
    let degraded = match &to {
        DefaultValue::Number(n) => n.is_nan(),
        DefaultValue::Date(date) => !date.is_valid(),
        _ => false,
    };
    if degraded {
        tracing::debug!(
            %type_name,
            from = ?from,
            "default cannot be read as {}; using the {} sentinel",
            to.kind(),
            to.to_text()
        );
    } else {
        tracing::debug!(%type_name, from = from.kind(), to = to.kind(), "coerced default");
    }

    to
}
