//! Flag values and value assignments.
//!
//! [`FlagValue`] is the closed set of kinds a flag default or an assigned
//! value may take. Conversion from a structured record value rejects every
//! other kind, so code past the builders never inspects dynamic types.

mod assignment;

use std::fmt;

use release_config_schema::Kind;
use serde::Serialize;
use serde_json::Value;

use crate::constants::TRUTHY_TOKEN;

pub use assignment::ValueAssignment;

/// A flag default, an assigned value, or a resolved output value.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FlagValue {
    /// No value.
    #[default]
    Absent,
    /// A boolean.
    Bool(bool),
    /// A whole number.
    Int(i64),
    /// A string.
    String(String),
    /// A list of values.
    List(Vec<FlagValue>),
}

impl FlagValue {
    /// Build a list of strings.
    #[must_use]
    pub fn string_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(items.into_iter().map(|item| Self::String(item.into())).collect())
    }

    /// Kind of this value as reported in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Absent => Kind::Null,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::String(_) => Kind::String,
            Self::List(_) => Kind::List,
        }
    }

    /// Value as emitted into the variable set.
    ///
    /// Absence and `false` become the empty string and `true` becomes
    /// [`TRUTHY_TOKEN`]; every other value passes through unchanged.
    ///
    /// ```rust
    /// use release_config::FlagValue;
    ///
    /// assert_eq!(FlagValue::Bool(true).formatted(), FlagValue::from("true"));
    /// assert_eq!(FlagValue::Bool(false).formatted(), FlagValue::from(""));
    /// assert_eq!(FlagValue::Absent.formatted(), FlagValue::from(""));
    /// assert_eq!(FlagValue::Int(3).formatted(), FlagValue::Int(3));
    /// ```
    #[must_use]
    pub fn formatted(&self) -> Self {
        match self {
            Self::Absent | Self::Bool(false) => Self::String(String::new()),
            Self::Bool(true) => Self::String(TRUTHY_TOKEN.to_owned()),
            Self::Int(_) | Self::String(_) | Self::List(_) => self.clone(),
        }
    }

    /// Borrow the string payload.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the list payload.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Strings held by a list value, skipping non-string elements.
    #[must_use]
    pub fn as_string_list(&self) -> Vec<&str> {
        self.as_list()
            .unwrap_or_default()
            .iter()
            .filter_map(Self::as_str)
            .collect()
    }
}

/// Converts a structured value, returning the kind of the first element that
/// falls outside the allowed set.
impl TryFrom<&Value> for FlagValue {
    type Error = Kind;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Self::Absent),
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Number(number) => number.as_i64().map(Self::Int).ok_or_else(|| Kind::of(value)),
            Value::String(s) => Ok(Self::String(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(Self::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::List),
            Value::Object(_) => Err(Kind::Dict),
        }
    }
}

impl From<&FlagValue> for Value {
    fn from(value: &FlagValue) -> Self {
        match value {
            FlagValue::Absent => Self::Null,
            FlagValue::Bool(b) => Self::Bool(*b),
            FlagValue::Int(i) => Self::from(*i),
            FlagValue::String(s) => Self::String(s.clone()),
            FlagValue::List(items) => Self::Array(items.iter().map(Self::from).collect()),
        }
    }
}

impl From<FlagValue> for Value {
    fn from(value: FlagValue) -> Self {
        Self::from(&value)
    }
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for FlagValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for FlagValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Self>> for FlagValue {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

/// Renders the value the way a build system variable would print it: lists
/// are space-separated and absence is empty.
impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::String(s) => f.write_str(s),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}
