//! Primitive kinds recognised by the structural matcher.

use std::fmt;

use serde_json::Value;

/// The dynamic kind of a JSON value.
///
/// Integers and floats are distinct kinds: a number is an [`Kind::Int`] when
/// it is representable as `i64`, and a [`Kind::Float`] otherwise.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Kind {
    /// `null`.
    Null,
    /// `true` or `false`.
    Bool,
    /// Whole numbers.
    Int,
    /// Numbers with a fractional part or exponent.
    Float,
    /// Strings.
    String,
    /// Arrays.
    List,
    /// Objects.
    Dict,
}

impl Kind {
    /// Classify `value`.
    ///
    /// Only numbers that fit an `i64` count as [`Kind::Int`]; larger unsigned
    /// values and fractions are [`Kind::Float`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use release_config_schema::Kind;
    /// use serde_json::json;
    ///
    /// assert_eq!(Kind::of(&json!(3)), Kind::Int);
    /// assert_eq!(Kind::of(&json!(3.5)), Kind::Float);
    /// assert_eq!(Kind::of(&json!(u64::MAX)), Kind::Float);
    /// assert_eq!(Kind::of(&json!(["a"])), Kind::List);
    /// ```
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(number) if number.is_i64() => Self::Int,
            Value::Number(_) => Self::Float,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::List,
            Value::Object(_) => Self::Dict,
        }
    }

    /// Lowercase name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::List => "list",
            Self::Dict => "dict",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
