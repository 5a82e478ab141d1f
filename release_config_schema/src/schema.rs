//! Declarative schema description types.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::{Kind, SchemaError};

/// Expected shape of a JSON value.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Schema {
    /// Accepts every value.
    Any,
    /// Accepts values of a single primitive kind.
    Type(Kind),
    /// Accepts values equal to one of the listed choices.
    Choice(Vec<Value>),
    /// Accepts values matching at least one alternative.
    Union(Vec<Schema>),
    /// Accepts lists whose elements match an element schema.
    List(ListSchema),
    /// Accepts dictionaries with the described keys.
    Dict(DictSchema),
}

impl Schema {
    /// Schema accepting booleans.
    #[must_use]
    pub const fn boolean() -> Self {
        Self::Type(Kind::Bool)
    }

    /// Schema accepting whole numbers.
    #[must_use]
    pub const fn int() -> Self {
        Self::Type(Kind::Int)
    }

    /// Schema accepting strings.
    #[must_use]
    pub const fn string() -> Self {
        Self::Type(Kind::String)
    }

    /// Schema accepting any list, regardless of its elements.
    #[must_use]
    pub fn list() -> Self {
        Self::List(ListSchema::default())
    }

    /// Schema accepting lists whose elements all match `item`.
    #[must_use]
    pub fn list_of(item: Self) -> Self {
        Self::List(ListSchema::of(item))
    }

    /// Like [`Schema::list_of`] but additionally rejects repeated elements.
    #[must_use]
    pub fn unique_list_of(item: Self) -> Self {
        Self::List(ListSchema::of(item).unique())
    }

    /// Starts a dictionary schema; convert it with `.into()` once keys are added.
    #[must_use]
    pub const fn dict() -> DictSchema {
        DictSchema::new()
    }

    /// Schema accepting exactly the listed values.
    ///
    /// ```rust
    /// use release_config_schema::{Schema, validate};
    /// use serde_json::json;
    ///
    /// let colour = Schema::choice(["red", "green"]);
    /// assert!(validate(&json!("red"), &colour).is_ok());
    /// assert!(validate(&json!("blue"), &colour).is_err());
    /// ```
    #[must_use]
    pub fn choice<I, V>(choices: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Choice(choices.into_iter().map(Into::into).collect())
    }

    /// Schema accepting values that match any of `alternatives`.
    #[must_use]
    pub fn one_of<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::Union(alternatives.into_iter().collect())
    }

    /// Schema accepting any of the given primitive kinds.
    #[must_use]
    pub fn kinds<I>(kinds: I) -> Self
    where
        I: IntoIterator<Item = Kind>,
    {
        Self::one_of(kinds.into_iter().map(Self::Type))
    }

    /// Validate `value` against this schema.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] describing the first mismatch.
    pub fn validate(&self, value: &Value) -> Result<(), SchemaError> {
        crate::validate(value, self)
    }
}

impl From<ListSchema> for Schema {
    fn from(list: ListSchema) -> Self {
        Self::List(list)
    }
}

impl From<DictSchema> for Schema {
    fn from(dict: DictSchema) -> Self {
        Self::Dict(dict)
    }
}

impl From<Kind> for Schema {
    fn from(kind: Kind) -> Self {
        Self::Type(kind)
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("any"),
            Self::Type(kind) => write!(f, "{kind}"),
            Self::Choice(choices) => {
                f.write_str("one of [")?;
                write_joined(f, choices, ", ")?;
                f.write_str("]")
            }
            Self::Union(alternatives) => write_joined(f, alternatives, " | "),
            Self::List(list) => match &list.item {
                Some(item) => write!(f, "list of ({item})"),
                None => f.write_str("list"),
            },
            Self::Dict(_) => f.write_str("dict"),
        }
    }
}

fn write_joined<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    separator: &str,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Element constraints for list schemas.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListSchema {
    pub(crate) item: Option<Box<Schema>>,
    pub(crate) unique: bool,
}

impl ListSchema {
    /// List whose elements must match `item`.
    #[must_use]
    pub fn of(item: Schema) -> Self {
        Self {
            item: Some(Box::new(item)),
            unique: false,
        }
    }

    /// Require every element to be distinct.
    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Element schema, when one was supplied.
    #[must_use]
    pub fn item(&self) -> Option<&Schema> {
        self.item.as_deref()
    }

    /// Whether repeated elements are rejected.
    #[must_use]
    pub const fn is_unique(&self) -> bool {
        self.unique
    }
}

/// Key constraints for dictionary schemas.
///
/// Keys not listed as required or optional are rejected.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DictSchema {
    pub(crate) required: BTreeMap<String, Schema>,
    pub(crate) optional: BTreeMap<String, Schema>,
}

impl DictSchema {
    /// Dictionary schema with no keys.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            required: BTreeMap::new(),
            optional: BTreeMap::new(),
        }
    }

    /// Add a key that must be present and match `schema`.
    #[must_use]
    pub fn required(mut self, key: impl Into<String>, schema: Schema) -> Self {
        self.required.insert(key.into(), schema);
        self
    }

    /// Add a key that must match `schema` when present.
    #[must_use]
    pub fn optional(mut self, key: impl Into<String>, schema: Schema) -> Self {
        self.optional.insert(key.into(), schema);
        self
    }
}
