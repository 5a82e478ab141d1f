//! Value assignment records.

use serde_json::{Value, json};

/// One override of a flag's default.
///
/// The value is kept in its structured form; its kind is checked against the
/// value schema when the assignment reaches the merge engine.
///
/// ```rust
/// use release_config::ValueAssignment;
///
/// let assignment = ValueAssignment::new("RELEASE_FOO", true, "release/trunk.scl");
/// assert_eq!(assignment.name(), "RELEASE_FOO");
/// assert_eq!(assignment.set_in(), "release/trunk.scl");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ValueAssignment {
    name: String,
    value: Value,
    set_in: String,
}

impl ValueAssignment {
    /// Record that `name` is set to `value` at `set_in`.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<Value>, set_in: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            set_in: set_in.into(),
        }
    }

    /// Flag being assigned.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Assigned value, not yet checked.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Where the assignment was made.
    #[must_use]
    pub fn set_in(&self) -> &str {
        &self.set_in
    }

    /// Record shape checked by [`crate::schemas::value_schema`].
    #[must_use]
    pub fn to_record(&self) -> Value {
        json!({
            "name": self.name,
            "value": self.value,
            "set_in": self.set_in,
        })
    }
}
