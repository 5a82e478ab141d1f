//! Flag declarations.

mod builder;

use serde_json::{Value, json};

use crate::error::ReleaseConfigResult;
use crate::partition::PartitionTag;
use crate::value::FlagValue;

pub use builder::FlagDeclarationBuilder;

/// A validated flag declaration.
///
/// Instances only come out of [`FlagDeclarationBuilder::build`], so every
/// declaration carries a prefixed whitespace-free name, at least one
/// partition tag with `all` standing alone, and a default of an allowed kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlagDeclaration {
    name: String,
    partitions: Vec<PartitionTag>,
    default: FlagValue,
    appends: bool,
    declared_in: String,
}

impl FlagDeclaration {
    /// Starts building a declaration for `name`.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> FlagDeclarationBuilder {
        FlagDeclarationBuilder::new(name)
    }

    /// Declares a flag in one call.
    ///
    /// # Errors
    ///
    /// Fails under the same rules as [`FlagDeclarationBuilder::build`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use release_config::FlagDeclaration;
    ///
    /// let err = FlagDeclaration::new("RELEASE_X", ["all", "vendor"], "", false, "flags.scl")
    ///     .unwrap_err();
    /// assert!(err.to_string().contains("can't be combined"));
    /// ```
    pub fn new<I, S>(
        name: impl Into<String>,
        partitions: I,
        default: impl Into<Value>,
        appends: bool,
        declared_in: impl Into<String>,
    ) -> ReleaseConfigResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FlagDeclarationBuilder::new(name)
            .partitions(partitions)
            .default_value(default)
            .appends(appends)
            .declared_in(declared_in)
            .build()
    }

    /// Flag name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Partition tags in declaration order.
    #[must_use]
    pub fn partitions(&self) -> &[PartitionTag] {
        &self.partitions
    }

    /// Value used when no assignment overrides the flag.
    #[must_use]
    pub const fn default(&self) -> &FlagValue {
        &self.default
    }

    /// Whether assignments accumulate.
    #[must_use]
    pub const fn appends(&self) -> bool {
        self.appends
    }

    /// Where the flag was declared.
    #[must_use]
    pub fn declared_in(&self) -> &str {
        &self.declared_in
    }

    /// Compares everything except the declaration site.
    ///
    /// Two declarations of the same flag are compatible exactly when this
    /// returns `true`.
    #[must_use]
    pub fn same_shape(&self, other: &Self) -> bool {
        self.name == other.name
            && self.partitions == other.partitions
            && self.default == other.default
            && self.appends == other.appends
    }

    /// Record shape checked by [`crate::schemas::flag_schema`].
    #[must_use]
    pub fn to_record(&self) -> Value {
        let partitions: Vec<&str> = self.partitions.iter().map(|tag| tag.as_str()).collect();
        json!({
            "name": self.name,
            "partitions": partitions,
            "default": Value::from(&self.default),
            "appends": self.appends,
            "declared_in": self.declared_in,
        })
    }
}

#[cfg(test)]
mod tests;
