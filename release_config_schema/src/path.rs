//! Locations inside a validated value.

use std::fmt;

/// One step from a container to a child value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PathSegment {
    /// Position within a list.
    Index(usize),
    /// Key within a dictionary.
    Key(String),
}

/// Path from the validated root to a nested value.
///
/// Renders as `[2].partitions[1]`; the root itself renders as `<root>`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct JsonPath(Vec<PathSegment>);

impl JsonPath {
    /// The empty path addressing the root value.
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Segments from the root outwards.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Returns `true` when the path addresses the root value.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Run `f` with `segment` appended, restoring the path afterwards.
    pub(crate) fn descend<T>(
        &mut self,
        segment: PathSegment,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        self.0.push(segment);
        let outcome = f(self);
        self.0.pop();
        outcome
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("<root>");
        }
        for (position, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Index(index) => write!(f, "[{index}]")?,
                PathSegment::Key(key) if position == 0 => f.write_str(key)?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
            }
        }
        Ok(())
    }
}
