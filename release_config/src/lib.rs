//! Release configuration flag engine.
//!
//! The crate turns a list of flag declarations and a list of value
//! assignments into the flat variable set a build system consumes for one
//! release configuration. Declarations are validated as they are built; the
//! merge then checks both lists against fixed structural schemas, reconciles
//! redundant declarations, fans partition ownership out, resolves values with
//! append or replace semantics, and emits the variables together with their
//! bookkeeping keys.
//!
//! ```rust
//! use release_config::{FlagDeclaration, Partition, release_config};
//!
//! let flags = [FlagDeclaration::new("RELEASE_FOO", ["product"], false, false, "flags.scl")?];
//! let variables = release_config(&flags, &[])?;
//!
//! assert_eq!(variables.value_of("RELEASE_FOO").and_then(|v| v.as_str()), Some(""));
//! assert_eq!(variables.all_flags(), vec!["RELEASE_FOO"]);
//! assert_eq!(variables.partition_roster(Partition::Product), vec!["RELEASE_FOO"]);
//! # Ok::<_, release_config::ReleaseConfigError>(())
//! ```
//!
//! The merge holds no state between calls, so independent merges may run in
//! parallel.

pub mod constants;
mod declaration;
mod engine;
mod error;
mod output;
mod partition;
pub mod records;
pub mod schemas;
mod value;

pub use declaration::{FlagDeclaration, FlagDeclarationBuilder};
pub use engine::release_config;
pub use error::{RecordList, ReleaseConfigError, ReleaseConfigResult};
pub use output::{FlagField, ResolvedVariables, keys};
pub use partition::{ParsePartitionError, Partition, PartitionTag};
pub use records::release_config_from_records;
pub use value::{FlagValue, ValueAssignment};

pub use release_config_schema as schema;
pub use serde_json;
