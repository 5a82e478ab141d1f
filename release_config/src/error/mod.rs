//! Error types produced by the declaration builder and the merge engine.

mod constructors;
mod types;

pub use types::{RecordList, ReleaseConfigError, ReleaseConfigResult};
