//! Fixed vocabulary shared by the builders, the schemas and the output keys.

/// Prefix every release flag name must carry.
pub const FLAG_PREFIX: &str = "RELEASE_";

/// Partition tag standing for every concrete partition.
pub const ALL_PARTITIONS_TAG: &str = "all";

/// Token emitted for a boolean `true`; `false` formats to the empty string.
pub const TRUTHY_TOKEN: &str = "true";

/// Root of every bookkeeping key in the resolved variable set.
pub const ALL_FLAGS_KEY: &str = "_ALL_RELEASE_FLAGS";

/// Characters a flag name must not contain.
pub(crate) const NAME_WHITESPACE: [char; 3] = [' ', '\t', '\n'];
