//! Final variable set assembly.

use std::collections::HashMap;

use super::dedup::DeclarationSet;
use super::partitions::PartitionIndex;
use super::resolve::ResolvedValue;
use crate::constants::ALL_FLAGS_KEY;
use crate::output::{FlagField, ResolvedVariables, keys};
use crate::value::FlagValue;

pub(crate) fn assemble(
    declarations: &DeclarationSet<'_>,
    partitions: &PartitionIndex<'_>,
    resolved: &HashMap<&str, ResolvedValue>,
) -> ResolvedVariables {
    let mut variables = ResolvedVariables::default();

    let mut names: Vec<&str> = declarations.iter().map(|flag| flag.name()).collect();
    names.sort_unstable();
    variables.insert(ALL_FLAGS_KEY.to_owned(), FlagValue::string_list(names));

    for (partition, names) in partitions.iter() {
        variables.insert(
            keys::partition_key(partition),
            FlagValue::string_list(names.iter().copied()),
        );
    }

    for flag in declarations.iter() {
        let name = flag.name();
        let (chosen, set_in) = resolved.get(name).map_or_else(
            || (flag.default(), flag.declared_in()),
            |hit| (&hit.value, hit.set_in.as_str()),
        );
        let value = chosen.formatted();
        let tags = flag.partitions().iter().map(|tag| tag.as_str());

        for field in FlagField::ALL {
            let entry = match field {
                FlagField::Partitions => FlagValue::string_list(tags.clone()),
                FlagField::Default => flag.default().formatted(),
                FlagField::Value => value.clone(),
                FlagField::DeclaredIn => FlagValue::from(flag.declared_in()),
                FlagField::SetIn => FlagValue::from(set_in),
            };
            variables.insert(keys::flag_key(name, field), entry);
        }
        variables.insert(name.to_owned(), value);
    }
    variables
}
