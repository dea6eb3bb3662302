use crate::records::resolve_fork;
use clap::ArgMatches;
use ssz::{SszSchema, TypeDescriptor};
use std::str::FromStr;
use types::{schema_for, ChainSpec, Role};

pub fn run(spec: &ChainSpec, matches: &ArgMatches) -> Result<(), String> {
    let type_str = matches
        .get_one::<String>("type")
        .ok_or("No type supplied")?;

    let descriptor = match Role::from_str(type_str) {
        Ok(role) => {
            let fork_name = resolve_fork(matches, spec)?;
            info!("Schema of {} at the {} fork", role, fork_name);
            schema_for(fork_name, role)
                .map_err(|e| format!("No schema available: {:?}", e))?
                .clone()
        }
        Err(_) => dispatch_fixed_record!(type_str.as_str(), descriptor())
            .ok_or_else(|| format!("Unknown type: {}", type_str))?,
    };

    print!("{}", descriptor);

    Ok(())
}

fn descriptor<T: SszSchema>() -> TypeDescriptor {
    T::ssz_schema()
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{Checkpoint, ForkName};

    #[test]
    fn every_fixed_record_has_a_descriptor() {
        let checkpoint = dispatch_fixed_record!("Checkpoint", descriptor()).unwrap();
        assert_eq!(checkpoint, Checkpoint::ssz_schema());
        assert_eq!(checkpoint.fixed_len(), Some(40));

        assert!(dispatch_fixed_record!("BeaconState", descriptor()).is_none());
    }

    #[test]
    fn roles_resolve_through_the_cache() {
        let role = Role::from_str("BeaconState").unwrap();
        let descriptor = schema_for(ForkName::Capella, role).unwrap();
        assert!(descriptor.field("historical_summaries").is_some());
        assert!(descriptor.is_variable_size());
    }
}
