//! Type descriptors for every (fork, role) pair, built once on first use.
use crate::beacon_block::{
    BeaconBlockAltair, BeaconBlockBase, BeaconBlockBellatrix, BeaconBlockCapella, BeaconBlockDeneb,
};
use crate::beacon_block_body::{
    BeaconBlockBodyAltair, BeaconBlockBodyBase, BeaconBlockBodyBellatrix, BeaconBlockBodyCapella,
    BeaconBlockBodyDeneb,
};
use crate::*;
use lazy_static::lazy_static;
use ssz::{SszSchema, TypeDescriptor};
use std::collections::HashMap;

lazy_static! {
    static ref SCHEMAS: HashMap<(ForkName, Role), TypeDescriptor> = {
        let mut schemas = HashMap::new();
        for fork_name in ForkName::list_all() {
            for role in Role::list_all() {
                if let Some(descriptor) = build_schema(fork_name, role) {
                    schemas.insert((fork_name, role), descriptor);
                }
            }
        }
        schemas
    };
}

/// Returns the descriptor of the record shape that `role` takes at `fork_name`.
pub fn schema_for(fork_name: ForkName, role: Role) -> Result<&'static TypeDescriptor, Error> {
    SCHEMAS
        .get(&(fork_name, role))
        .ok_or(Error::SchemaMismatch { fork_name, role })
}

fn build_schema(fork_name: ForkName, role: Role) -> Option<TypeDescriptor> {
    use ForkName::*;

    let shape = role.shape_fork(fork_name)?;
    let descriptor = match (role, shape) {
        (Role::BeaconBlock, Base) => BeaconBlockBase::ssz_schema(),
        (Role::BeaconBlock, Altair) => BeaconBlockAltair::ssz_schema(),
        (Role::BeaconBlock, Bellatrix) => BeaconBlockBellatrix::ssz_schema(),
        (Role::BeaconBlock, Capella) => BeaconBlockCapella::ssz_schema(),
        (Role::BeaconBlock, Deneb) => BeaconBlockDeneb::ssz_schema(),

        (Role::SignedBeaconBlock, Base) => SignedBeaconBlockBase::ssz_schema(),
        (Role::SignedBeaconBlock, Altair) => SignedBeaconBlockAltair::ssz_schema(),
        (Role::SignedBeaconBlock, Bellatrix) => SignedBeaconBlockBellatrix::ssz_schema(),
        (Role::SignedBeaconBlock, Capella) => SignedBeaconBlockCapella::ssz_schema(),
        (Role::SignedBeaconBlock, Deneb) => SignedBeaconBlockDeneb::ssz_schema(),

        (Role::BeaconBlockBody, Base) => BeaconBlockBodyBase::ssz_schema(),
        (Role::BeaconBlockBody, Altair) => BeaconBlockBodyAltair::ssz_schema(),
        (Role::BeaconBlockBody, Bellatrix) => BeaconBlockBodyBellatrix::ssz_schema(),
        (Role::BeaconBlockBody, Capella) => BeaconBlockBodyCapella::ssz_schema(),
        (Role::BeaconBlockBody, Deneb) => BeaconBlockBodyDeneb::ssz_schema(),

        (Role::BeaconState, Base) => BeaconStateBase::ssz_schema(),
        (Role::BeaconState, Altair) => BeaconStateAltair::ssz_schema(),
        (Role::BeaconState, Bellatrix) => BeaconStateBellatrix::ssz_schema(),
        (Role::BeaconState, Capella) => BeaconStateCapella::ssz_schema(),
        (Role::BeaconState, Deneb) => BeaconStateDeneb::ssz_schema(),

        (Role::ExecutionPayload, Bellatrix) => ExecutionPayloadBellatrix::ssz_schema(),
        (Role::ExecutionPayload, Capella) => ExecutionPayloadCapella::ssz_schema(),
        (Role::ExecutionPayload, Deneb) => ExecutionPayloadDeneb::ssz_schema(),

        (Role::ExecutionPayloadHeader, Bellatrix) => ExecutionPayloadHeaderBellatrix::ssz_schema(),
        (Role::ExecutionPayloadHeader, Capella) => ExecutionPayloadHeaderCapella::ssz_schema(),
        (Role::ExecutionPayloadHeader, Deneb) => ExecutionPayloadHeaderDeneb::ssz_schema(),

        (Role::BlindedBeaconBlock, Bellatrix) => BlindedBeaconBlock::ssz_schema(),
        (Role::SignedBlindedBeaconBlock, Bellatrix) => SignedBlindedBeaconBlock::ssz_schema(),

        (Role::LightClientHeader, Altair) => LightClientHeaderAltair::ssz_schema(),
        (Role::LightClientHeader, Capella) => LightClientHeaderCapella::ssz_schema(),
        (Role::LightClientHeader, Deneb) => LightClientHeaderDeneb::ssz_schema(),

        (Role::LightClientBootstrap, Altair) => LightClientBootstrapAltair::ssz_schema(),
        (Role::LightClientBootstrap, Capella) => LightClientBootstrapCapella::ssz_schema(),
        (Role::LightClientBootstrap, Deneb) => LightClientBootstrapDeneb::ssz_schema(),

        (Role::LightClientUpdate, Altair) => LightClientUpdateAltair::ssz_schema(),
        (Role::LightClientUpdate, Capella) => LightClientUpdateCapella::ssz_schema(),
        (Role::LightClientUpdate, Deneb) => LightClientUpdateDeneb::ssz_schema(),

        (Role::LightClientFinalityUpdate, Altair) => LightClientFinalityUpdateAltair::ssz_schema(),
        (Role::LightClientFinalityUpdate, Capella) => {
            LightClientFinalityUpdateCapella::ssz_schema()
        }
        (Role::LightClientFinalityUpdate, Deneb) => LightClientFinalityUpdateDeneb::ssz_schema(),

        (Role::LightClientOptimisticUpdate, Altair) => {
            LightClientOptimisticUpdateAltair::ssz_schema()
        }
        (Role::LightClientOptimisticUpdate, Capella) => {
            LightClientOptimisticUpdateCapella::ssz_schema()
        }
        (Role::LightClientOptimisticUpdate, Deneb) => {
            LightClientOptimisticUpdateDeneb::ssz_schema()
        }

        _ => return None,
    };
    Some(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssz::Kind;

    #[test]
    fn every_role_has_a_schema_once_introduced() {
        for fork_name in ForkName::list_all() {
            for role in Role::list_all() {
                assert_eq!(
                    schema_for(fork_name, role).is_ok(),
                    role.shape_fork(fork_name).is_some(),
                    "{} at {}",
                    role,
                    fork_name
                );
            }
        }
    }

    #[test]
    fn schemas_are_cached() {
        let first = schema_for(ForkName::Deneb, Role::BeaconState).unwrap();
        let second = schema_for(ForkName::Deneb, Role::BeaconState).unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn mismatch() {
        let err = schema_for(ForkName::Altair, Role::ExecutionPayload).unwrap_err();
        assert_eq!(
            err,
            Error::SchemaMismatch {
                fork_name: ForkName::Altair,
                role: Role::ExecutionPayload,
            }
        );
        assert_eq!(err.kind(), ssz::ErrorKind::SchemaMismatch);
    }

    #[test]
    fn state_fields_per_fork() {
        let base = schema_for(ForkName::Base, Role::BeaconState).unwrap();
        let altair = schema_for(ForkName::Altair, Role::BeaconState).unwrap();
        let capella = schema_for(ForkName::Capella, Role::BeaconState).unwrap();

        assert!(matches!(base.kind(), Kind::Container { .. }));
        assert_eq!(base.fields().len(), 21);
        assert_eq!(altair.fields().len(), 24);
        assert_eq!(capella.fields().len(), 28);

        assert!(base.field("previous_epoch_attestations").is_some());
        assert!(altair.field("previous_epoch_attestations").is_none());
        assert!(altair.field("inactivity_scores").is_some());
        assert!(capella.field("historical_summaries").is_some());
        assert!(altair.min_len() > base.min_len());
    }

    #[test]
    fn bellatrix_light_clients_use_altair_shapes() {
        assert_eq!(
            schema_for(ForkName::Bellatrix, Role::LightClientUpdate).unwrap(),
            schema_for(ForkName::Altair, Role::LightClientUpdate).unwrap()
        );
        assert_ne!(
            schema_for(ForkName::Capella, Role::LightClientHeader).unwrap(),
            schema_for(ForkName::Altair, Role::LightClientHeader).unwrap()
        );
    }
}
