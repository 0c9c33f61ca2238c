//! Classification result assertions.
//!
//! Provides invariant checks that hold for every classifier output.

use helios_interactions::{InteractionInfo, InteractionKind, ResourceTypeOracle};

/// Asserts the structural invariants of a classification result.
///
/// - The interaction is absent iff every identifier is absent.
/// - A resource type, when present, is known to the oracle.
/// - A resource id is present exactly for instance-level interactions.
/// - A version id is present only for vread.
pub fn assert_well_formed(info: &InteractionInfo, oracle: &dyn ResourceTypeOracle) {
    match info.interaction() {
        None => {
            assert_eq!(info.resource_type(), None, "empty result with resource type");
            assert_eq!(info.resource_id(), None, "empty result with resource id");
            assert_eq!(info.version_id(), None, "empty result with version id");
        }
        Some(kind) => {
            if let Some(resource_type) = info.resource_type() {
                assert!(
                    oracle.is_known_resource_type(resource_type),
                    "unknown resource type {} in {:?}",
                    resource_type,
                    info
                );
            }

            assert_eq!(
                info.resource_id().is_some(),
                kind.is_instance_level(),
                "resource id presence does not fit {}",
                kind
            );
            assert_eq!(
                info.version_id().is_some(),
                kind == InteractionKind::Vread,
                "version id presence does not fit {}",
                kind
            );
        }
    }
}

/// Asserts that `actual` equals the scenario's expectation.
pub fn assert_classified(actual: &InteractionInfo, expected: &InteractionInfo, context: &str) {
    assert_eq!(
        actual, expected,
        "Unexpected classification for {}",
        context
    );
}
