//! The update descriptor: a minimal add/update/remove delta against a
//! stored baseline.
//!
//! Descriptors are produced either directly by a caller or by the diff
//! engine, validated by the engine, then consumed exactly once by the
//! storage collaborator. They are never persisted.
//!
//! The address collection appears only under `update`: the address count is
//! fixed, so adds and removals of addresses are not representable.

use serde::{Deserialize, Serialize};

use premia_core::{AddressId, ApplicationId, BeneficiaryId, VehicleId};

use super::application::{
    AddressPatch, BeneficiaryInput, BeneficiaryPatch, VehicleInput, VehiclePatch,
};

/// An entry in the `update` section: the target id plus a full-replacement
/// patch carrying the complete new values for that sub-entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityPatch<Id, P> {
    pub id: Id,
    pub patch: P,
}

/// Newly added sub-entities. Items carry no id; storage assigns one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddedEntities {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub beneficiaries: Vec<BeneficiaryInput>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vehicles: Vec<VehicleInput>,
}

impl AddedEntities {
    /// Whether no additions are requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.beneficiaries.is_empty() && self.vehicles.is_empty()
    }
}

/// Edits to existing sub-entities, keyed by baseline id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatedEntities {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub beneficiaries: Vec<EntityPatch<BeneficiaryId, BeneficiaryPatch>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address: Vec<EntityPatch<AddressId, AddressPatch>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vehicles: Vec<EntityPatch<VehicleId, VehiclePatch>>,
}

impl UpdatedEntities {
    /// Whether no edits are requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.beneficiaries.is_empty() && self.address.is_empty() && self.vehicles.is_empty()
    }
}

/// Baseline ids of sub-entities to delete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemovedEntities {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub beneficiaries: Vec<BeneficiaryId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vehicles: Vec<VehicleId>,
}

impl RemovedEntities {
    /// Whether no removals are requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.beneficiaries.is_empty() && self.vehicles.is_empty()
    }
}

/// A validated-or-validatable delta against one application aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateDescriptor {
    pub application_id: ApplicationId,
    #[serde(default)]
    pub add: AddedEntities,
    #[serde(default)]
    pub update: UpdatedEntities,
    #[serde(default)]
    pub remove: RemovedEntities,
}

impl UpdateDescriptor {
    /// An empty descriptor targeting `application_id`.
    #[must_use]
    pub fn new(application_id: ApplicationId) -> Self {
        Self {
            application_id,
            add: AddedEntities::default(),
            update: UpdatedEntities::default(),
            remove: RemovedEntities::default(),
        }
    }

    /// Whether the descriptor describes no change at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.update.is_empty() && self.remove.is_empty()
    }
}
