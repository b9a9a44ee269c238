//! The aggregate root and its owned sub-entities.
//!
//! Each sub-entity exists in three shapes: the *input* shape used when
//! creating (all fields present), the *patch* shape used in update entries
//! (all fields optional, present fields fully replace their counterpart),
//! and the *stored* shape ([`Stored`]) pairing the input fields with a
//! storage-assigned id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use premia_core::{AddressId, ApplicationId, BeneficiaryId, VehicleId};

/// Relationship of a beneficiary to the primary account holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Spouse,
    Parent,
    Sibling,
    Friend,
    Other,
}

impl Relationship {
    /// The wire-format name of the relationship.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spouse => "spouse",
            Self::Parent => "parent",
            Self::Sibling => "sibling",
            Self::Friend => "friend",
            Self::Other => "other",
        }
    }
}

/// Address fields as submitted when creating or replacing an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressInput {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Vehicle fields as submitted when creating or replacing a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleInput {
    /// 17-character alphanumeric vehicle identification number.
    pub vin: String,
    pub year: i32,
    pub make: String,
    pub model: String,
}

/// Beneficiary fields as submitted when creating or replacing a beneficiary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeneficiaryInput {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    /// Exactly one beneficiary per application carries this flag.
    pub is_primary_account_holder: bool,
    /// Required for non-primary beneficiaries; absent for the primary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<Relationship>,
}

/// Partial address update; present fields replace the stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

impl From<AddressInput> for AddressPatch {
    fn from(input: AddressInput) -> Self {
        Self {
            street: Some(input.street),
            city: Some(input.city),
            state: Some(input.state),
            zip_code: Some(input.zip_code),
        }
    }
}

/// Partial vehicle update; present fields replace the stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehiclePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl From<VehicleInput> for VehiclePatch {
    fn from(input: VehicleInput) -> Self {
        Self {
            vin: Some(input.vin),
            year: Some(input.year),
            make: Some(input.make),
            model: Some(input.model),
        }
    }
}

/// Partial beneficiary update; present fields replace the stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeneficiaryPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_primary_account_holder: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<Relationship>,
}

impl From<BeneficiaryInput> for BeneficiaryPatch {
    fn from(input: BeneficiaryInput) -> Self {
        Self {
            first_name: Some(input.first_name),
            last_name: Some(input.last_name),
            date_of_birth: Some(input.date_of_birth),
            is_primary_account_holder: Some(input.is_primary_account_holder),
            relationship: input.relationship,
        }
    }
}

/// A sub-entity as persisted: a storage-assigned id plus its field values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<Id, T> {
    pub id: Id,
    #[serde(flatten)]
    pub record: T,
}

/// A sub-entity inside a full-state replacement submission.
///
/// An id marks the item as baseline entity `id`, possibly edited; a missing
/// id marks a newly added item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "Id: Deserialize<'de>, T: Deserialize<'de>"))]
pub struct Submitted<Id, T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(flatten)]
    pub record: T,
}

impl<Id, T> Submitted<Id, T> {
    /// A submission entry for a brand-new item.
    #[must_use]
    pub fn new(record: T) -> Self {
        Self { id: None, record }
    }

    /// A submission entry referring back to baseline entity `id`.
    #[must_use]
    pub fn existing(id: Id, record: T) -> Self {
        Self {
            id: Some(id),
            record,
        }
    }
}

pub type Address = Stored<AddressId, AddressInput>;
pub type Beneficiary = Stored<BeneficiaryId, BeneficiaryInput>;
pub type Vehicle = Stored<VehicleId, VehicleInput>;

pub type SubmittedAddress = Submitted<AddressId, AddressInput>;
pub type SubmittedBeneficiary = Submitted<BeneficiaryId, BeneficiaryInput>;
pub type SubmittedVehicle = Submitted<VehicleId, VehicleInput>;

/// A stored insurance application aggregate: the baseline every update is
/// reconciled and validated against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub beneficiaries: Vec<Beneficiary>,
    pub address: Vec<Address>,
    pub vehicles: Vec<Vehicle>,
}

impl Application {
    /// The beneficiary flagged as primary account holder, if any.
    ///
    /// A persisted application always has exactly one; `Option` exists so
    /// validation can express the invariant rather than assume it.
    #[must_use]
    pub fn primary_beneficiary(&self) -> Option<&Beneficiary> {
        self.beneficiaries
            .iter()
            .find(|b| b.record.is_primary_account_holder)
    }

    /// Re-expresses the stored state as a full-state submission, with every
    /// item carrying its baseline id. Diffing an application against this
    /// value yields an empty descriptor.
    #[must_use]
    pub fn to_submission(&self) -> ApplicationSubmission {
        ApplicationSubmission {
            beneficiaries: self
                .beneficiaries
                .iter()
                .map(|b| Submitted::existing(b.id, b.record.clone()))
                .collect(),
            address: self
                .address
                .iter()
                .map(|a| Submitted::existing(a.id, a.record.clone()))
                .collect(),
            vehicles: self
                .vehicles
                .iter()
                .map(|v| Submitted::existing(v.id, v.record.clone()))
                .collect(),
        }
    }
}

/// Payload for creating a brand-new application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationInput {
    pub beneficiaries: Vec<BeneficiaryInput>,
    pub address: Vec<AddressInput>,
    pub vehicles: Vec<VehicleInput>,
}

/// A client-side full-state replacement of an application's sub-collections,
/// the input to the diff engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationSubmission {
    pub beneficiaries: Vec<SubmittedBeneficiary>,
    pub address: Vec<SubmittedAddress>,
    pub vehicles: Vec<SubmittedVehicle>,
}

/// An [`ApplicationInput`] that has passed structural validation and the
/// create-path business checks. Only the engine can construct this, so APIs
/// taking it (quoting, persistence hand-off) cannot receive unvalidated data.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedApplication(ApplicationInput);

impl ValidatedApplication {
    pub(crate) fn new(input: ApplicationInput) -> Self {
        Self(input)
    }

    /// The validated payload.
    #[must_use]
    pub fn as_input(&self) -> &ApplicationInput {
        &self.0
    }

    /// Unwrap the validated payload, e.g. to hand it to storage.
    #[must_use]
    pub fn into_input(self) -> ApplicationInput {
        self.0
    }
}
