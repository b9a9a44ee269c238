//! Domain model for the insurance application aggregate.

mod application;
mod update;

pub use application::{
    Address, AddressInput, AddressPatch, Application, ApplicationInput, ApplicationSubmission,
    Beneficiary, BeneficiaryInput, BeneficiaryPatch, Relationship, Stored, Submitted,
    SubmittedAddress, SubmittedBeneficiary, SubmittedVehicle, ValidatedApplication, Vehicle,
    VehicleInput, VehiclePatch,
};
pub use update::{
    AddedEntities, EntityPatch, RemovedEntities, UpdateDescriptor, UpdatedEntities,
};
