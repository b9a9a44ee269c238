//! Structural validation (per-field checks).
//!
//! This layer checks shapes, lengths, patterns and ranges — everything that
//! can be judged by looking at a single payload. It never fails fast: every
//! violation across every field and every sub-entity is collected and tagged
//! with the dotted path of the offending field before returning. Cross-entity
//! business rules live in [`crate::invariants`] and only run once this layer
//! passes.

mod address;
mod beneficiary;
mod rules;
mod vehicle;

use chrono::NaiveDate;

use crate::config::Limits;
use crate::error::Violation;
use crate::models::{ApplicationInput, UpdateDescriptor};

use address::{validate_address, validate_address_patch};
use beneficiary::{validate_beneficiary, validate_beneficiary_patch};
use rules::{check_count_range, check_max_count};
use vehicle::{validate_vehicle, validate_vehicle_patch};

/// Bounds available to every field check: the configured limits plus the
/// bounds derived from the engine's reference date.
pub(crate) struct FieldContext<'a> {
    pub limits: &'a Limits,
    /// Latest acceptable date of birth.
    pub dob_cutoff: NaiveDate,
    /// Newest acceptable vehicle model year.
    pub max_vehicle_year: i32,
}

/// Validate a create payload: every sub-entity in its full (all fields
/// required) shape, plus the per-collection count bounds.
pub(crate) fn validate_create(input: &ApplicationInput, ctx: &FieldContext<'_>) -> Vec<Violation> {
    let mut out = Vec::new();
    let limits = ctx.limits;

    check_count_range(
        &mut out,
        "beneficiaries",
        input.beneficiaries.len(),
        limits.beneficiaries,
    );
    check_count_range(&mut out, "address", input.address.len(), limits.address);
    check_count_range(&mut out, "vehicles", input.vehicles.len(), limits.vehicles);

    for (i, beneficiary) in input.beneficiaries.iter().enumerate() {
        validate_beneficiary(&mut out, &format!("beneficiaries[{i}]"), beneficiary, ctx);
    }
    for (i, address) in input.address.iter().enumerate() {
        validate_address(&mut out, &format!("address[{i}]"), address, ctx);
    }
    for (i, vehicle) in input.vehicles.iter().enumerate() {
        validate_vehicle(&mut out, &format!("vehicles[{i}]"), vehicle, ctx);
    }

    out
}

/// Validate an update descriptor: added sub-entities in their full shape,
/// update entries in their patch shape, and structural caps on every list.
pub(crate) fn validate_descriptor(
    descriptor: &UpdateDescriptor,
    ctx: &FieldContext<'_>,
) -> Vec<Violation> {
    let mut out = Vec::new();
    let limits = ctx.limits;

    check_max_count(
        &mut out,
        "add.beneficiaries",
        descriptor.add.beneficiaries.len(),
        limits.beneficiaries.max,
    );
    check_max_count(
        &mut out,
        "add.vehicles",
        descriptor.add.vehicles.len(),
        limits.vehicles.max,
    );
    check_max_count(
        &mut out,
        "update.beneficiaries",
        descriptor.update.beneficiaries.len(),
        limits.beneficiaries.max,
    );
    check_max_count(
        &mut out,
        "update.address",
        descriptor.update.address.len(),
        limits.address.max,
    );
    check_max_count(
        &mut out,
        "update.vehicles",
        descriptor.update.vehicles.len(),
        limits.vehicles.max,
    );
    check_max_count(
        &mut out,
        "remove.beneficiaries",
        descriptor.remove.beneficiaries.len(),
        limits.beneficiaries.max,
    );
    check_max_count(
        &mut out,
        "remove.vehicles",
        descriptor.remove.vehicles.len(),
        limits.vehicles.max,
    );

    for (i, beneficiary) in descriptor.add.beneficiaries.iter().enumerate() {
        validate_beneficiary(&mut out, &format!("add.beneficiaries[{i}]"), beneficiary, ctx);
    }
    for (i, vehicle) in descriptor.add.vehicles.iter().enumerate() {
        validate_vehicle(&mut out, &format!("add.vehicles[{i}]"), vehicle, ctx);
    }

    for (i, entry) in descriptor.update.beneficiaries.iter().enumerate() {
        validate_beneficiary_patch(
            &mut out,
            &format!("update.beneficiaries[{i}].patch"),
            &entry.patch,
            ctx,
        );
    }
    for (i, entry) in descriptor.update.address.iter().enumerate() {
        validate_address_patch(
            &mut out,
            &format!("update.address[{i}].patch"),
            &entry.patch,
            ctx,
        );
    }
    for (i, entry) in descriptor.update.vehicles.iter().enumerate() {
        validate_vehicle_patch(
            &mut out,
            &format!("update.vehicles[{i}].patch"),
            &entry.patch,
            ctx,
        );
    }

    out
}
