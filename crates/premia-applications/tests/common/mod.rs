//! Common test utilities for premia-applications integration tests.
//!
//! Builders produce deterministic sample aggregates, and `apply_descriptor`
//! plays the role of the storage collaborator so reconciliation round-trips
//! can be exercised without a database.

#![allow(dead_code)]

use chrono::NaiveDate;
use premia_applications::config::EngineConfig;
use premia_applications::models::{
    AddressInput, Application, ApplicationInput, BeneficiaryInput, Relationship, Stored,
    UpdateDescriptor, VehicleInput,
};
use premia_applications::ApplicationEngine;
use premia_core::{AddressId, ApplicationId, BeneficiaryId, VehicleId};

/// Fixed reference date so age and vehicle-year bounds never drift.
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
}

/// Engine under test with the default configuration.
pub fn engine() -> ApplicationEngine {
    ApplicationEngine::with_reference_date(EngineConfig::default(), reference_date())
}

pub fn sample_address(n: u32) -> AddressInput {
    AddressInput {
        street: format!("{n} Main St"),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        zip_code: "62704".to_string(),
    }
}

pub fn sample_vehicle(n: u32) -> VehicleInput {
    VehicleInput {
        vin: format!("1HGCM82633A{n:06}"),
        year: 2015,
        make: "Honda".to_string(),
        model: "Accord".to_string(),
    }
}

pub fn sample_primary(n: u32) -> BeneficiaryInput {
    BeneficiaryInput {
        first_name: format!("Primary{n}"),
        last_name: "Holder".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1980, 3, 14).unwrap(),
        is_primary_account_holder: true,
        relationship: None,
    }
}

pub fn sample_secondary(n: u32) -> BeneficiaryInput {
    BeneficiaryInput {
        first_name: format!("Secondary{n}"),
        last_name: "Covered".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1992, 11, 2).unwrap(),
        is_primary_account_holder: false,
        relationship: Some(Relationship::Sibling),
    }
}

/// A valid create payload: one primary plus `secondaries` secondaries, one
/// address, `vehicles` vehicles.
pub fn valid_input(secondaries: u32, vehicles: u32) -> ApplicationInput {
    let mut beneficiaries = vec![sample_primary(0)];
    beneficiaries.extend((1..=secondaries).map(sample_secondary));
    ApplicationInput {
        beneficiaries,
        address: vec![sample_address(12)],
        vehicles: (1..=vehicles).map(sample_vehicle).collect(),
    }
}

/// Persist a create payload the way the storage collaborator would,
/// assigning sequential ids per collection.
pub fn persist(application_id: i64, input: ApplicationInput) -> Application {
    Application {
        id: ApplicationId::from_raw(application_id),
        beneficiaries: input
            .beneficiaries
            .into_iter()
            .enumerate()
            .map(|(i, record)| Stored {
                id: BeneficiaryId::from_raw(i as i64 + 1),
                record,
            })
            .collect(),
        address: input
            .address
            .into_iter()
            .enumerate()
            .map(|(i, record)| Stored {
                id: AddressId::from_raw(i as i64 + 1),
                record,
            })
            .collect(),
        vehicles: input
            .vehicles
            .into_iter()
            .enumerate()
            .map(|(i, record)| Stored {
                id: VehicleId::from_raw(i as i64 + 1),
                record,
            })
            .collect(),
    }
}

/// Apply a validated descriptor to the baseline the way the storage
/// collaborator would: removals, then in-place updates, then additions with
/// freshly assigned ids starting at `next_id`.
pub fn apply_descriptor(
    baseline: &Application,
    descriptor: &UpdateDescriptor,
    next_id: i64,
) -> Application {
    let mut result = baseline.clone();
    let mut next_id = next_id;

    result
        .beneficiaries
        .retain(|b| !descriptor.remove.beneficiaries.contains(&b.id));
    result
        .vehicles
        .retain(|v| !descriptor.remove.vehicles.contains(&v.id));

    for entry in &descriptor.update.beneficiaries {
        let target = result
            .beneficiaries
            .iter_mut()
            .find(|b| b.id == entry.id)
            .expect("descriptor was validated against this baseline");
        let record = &mut target.record;
        if let Some(first_name) = &entry.patch.first_name {
            record.first_name = first_name.clone();
        }
        if let Some(last_name) = &entry.patch.last_name {
            record.last_name = last_name.clone();
        }
        if let Some(date_of_birth) = entry.patch.date_of_birth {
            record.date_of_birth = date_of_birth;
        }
        if let Some(is_primary) = entry.patch.is_primary_account_holder {
            record.is_primary_account_holder = is_primary;
        }
        if let Some(relationship) = entry.patch.relationship {
            record.relationship = Some(relationship);
        }
    }
    for entry in &descriptor.update.address {
        let target = result
            .address
            .iter_mut()
            .find(|a| a.id == entry.id)
            .expect("descriptor was validated against this baseline");
        let record = &mut target.record;
        if let Some(street) = &entry.patch.street {
            record.street = street.clone();
        }
        if let Some(city) = &entry.patch.city {
            record.city = city.clone();
        }
        if let Some(state) = &entry.patch.state {
            record.state = state.clone();
        }
        if let Some(zip_code) = &entry.patch.zip_code {
            record.zip_code = zip_code.clone();
        }
    }
    for entry in &descriptor.update.vehicles {
        let target = result
            .vehicles
            .iter_mut()
            .find(|v| v.id == entry.id)
            .expect("descriptor was validated against this baseline");
        let record = &mut target.record;
        if let Some(vin) = &entry.patch.vin {
            record.vin = vin.clone();
        }
        if let Some(year) = entry.patch.year {
            record.year = year;
        }
        if let Some(make) = &entry.patch.make {
            record.make = make.clone();
        }
        if let Some(model) = &entry.patch.model {
            record.model = model.clone();
        }
    }

    for record in &descriptor.add.beneficiaries {
        result.beneficiaries.push(Stored {
            id: BeneficiaryId::from_raw(next_id),
            record: record.clone(),
        });
        next_id += 1;
    }
    for record in &descriptor.add.vehicles {
        result.vehicles.push(Stored {
            id: VehicleId::from_raw(next_id),
            record: record.clone(),
        });
        next_id += 1;
    }

    result
}
