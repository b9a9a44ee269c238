//! Engine facade.
//!
//! [`ApplicationEngine`] bundles the configuration and the reference date
//! every date-derived bound is computed from, and exposes the three
//! operations collaborators call: `validate_create`, `diff` and
//! `validate_update`, plus quote generation for validated applications.
//!
//! The engine is a synchronous computation over in-memory values: no I/O,
//! no shared mutable state, pure with respect to its explicit inputs. It is
//! safe to use concurrently for different application ids; serializing two
//! concurrent updates to the *same* application id is the storage
//! collaborator's responsibility — the engine assumes it is handed a
//! freshly-read, consistent baseline snapshot.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Utc};

use crate::config::EngineConfig;
use crate::diff;
use crate::error::{IntegrityError, SubCollection, UpdateError, Violation};
use crate::invariants;
use crate::models::{
    Application, ApplicationInput, ApplicationSubmission, UpdateDescriptor, ValidatedApplication,
};
use crate::quote;
use crate::report;
use crate::validation::{self, FieldContext};

/// Validation and reconciliation engine for insurance application
/// aggregates.
pub struct ApplicationEngine {
    config: EngineConfig,
    reference_date: NaiveDate,
}

impl ApplicationEngine {
    /// Create an engine using today's date (UTC) as the reference point for
    /// age and vehicle-year bounds.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_reference_date(config, Utc::now().date_naive())
    }

    /// Create an engine pinned to an explicit reference date. Validation
    /// outcomes are then fully deterministic.
    #[must_use]
    pub fn with_reference_date(config: EngineConfig, reference_date: NaiveDate) -> Self {
        Self {
            config,
            reference_date,
        }
    }

    /// The injected configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The reference date bounds are derived from.
    #[must_use]
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Validate a payload for creating a brand-new application.
    ///
    /// Structural checks run first over the whole payload, collecting every
    /// field violation; only when they all pass does the primary-cardinality
    /// invariant run. The returned [`ValidatedApplication`] is the only way
    /// to obtain a quotable/persistable payload.
    ///
    /// # Errors
    ///
    /// The full ordered violation batch; the payload is returned unusable
    /// and nothing may be persisted.
    pub fn validate_create(
        &self,
        input: ApplicationInput,
    ) -> Result<ValidatedApplication, Vec<Violation>> {
        let structural = validation::validate_create(&input, &self.field_context());
        if !structural.is_empty() {
            tracing::debug!(
                violations = structural.len(),
                "create payload rejected by structural validation"
            );
            return Err(structural);
        }

        let violations = report::merge(structural, invariants::check_create(&input.beneficiaries));
        if !violations.is_empty() {
            tracing::debug!(
                violations = violations.len(),
                "create payload rejected by business invariants"
            );
            return Err(violations);
        }

        Ok(ValidatedApplication::new(input))
    }

    /// Convert a client full-state replacement into a minimal delta against
    /// the baseline. Pure and stateless; see [`crate::diff`].
    ///
    /// # Errors
    ///
    /// [`IntegrityError`] when the submission references an id that does not
    /// exist in the baseline.
    pub fn diff(
        &self,
        baseline: &Application,
        candidate: &ApplicationSubmission,
    ) -> Result<UpdateDescriptor, IntegrityError> {
        let descriptor = diff::diff(baseline, candidate)?;
        tracing::debug!(
            application_id = %baseline.id,
            added_beneficiaries = descriptor.add.beneficiaries.len(),
            added_vehicles = descriptor.add.vehicles.len(),
            updated = descriptor.update.beneficiaries.len()
                + descriptor.update.address.len()
                + descriptor.update.vehicles.len(),
            removed = descriptor.remove.beneficiaries.len() + descriptor.remove.vehicles.len(),
            "reconciled full-state submission into delta"
        );
        Ok(descriptor)
    }

    /// Validate a descriptor against the baseline it would mutate.
    ///
    /// Integrity preconditions (descriptor targets the baseline, every
    /// referenced id exists) fail fast; after that, structural checks run
    /// over the descriptor payloads and, once they pass, the business
    /// invariants run over (baseline, descriptor). On success the caller may
    /// hand the descriptor to storage for atomic application; on rejection
    /// nothing may be applied.
    ///
    /// # Errors
    ///
    /// [`UpdateError::Integrity`] for caller bugs,
    /// [`UpdateError::Rejected`] with the full violation batch otherwise.
    pub fn validate_update(
        &self,
        baseline: &Application,
        descriptor: &UpdateDescriptor,
    ) -> Result<(), UpdateError> {
        self.check_integrity(baseline, descriptor)?;

        let structural = validation::validate_descriptor(descriptor, &self.field_context());
        if !structural.is_empty() {
            tracing::debug!(
                application_id = %baseline.id,
                violations = structural.len(),
                "update rejected by structural validation"
            );
            return Err(UpdateError::Rejected(structural));
        }

        let violations = report::merge(
            structural,
            invariants::check_update(baseline, descriptor, &self.config.limits),
        );
        if violations.is_empty() {
            tracing::debug!(application_id = %baseline.id, "update accepted");
            Ok(())
        } else {
            tracing::debug!(
                application_id = %baseline.id,
                violations = violations.len(),
                "update rejected by business invariants"
            );
            Err(UpdateError::Rejected(violations))
        }
    }

    /// A premium quote for a validated application, drawn from the
    /// configured range.
    #[must_use]
    pub fn quote(&self, _validated: &ValidatedApplication) -> u32 {
        quote::random_quote(self.config.quote)
    }

    fn field_context(&self) -> FieldContext<'_> {
        let limits = &self.config.limits;
        let cutoff_year = self.reference_date.year() - i32::try_from(limits.min_age).unwrap_or(0);
        FieldContext {
            limits,
            // Start of the reference year, minus the minimum age
            dob_cutoff: NaiveDate::from_ymd_opt(cutoff_year, 1, 1)
                .unwrap_or(NaiveDate::MIN),
            max_vehicle_year: self.reference_date.year() + 1,
        }
    }

    /// Every id a descriptor references must exist in the baseline, and the
    /// descriptor must target the baseline's application. Violating either
    /// is a caller bug, not invalid user input.
    fn check_integrity(
        &self,
        baseline: &Application,
        descriptor: &UpdateDescriptor,
    ) -> Result<(), IntegrityError> {
        if descriptor.application_id != baseline.id {
            return Err(IntegrityError::ApplicationMismatch {
                expected: baseline.id,
                actual: descriptor.application_id,
            });
        }

        let beneficiary_ids: HashSet<_> = baseline.beneficiaries.iter().map(|b| b.id).collect();
        let address_ids: HashSet<_> = baseline.address.iter().map(|a| a.id).collect();
        let vehicle_ids: HashSet<_> = baseline.vehicles.iter().map(|v| v.id).collect();

        for entry in &descriptor.update.beneficiaries {
            if !beneficiary_ids.contains(&entry.id) {
                return Err(IntegrityError::UnknownEntity {
                    collection: SubCollection::Beneficiaries,
                    id: entry.id.into(),
                });
            }
        }
        for entry in &descriptor.update.address {
            if !address_ids.contains(&entry.id) {
                return Err(IntegrityError::UnknownEntity {
                    collection: SubCollection::Address,
                    id: entry.id.into(),
                });
            }
        }
        for entry in &descriptor.update.vehicles {
            if !vehicle_ids.contains(&entry.id) {
                return Err(IntegrityError::UnknownEntity {
                    collection: SubCollection::Vehicles,
                    id: entry.id.into(),
                });
            }
        }
        for id in &descriptor.remove.beneficiaries {
            if !beneficiary_ids.contains(id) {
                return Err(IntegrityError::UnknownEntity {
                    collection: SubCollection::Beneficiaries,
                    id: (*id).into(),
                });
            }
        }
        for id in &descriptor.remove.vehicles {
            if !vehicle_ids.contains(id) {
                return Err(IntegrityError::UnknownEntity {
                    collection: SubCollection::Vehicles,
                    id: (*id).into(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AddressInput, BeneficiaryInput, Relationship, Stored, VehicleInput};
    use premia_core::{AddressId, ApplicationId, BeneficiaryId, VehicleId};

    fn engine() -> ApplicationEngine {
        ApplicationEngine::with_reference_date(
            EngineConfig::default(),
            NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
        )
    }

    fn valid_input() -> ApplicationInput {
        ApplicationInput {
            beneficiaries: vec![BeneficiaryInput {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(1985, 6, 1).unwrap(),
                is_primary_account_holder: true,
                relationship: None,
            }],
            address: vec![AddressInput {
                street: "12 Main St".to_string(),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                zip_code: "62704".to_string(),
            }],
            vehicles: vec![VehicleInput {
                vin: "1HGCM82633A004352".to_string(),
                year: 2018,
                make: "Honda".to_string(),
                model: "Accord".to_string(),
            }],
        }
    }

    fn baseline() -> Application {
        let input = valid_input();
        Application {
            id: ApplicationId::from_raw(1),
            beneficiaries: vec![Stored {
                id: BeneficiaryId::from_raw(1),
                record: input.beneficiaries[0].clone(),
            }],
            address: vec![Stored {
                id: AddressId::from_raw(1),
                record: input.address[0].clone(),
            }],
            vehicles: vec![Stored {
                id: VehicleId::from_raw(1),
                record: input.vehicles[0].clone(),
            }],
        }
    }

    #[test]
    fn test_reference_date_drives_field_bounds() {
        let engine = engine();
        let ctx = engine.field_context();
        assert_eq!(ctx.dob_cutoff, NaiveDate::from_ymd_opt(2008, 1, 1).unwrap());
        assert_eq!(ctx.max_vehicle_year, 2027);
    }

    #[test]
    fn test_validate_create_happy_path() {
        let validated = engine().validate_create(valid_input()).unwrap();
        assert_eq!(validated.as_input().beneficiaries.len(), 1);
    }

    #[test]
    fn test_structural_failure_suppresses_invariant_checks() {
        let mut input = valid_input();
        input.vehicles[0].vin = "bad".to_string();
        // Also remove the primary flag; only the structural error must surface
        input.beneficiaries[0].is_primary_account_holder = false;
        input.beneficiaries[0].relationship = Some(Relationship::Other);

        let violations = engine().validate_create(input).unwrap_err();
        assert!(violations.iter().all(|v| v.path.is_some()));
    }

    #[test]
    fn test_descriptor_for_other_application_is_a_mismatch() {
        let app = baseline();
        let descriptor = UpdateDescriptor::new(ApplicationId::from_raw(2));
        let err = engine().validate_update(&app, &descriptor).unwrap_err();
        assert!(matches!(
            err,
            UpdateError::Integrity(IntegrityError::ApplicationMismatch { .. })
        ));
    }

    #[test]
    fn test_unknown_remove_id_is_an_integrity_error() {
        let app = baseline();
        let mut descriptor = UpdateDescriptor::new(app.id);
        descriptor.remove.vehicles.push(VehicleId::from_raw(404));
        let err = engine().validate_update(&app, &descriptor).unwrap_err();
        assert!(matches!(
            err,
            UpdateError::Integrity(IntegrityError::UnknownEntity {
                collection: SubCollection::Vehicles,
                id: 404,
            })
        ));
    }

    #[test]
    fn test_empty_descriptor_is_accepted() {
        let app = baseline();
        let descriptor = UpdateDescriptor::new(app.id);
        assert!(engine().validate_update(&app, &descriptor).is_ok());
    }

    #[test]
    fn test_quote_requires_validated_application() {
        let validated = engine().validate_create(valid_input()).unwrap();
        let quote = engine().quote(&validated);
        let range = engine().config().quote;
        assert!((range.min..=range.max).contains(&quote));
    }
}
