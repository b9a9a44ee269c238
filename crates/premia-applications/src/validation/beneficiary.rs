//! Structural checks for beneficiaries.
//!
//! The relationship field is conditionally required: a non-primary
//! beneficiary must name its relationship to the primary account holder,
//! while the primary itself must not carry one. The condition is a plain
//! predicate over the sibling flag in the same payload.

use super::rules::{check_max_length, check_min_age};
use super::FieldContext;
use crate::error::Violation;
use crate::models::{BeneficiaryInput, BeneficiaryPatch};

pub(crate) fn validate_beneficiary(
    out: &mut Vec<Violation>,
    path: &str,
    input: &BeneficiaryInput,
    ctx: &FieldContext<'_>,
) {
    let limits = ctx.limits;
    check_max_length(
        out,
        &format!("{path}.first_name"),
        &input.first_name,
        limits.first_name_max_length,
    );
    check_max_length(
        out,
        &format!("{path}.last_name"),
        &input.last_name,
        limits.last_name_max_length,
    );
    check_min_age(
        out,
        &format!("{path}.date_of_birth"),
        input.date_of_birth,
        ctx.dob_cutoff,
        limits.min_age,
    );
    check_relationship(
        out,
        path,
        input.is_primary_account_holder,
        input.relationship.is_some(),
    );
}

pub(crate) fn validate_beneficiary_patch(
    out: &mut Vec<Violation>,
    path: &str,
    patch: &BeneficiaryPatch,
    ctx: &FieldContext<'_>,
) {
    let limits = ctx.limits;
    if let Some(first_name) = &patch.first_name {
        check_max_length(
            out,
            &format!("{path}.first_name"),
            first_name,
            limits.first_name_max_length,
        );
    }
    if let Some(last_name) = &patch.last_name {
        check_max_length(
            out,
            &format!("{path}.last_name"),
            last_name,
            limits.last_name_max_length,
        );
    }
    if let Some(date_of_birth) = patch.date_of_birth {
        check_min_age(
            out,
            &format!("{path}.date_of_birth"),
            date_of_birth,
            ctx.dob_cutoff,
            limits.min_age,
        );
    }
    // The conditional rule only applies when the patch states the flag;
    // otherwise the sibling value is unknown at this layer.
    if let Some(is_primary) = patch.is_primary_account_holder {
        check_relationship(out, path, is_primary, patch.relationship.is_some());
    }
}

fn check_relationship(
    out: &mut Vec<Violation>,
    path: &str,
    is_primary: bool,
    has_relationship: bool,
) {
    if !is_primary && !has_relationship {
        out.push(Violation::field(
            format!("{path}.relationship"),
            "required",
            "relationship is required for non-primary beneficiaries",
        ));
    }
    if is_primary && has_relationship {
        out.push(Violation::field(
            format!("{path}.relationship"),
            "must_be_absent",
            "the primary account holder does not name a relationship",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Limits;
    use crate::models::Relationship;
    use chrono::NaiveDate;

    fn ctx(limits: &Limits) -> FieldContext<'_> {
        FieldContext {
            limits,
            dob_cutoff: NaiveDate::from_ymd_opt(2008, 1, 1).unwrap(),
            max_vehicle_year: 2027,
        }
    }

    fn valid_secondary() -> BeneficiaryInput {
        BeneficiaryInput {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 6, 1).unwrap(),
            is_primary_account_holder: false,
            relationship: Some(Relationship::Spouse),
        }
    }

    #[test]
    fn test_valid_secondary_passes() {
        let limits = Limits::default();
        let mut out = Vec::new();
        validate_beneficiary(&mut out, "beneficiaries[1]", &valid_secondary(), &ctx(&limits));
        assert!(out.is_empty());
    }

    #[test]
    fn test_below_min_age_fails() {
        let limits = Limits::default();
        let mut beneficiary = valid_secondary();
        beneficiary.date_of_birth = NaiveDate::from_ymd_opt(2010, 5, 5).unwrap();
        let mut out = Vec::new();
        validate_beneficiary(&mut out, "beneficiaries[1]", &beneficiary, &ctx(&limits));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].code, "below_min_age");
        assert_eq!(
            out[0].path.as_deref(),
            Some("beneficiaries[1].date_of_birth")
        );
    }

    #[test]
    fn test_secondary_without_relationship_fails() {
        let limits = Limits::default();
        let mut beneficiary = valid_secondary();
        beneficiary.relationship = None;
        let mut out = Vec::new();
        validate_beneficiary(&mut out, "beneficiaries[1]", &beneficiary, &ctx(&limits));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].code, "required");
        assert_eq!(out[0].path.as_deref(), Some("beneficiaries[1].relationship"));
    }

    #[test]
    fn test_primary_with_relationship_fails() {
        let limits = Limits::default();
        let mut beneficiary = valid_secondary();
        beneficiary.is_primary_account_holder = true;
        let mut out = Vec::new();
        validate_beneficiary(&mut out, "beneficiaries[0]", &beneficiary, &ctx(&limits));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].code, "must_be_absent");
    }

    #[test]
    fn test_patch_without_flag_skips_conditional_rule() {
        let limits = Limits::default();
        let patch = BeneficiaryPatch {
            first_name: Some("Grace".to_string()),
            ..BeneficiaryPatch::default()
        };
        let mut out = Vec::new();
        validate_beneficiary_patch(
            &mut out,
            "update.beneficiaries[0].patch",
            &patch,
            &ctx(&limits),
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_patch_demoting_to_secondary_requires_relationship() {
        let limits = Limits::default();
        let patch = BeneficiaryPatch {
            is_primary_account_holder: Some(false),
            ..BeneficiaryPatch::default()
        };
        let mut out = Vec::new();
        validate_beneficiary_patch(
            &mut out,
            "update.beneficiaries[1].patch",
            &patch,
            &ctx(&limits),
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].code, "required");
    }
}
