//! Business invariants.
//!
//! Cross-entity checks evaluated against the baseline aggregate plus the
//! pending descriptor (update path), or against the raw beneficiary list
//! alone (create path). Every check runs and the results are concatenated;
//! nothing short-circuits, so one request can surface several independent
//! invariant breaches at once. Violations from this layer carry no field
//! path.

use std::collections::HashSet;

use serde_json::json;

use crate::config::Limits;
use crate::error::Violation;
use crate::models::{Application, BeneficiaryInput, UpdateDescriptor};

/// Create path: the submitted beneficiary list must contain exactly one
/// primary account holder.
pub(crate) fn check_create(beneficiaries: &[BeneficiaryInput]) -> Vec<Violation> {
    let primary_count = beneficiaries
        .iter()
        .filter(|b| b.is_primary_account_holder)
        .count();

    match primary_count {
        0 => vec![Violation::general(
            "primary_beneficiary_required",
            "A primary beneficiary is required",
        )],
        1 => Vec::new(),
        _ => vec![Violation::general(
            "more_than_one_primary_beneficiary",
            "There can only be one primary beneficiary",
        )],
    }
}

/// Update path: primary-beneficiary guards, count thresholds and the vehicle
/// floor, in that order.
pub(crate) fn check_update(
    baseline: &Application,
    descriptor: &UpdateDescriptor,
    limits: &Limits,
) -> Vec<Violation> {
    let mut out = Vec::new();

    if let Some(primary) = baseline.primary_beneficiary() {
        if descriptor.remove.beneficiaries.contains(&primary.id) {
            out.push(Violation::general(
                "cannot_remove_primary_beneficiary",
                "The primary beneficiary cannot be removed",
            ));
        }

        let demotes_primary = descriptor.update.beneficiaries.iter().any(|entry| {
            entry.id == primary.id && entry.patch.is_primary_account_holder == Some(false)
        });
        if demotes_primary {
            out.push(Violation::general(
                "cannot_change_primary_beneficiary",
                "The primary beneficiary cannot be changed",
            ));
        }
    }

    if descriptor
        .add
        .beneficiaries
        .iter()
        .any(|b| b.is_primary_account_holder)
    {
        out.push(Violation::general(
            "more_than_one_primary_beneficiary",
            "There can only be one primary beneficiary",
        ));
    }

    check_threshold(
        &mut out,
        BENEFICIARY_THRESHOLD,
        baseline.beneficiaries.len(),
        descriptor.add.beneficiaries.len(),
        limits.beneficiaries.max,
    );
    check_threshold(
        &mut out,
        VEHICLE_THRESHOLD,
        baseline.vehicles.len(),
        descriptor.add.vehicles.len(),
        limits.vehicles.max,
    );

    if !descriptor.remove.vehicles.is_empty() {
        let removed: HashSet<_> = descriptor.remove.vehicles.iter().collect();
        let remaining = baseline
            .vehicles
            .iter()
            .filter(|v| !removed.contains(&v.id))
            .count();
        if remaining == 0 {
            out.push(Violation::general(
                "cannot_remove_every_vehicle",
                "Cannot remove every vehicle from an application",
            ));
        }
    }

    out
}

/// Codes and wording for one kind of countable sub-entity. Only
/// beneficiaries and vehicles have add lists, so only they have thresholds.
struct ThresholdKind {
    noun: &'static str,
    max_code: &'static str,
    exceed_code: &'static str,
}

const BENEFICIARY_THRESHOLD: ThresholdKind = ThresholdKind {
    noun: "beneficiaries",
    max_code: "max_beneficiaries_covered",
    exceed_code: "will_exceed_max_beneficiaries_covered",
};

const VEHICLE_THRESHOLD: ThresholdKind = ThresholdKind {
    noun: "vehicles",
    max_code: "max_vehicles_covered",
    exceed_code: "will_exceed_max_vehicles_covered",
};

/// A non-empty add list is rejected when the baseline already sits at the
/// maximum, and otherwise when the addition would push it past the maximum.
/// Each kind reports against its own configured limit.
fn check_threshold(
    out: &mut Vec<Violation>,
    kind: ThresholdKind,
    baseline_count: usize,
    add_count: usize,
    max: usize,
) {
    if add_count == 0 {
        return;
    }

    if baseline_count >= max {
        let noun = kind.noun;
        out.push(Violation::general_with_constraints(
            kind.max_code,
            format!("Maximum number of covered {noun} ({max}) reached"),
            json!({ "max": max }),
        ));
    } else if baseline_count + add_count > max {
        let noun = kind.noun;
        out.push(Violation::general_with_constraints(
            kind.exceed_code,
            format!("Adding {add_count} {noun} would exceed the maximum of {max} covered {noun}"),
            json!({ "max": max, "attempted": add_count }),
        ));
    }
}
