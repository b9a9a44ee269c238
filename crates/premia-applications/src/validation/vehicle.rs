//! Structural checks for vehicles.

use std::sync::LazyLock;

use regex::Regex;

use super::rules::{check_int_range, check_max_length, check_pattern};
use super::FieldContext;
use crate::error::Violation;
use crate::models::{VehicleInput, VehiclePatch};

/// VINs: exactly 17 uppercase alphanumeric characters.
static VIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{17}$").expect("VIN_REGEX is a valid regex pattern"));

const VIN_DESCRIPTION: &str = "a 17-character uppercase alphanumeric VIN";

pub(crate) fn validate_vehicle(
    out: &mut Vec<Violation>,
    path: &str,
    input: &VehicleInput,
    ctx: &FieldContext<'_>,
) {
    let limits = ctx.limits;
    check_pattern(
        out,
        &format!("{path}.vin"),
        &input.vin,
        &VIN_REGEX,
        VIN_DESCRIPTION,
    );
    check_int_range(
        out,
        &format!("{path}.year"),
        input.year,
        limits.min_vehicle_year,
        ctx.max_vehicle_year,
    );
    check_max_length(
        out,
        &format!("{path}.make"),
        &input.make,
        limits.make_max_length,
    );
    check_max_length(
        out,
        &format!("{path}.model"),
        &input.model,
        limits.model_max_length,
    );
}

pub(crate) fn validate_vehicle_patch(
    out: &mut Vec<Violation>,
    path: &str,
    patch: &VehiclePatch,
    ctx: &FieldContext<'_>,
) {
    let limits = ctx.limits;
    if let Some(vin) = &patch.vin {
        check_pattern(out, &format!("{path}.vin"), vin, &VIN_REGEX, VIN_DESCRIPTION);
    }
    if let Some(year) = patch.year {
        check_int_range(
            out,
            &format!("{path}.year"),
            year,
            limits.min_vehicle_year,
            ctx.max_vehicle_year,
        );
    }
    if let Some(make) = &patch.make {
        check_max_length(out, &format!("{path}.make"), make, limits.make_max_length);
    }
    if let Some(model) = &patch.model {
        check_max_length(out, &format!("{path}.model"), model, limits.model_max_length);
    }
}
