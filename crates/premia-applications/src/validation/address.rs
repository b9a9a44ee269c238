//! Structural checks for addresses.

use std::sync::LazyLock;

use regex::Regex;

use super::rules::{check_max_length, check_pattern};
use super::FieldContext;
use crate::error::Violation;
use crate::models::{AddressInput, AddressPatch};

/// Zip codes: 5 to 10 digits or hyphens (covers ZIP and ZIP+4 forms).
static ZIP_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9-]{5,10}$").expect("ZIP_CODE_REGEX is a valid regex pattern")
});

const ZIP_CODE_DESCRIPTION: &str = "5-10 digits or hyphens";

pub(crate) fn validate_address(
    out: &mut Vec<Violation>,
    path: &str,
    input: &AddressInput,
    ctx: &FieldContext<'_>,
) {
    let limits = ctx.limits;
    check_max_length(
        out,
        &format!("{path}.street"),
        &input.street,
        limits.street_max_length,
    );
    check_max_length(
        out,
        &format!("{path}.city"),
        &input.city,
        limits.city_max_length,
    );
    check_max_length(
        out,
        &format!("{path}.state"),
        &input.state,
        limits.state_max_length,
    );
    check_pattern(
        out,
        &format!("{path}.zip_code"),
        &input.zip_code,
        &ZIP_CODE_REGEX,
        ZIP_CODE_DESCRIPTION,
    );
}

pub(crate) fn validate_address_patch(
    out: &mut Vec<Violation>,
    path: &str,
    patch: &AddressPatch,
    ctx: &FieldContext<'_>,
) {
    let limits = ctx.limits;
    if let Some(street) = &patch.street {
        check_max_length(out, &format!("{path}.street"), street, limits.street_max_length);
    }
    if let Some(city) = &patch.city {
        check_max_length(out, &format!("{path}.city"), city, limits.city_max_length);
    }
    if let Some(state) = &patch.state {
        check_max_length(out, &format!("{path}.state"), state, limits.state_max_length);
    }
    if let Some(zip_code) = &patch.zip_code {
        check_pattern(
            out,
            &format!("{path}.zip_code"),
            zip_code,
            &ZIP_CODE_REGEX,
            ZIP_CODE_DESCRIPTION,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Limits;
    use chrono::NaiveDate;

    fn ctx(limits: &Limits) -> FieldContext<'_> {
        FieldContext {
            limits,
            dob_cutoff: NaiveDate::from_ymd_opt(2008, 1, 1).unwrap(),
            max_vehicle_year: 2027,
        }
    }

    fn valid_address() -> AddressInput {
        AddressInput {
            street: "12 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62704".to_string(),
        }
    }

    #[test]
    fn test_valid_address_passes() {
        let limits = Limits::default();
        let mut out = Vec::new();
        validate_address(&mut out, "address[0]", &valid_address(), &ctx(&limits));
        assert!(out.is_empty());
    }

    #[test]
    fn test_bad_zip_code_is_reported_with_path() {
        let limits = Limits::default();
        let mut address = valid_address();
        address.zip_code = "abc".to_string();
        let mut out = Vec::new();
        validate_address(&mut out, "address[0]", &address, &ctx(&limits));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path.as_deref(), Some("address[0].zip_code"));
        assert_eq!(out[0].code, "invalid_format");
    }

    #[test]
    fn test_zip_plus_four_passes() {
        let limits = Limits::default();
        let mut address = valid_address();
        address.zip_code = "62704-1234".to_string();
        let mut out = Vec::new();
        validate_address(&mut out, "address[0]", &address, &ctx(&limits));
        assert!(out.is_empty());
    }

    #[test]
    fn test_patch_checks_only_present_fields() {
        let limits = Limits::default();
        let patch = AddressPatch {
            city: Some("x".repeat(limits.city_max_length + 1)),
            ..AddressPatch::default()
        };
        let mut out = Vec::new();
        validate_address_patch(&mut out, "update.address[0].patch", &patch, &ctx(&limits));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path.as_deref(), Some("update.address[0].patch.city"));
    }

    #[test]
    fn test_empty_patch_passes() {
        let limits = Limits::default();
        let mut out = Vec::new();
        validate_address_patch(
            &mut out,
            "update.address[0].patch",
            &AddressPatch::default(),
            &ctx(&limits),
        );
        assert!(out.is_empty());
    }
}
