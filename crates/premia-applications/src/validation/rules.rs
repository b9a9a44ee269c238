//! Canonical per-field rules.
//!
//! Each helper checks one constraint and pushes at most one violation. The
//! create-shape and patch-shape validators share these helpers, so a rule is
//! defined once regardless of how many payload shapes it appears in.

use chrono::NaiveDate;
use regex::Regex;
use serde_json::json;

use crate::config::CountRange;
use crate::error::Violation;

pub(crate) fn check_max_length(out: &mut Vec<Violation>, path: &str, value: &str, max: usize) {
    let actual = value.chars().count();
    if actual > max {
        out.push(Violation::field_with_constraints(
            path,
            "too_long",
            format!("must be at most {max} characters"),
            json!({ "max_length": max, "actual": actual }),
        ));
    }
}

pub(crate) fn check_pattern(
    out: &mut Vec<Violation>,
    path: &str,
    value: &str,
    pattern: &Regex,
    description: &str,
) {
    if !pattern.is_match(value) {
        out.push(Violation::field(
            path,
            "invalid_format",
            format!("must be {description}"),
        ));
    }
}

pub(crate) fn check_int_range(out: &mut Vec<Violation>, path: &str, value: i32, min: i32, max: i32) {
    if value < min || value > max {
        out.push(Violation::field_with_constraints(
            path,
            "out_of_range",
            format!("must be an integer between {min} and {max}"),
            json!({ "min": min, "max": max, "actual": value }),
        ));
    }
}

/// Date-of-birth bound: the subject must have reached `min_age` by the start
/// of the reference year, i.e. be born on or before `cutoff`.
pub(crate) fn check_min_age(
    out: &mut Vec<Violation>,
    path: &str,
    date_of_birth: NaiveDate,
    cutoff: NaiveDate,
    min_age: u32,
) {
    if date_of_birth > cutoff {
        out.push(Violation::field_with_constraints(
            path,
            "below_min_age",
            format!("must correspond to an age of at least {min_age} years"),
            json!({ "min_age": min_age, "latest_date_of_birth": cutoff.to_string() }),
        ));
    }
}

pub(crate) fn check_count_range(
    out: &mut Vec<Violation>,
    path: &str,
    actual: usize,
    range: CountRange,
) {
    if !range.contains(actual) {
        out.push(Violation::field_with_constraints(
            path,
            "count_out_of_range",
            format!("must contain between {} and {} items", range.min, range.max),
            json!({ "min": range.min, "max": range.max, "actual": actual }),
        ));
    }
}

pub(crate) fn check_max_count(out: &mut Vec<Violation>, path: &str, actual: usize, max: usize) {
    if actual > max {
        out.push(Violation::field_with_constraints(
            path,
            "too_many_items",
            format!("must contain at most {max} items"),
            json!({ "max": max, "actual": actual }),
        ));
    }
}
