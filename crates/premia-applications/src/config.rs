//! Engine configuration.
//!
//! Every tunable bound the engine enforces lives in one immutable
//! [`EngineConfig`] value injected at construction. Format patterns (VIN,
//! zip code) are not configuration: they define what the fields *are* and
//! are compiled statics in the validation modules.

use serde::{Deserialize, Serialize};

/// An inclusive `[min, max]` bound on a sub-collection's item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    /// Minimum number of items, inclusive.
    pub min: usize,
    /// Maximum number of items, inclusive.
    pub max: usize,
}

impl CountRange {
    /// Create a new inclusive count range.
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Whether `count` falls inside the range.
    #[must_use]
    pub fn contains(&self, count: usize) -> bool {
        count >= self.min && count <= self.max
    }
}

/// Inclusive range a generated premium quote is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRange {
    /// Smallest quote amount, inclusive.
    pub min: u32,
    /// Largest quote amount, inclusive.
    pub max: u32,
}

impl Default for QuoteRange {
    fn default() -> Self {
        Self { min: 20, max: 100 }
    }
}

/// Field and collection bounds enforced by validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Maximum street length in characters.
    #[serde(default = "default_street_max_length")]
    pub street_max_length: usize,
    /// Maximum city length in characters.
    #[serde(default = "default_city_max_length")]
    pub city_max_length: usize,
    /// Maximum state length in characters.
    #[serde(default = "default_state_max_length")]
    pub state_max_length: usize,
    /// Maximum vehicle make length in characters.
    #[serde(default = "default_make_max_length")]
    pub make_max_length: usize,
    /// Maximum vehicle model length in characters.
    #[serde(default = "default_model_max_length")]
    pub model_max_length: usize,
    /// Maximum beneficiary first name length in characters.
    #[serde(default = "default_first_name_max_length")]
    pub first_name_max_length: usize,
    /// Maximum beneficiary last name length in characters.
    #[serde(default = "default_last_name_max_length")]
    pub last_name_max_length: usize,
    /// Minimum beneficiary age in whole years, measured against the start
    /// of the engine's reference year.
    #[serde(default = "default_min_age")]
    pub min_age: u32,
    /// Oldest acceptable vehicle model year. The newest acceptable year is
    /// derived from the engine's reference date (reference year + 1).
    #[serde(default = "default_min_vehicle_year")]
    pub min_vehicle_year: i32,
    /// Allowed beneficiary count per application.
    #[serde(default = "default_beneficiary_count")]
    pub beneficiaries: CountRange,
    /// Allowed address count per application. Effectively fixed: min == max.
    #[serde(default = "default_address_count")]
    pub address: CountRange,
    /// Allowed vehicle count per application.
    #[serde(default = "default_vehicle_count")]
    pub vehicles: CountRange,
}

fn default_street_max_length() -> usize {
    100
}

fn default_city_max_length() -> usize {
    50
}

fn default_state_max_length() -> usize {
    50
}

fn default_make_max_length() -> usize {
    100
}

fn default_model_max_length() -> usize {
    100
}

fn default_first_name_max_length() -> usize {
    100
}

fn default_last_name_max_length() -> usize {
    100
}

fn default_min_age() -> u32 {
    18
}

fn default_min_vehicle_year() -> i32 {
    1980
}

fn default_beneficiary_count() -> CountRange {
    CountRange::new(1, 5)
}

fn default_address_count() -> CountRange {
    CountRange::new(1, 1)
}

fn default_vehicle_count() -> CountRange {
    CountRange::new(1, 3)
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            street_max_length: default_street_max_length(),
            city_max_length: default_city_max_length(),
            state_max_length: default_state_max_length(),
            make_max_length: default_make_max_length(),
            model_max_length: default_model_max_length(),
            first_name_max_length: default_first_name_max_length(),
            last_name_max_length: default_last_name_max_length(),
            min_age: default_min_age(),
            min_vehicle_year: default_min_vehicle_year(),
            beneficiaries: default_beneficiary_count(),
            address: default_address_count(),
            vehicles: default_vehicle_count(),
        }
    }
}

/// Configuration for the application engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Validation bounds.
    #[serde(default)]
    pub limits: Limits,
    /// Quote generation range.
    #[serde(default)]
    pub quote: QuoteRange,
}
