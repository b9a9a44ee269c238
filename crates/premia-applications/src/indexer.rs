//! Canonical field-based indexing for sub-entity equality and lookup.
//!
//! A canonical key is a deterministic string built from an ordered subset of
//! an entity's fields. Two entities (ignoring id) are considered equal iff
//! their keys are equal; the diff engine uses this to decide whether a
//! submitted item actually changed, and tests use key-keyed maps for O(1)
//! membership checks.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{AddressInput, BeneficiaryInput, VehicleInput};

/// Separator between field segments of a canonical key.
pub const KEY_SEPARATOR: &str = "__";

/// Selects one field of an entity for inclusion in its canonical key, with
/// optional case-normalization and an optional post-transform.
pub struct FieldSelector<T> {
    extract: fn(&T) -> String,
    lowercase: bool,
    transform: Option<fn(String) -> String>,
}

impl<T> FieldSelector<T> {
    /// Include the field value verbatim.
    #[must_use]
    pub fn plain(extract: fn(&T) -> String) -> Self {
        Self {
            extract,
            lowercase: false,
            transform: None,
        }
    }

    /// Include the field value lowercased.
    #[must_use]
    pub fn lowercased(extract: fn(&T) -> String) -> Self {
        Self {
            extract,
            lowercase: true,
            transform: None,
        }
    }

    /// Include the field value after applying `transform`.
    #[must_use]
    pub fn transformed(extract: fn(&T) -> String, transform: fn(String) -> String) -> Self {
        Self {
            extract,
            lowercase: false,
            transform: Some(transform),
        }
    }

    fn apply(&self, item: &T) -> String {
        let mut value = (self.extract)(item);
        if self.lowercase {
            value = value.to_lowercase();
        }
        if let Some(transform) = self.transform {
            value = transform(value);
        }
        value
    }
}

/// Builds deterministic canonical keys from an ordered list of field
/// selectors joined by a separator.
///
/// # Known limitation
///
/// A field value that itself contains the separator can make two
/// structurally distinct entities collide to the same key (`"a__b" + "c"`
/// vs `"a" + "b__c"`). The bounded field sets used for addresses, vehicles
/// and beneficiaries make this acceptable; callers must not rely on keys
/// being injective for arbitrary input.
pub struct CanonicalIndexer<T> {
    fields: Vec<FieldSelector<T>>,
    separator: &'static str,
}

impl<T> CanonicalIndexer<T> {
    /// Create an indexer over `fields`, joined by `separator`.
    #[must_use]
    pub fn new(fields: Vec<FieldSelector<T>>, separator: &'static str) -> Self {
        Self { fields, separator }
    }

    /// The canonical key of `item`.
    #[must_use]
    pub fn key(&self, item: &T) -> String {
        self.fields
            .iter()
            .map(|field| field.apply(item))
            .collect::<Vec<_>>()
            .join(self.separator)
    }

    /// Whether two entities are equal under this indexer (ignoring ids).
    #[must_use]
    pub fn eq(&self, a: &T, b: &T) -> bool {
        self.key(a) == self.key(b)
    }

    /// Build a key-keyed lookup map. On key collisions the later item wins.
    pub fn index<'a, I>(&self, items: I) -> HashMap<String, &'a T>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        items
            .into_iter()
            .map(|item| (self.key(item), item))
            .collect()
    }
}

/// Address identity: street, state, city (case-insensitive) plus zip code.
pub static ADDRESS_INDEXER: LazyLock<CanonicalIndexer<AddressInput>> = LazyLock::new(|| {
    CanonicalIndexer::new(
        vec![
            FieldSelector::lowercased(|a: &AddressInput| a.street.clone()),
            FieldSelector::lowercased(|a: &AddressInput| a.state.clone()),
            FieldSelector::lowercased(|a: &AddressInput| a.city.clone()),
            FieldSelector::plain(|a: &AddressInput| a.zip_code.clone()),
        ],
        KEY_SEPARATOR,
    )
});

/// Beneficiary identity: names and relationship (case-insensitive), date of
/// birth as an ISO-8601 instant, and the primary flag.
pub static BENEFICIARY_INDEXER: LazyLock<CanonicalIndexer<BeneficiaryInput>> =
    LazyLock::new(|| {
        CanonicalIndexer::new(
            vec![
                FieldSelector::lowercased(|b: &BeneficiaryInput| b.first_name.clone()),
                FieldSelector::lowercased(|b: &BeneficiaryInput| b.last_name.clone()),
                FieldSelector::lowercased(|b: &BeneficiaryInput| {
                    b.relationship.map(|r| r.as_str().to_string()).unwrap_or_default()
                }),
                FieldSelector::transformed(
                    |b: &BeneficiaryInput| b.date_of_birth.to_string(),
                    |date| format!("{date}T00:00:00.000Z"),
                ),
                FieldSelector::plain(|b: &BeneficiaryInput| {
                    b.is_primary_account_holder.to_string()
                }),
            ],
            KEY_SEPARATOR,
        )
    });

/// Vehicle identity: make and model (case-insensitive) plus VIN and year.
pub static VEHICLE_INDEXER: LazyLock<CanonicalIndexer<VehicleInput>> = LazyLock::new(|| {
    CanonicalIndexer::new(
        vec![
            FieldSelector::lowercased(|v: &VehicleInput| v.make.clone()),
            FieldSelector::lowercased(|v: &VehicleInput| v.model.clone()),
            FieldSelector::plain(|v: &VehicleInput| v.vin.clone()),
            FieldSelector::plain(|v: &VehicleInput| v.year.to_string()),
        ],
        KEY_SEPARATOR,
    )
});
