//! premia Applications Engine
//!
//! Validation and reconciliation engine for insurance application
//! aggregates. An application owns three sub-collections — beneficiaries,
//! addresses and vehicles — and this crate is the single place that decides
//! whether a mutation of that aggregate is acceptable:
//!
//! - the **diff engine** turns a client-submitted full-state replacement
//!   into a minimal add/update/remove [`models::UpdateDescriptor`] against a
//!   stored baseline;
//! - **structural validation** checks every field of a payload and collects
//!   all violations with dotted field paths;
//! - **business invariants** enforce the cross-entity rules: exactly one
//!   primary beneficiary, count thresholds, the non-removable primary, and
//!   the non-empty vehicle list.
//!
//! The engine performs no I/O and stores nothing; fetching baselines and
//! atomically applying validated descriptors belongs to the storage
//! collaborator.
//!
//! # Example
//!
//! ```
//! use premia_applications::config::EngineConfig;
//! use premia_applications::models::{
//!     ApplicationInput, AddressInput, BeneficiaryInput, VehicleInput,
//! };
//! use premia_applications::ApplicationEngine;
//!
//! let engine = ApplicationEngine::new(EngineConfig::default());
//! let input = ApplicationInput {
//!     beneficiaries: vec![BeneficiaryInput {
//!         first_name: "Ada".to_string(),
//!         last_name: "Lovelace".to_string(),
//!         date_of_birth: chrono::NaiveDate::from_ymd_opt(1985, 6, 1).unwrap(),
//!         is_primary_account_holder: true,
//!         relationship: None,
//!     }],
//!     address: vec![AddressInput {
//!         street: "12 Main St".to_string(),
//!         city: "Springfield".to_string(),
//!         state: "IL".to_string(),
//!         zip_code: "62704".to_string(),
//!     }],
//!     vehicles: vec![VehicleInput {
//!         vin: "1HGCM82633A004352".to_string(),
//!         year: 2018,
//!         make: "Honda".to_string(),
//!         model: "Accord".to_string(),
//!     }],
//! };
//!
//! let validated = engine.validate_create(input).expect("payload is valid");
//! let quote = engine.quote(&validated);
//! assert!(quote >= engine.config().quote.min);
//! ```

pub mod config;
pub mod diff;
pub mod engine;
pub mod error;
pub mod indexer;
mod invariants;
pub mod models;
mod quote;
mod report;
mod validation;

pub use engine::ApplicationEngine;
pub use error::{IntegrityError, SubCollection, UpdateError, Violation};
