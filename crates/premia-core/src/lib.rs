//! premia Core Library
//!
//! Shared identifier types for premia services.
//!
//! # Modules
//!
//! - [`ids`] - Strongly typed identifiers (ApplicationId, AddressId,
//!   BeneficiaryId, VehicleId)
//!
//! # Example
//!
//! ```
//! use premia_core::{ApplicationId, BeneficiaryId};
//!
//! let application_id = ApplicationId::from_raw(1);
//! let beneficiary_id = BeneficiaryId::from_raw(1);
//! assert_eq!(application_id.as_i64(), beneficiary_id.as_i64());
//! ```

pub mod ids;

// Re-export main types for convenient access
pub use ids::{AddressId, ApplicationId, BeneficiaryId, ParseIdError, VehicleId};
