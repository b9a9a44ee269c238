//! Strongly Typed Identifiers
//!
//! This module provides type-safe identifier types for premia. Using the
//! newtype pattern, these types prevent accidental misuse of different ID
//! types at compile time.
//!
//! Identifiers are opaque integers assigned by the storage layer when an
//! entity is first persisted; there is no constructor that mints a fresh id.
//!
//! # Example
//!
//! ```
//! use premia_core::{ApplicationId, VehicleId};
//!
//! let application = ApplicationId::from_raw(7);
//! let vehicle = VehicleId::from_raw(7);
//!
//! // Type safety: cannot pass a VehicleId where an ApplicationId is expected
//! fn requires_application(id: ApplicationId) -> String {
//!     id.to_string()
//! }
//!
//! let result = requires_application(application);
//! // requires_application(vehicle); // This would not compile!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Error type for ID parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    /// The type of ID that failed to parse
    pub id_type: &'static str,
    /// The underlying integer parse error message
    pub message: String,
}

impl Display for ParseIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to parse {}: {}", self.id_type, self.message)
    }
}

impl std::error::Error for ParseIdError {}

/// Macro to define a strongly-typed ID type
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw storage-assigned identifier.
            #[must_use]
            pub const fn from_raw(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the raw integer value.
            #[must_use]
            pub const fn as_i64(self) -> i64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                s.parse::<i64>()
                    .map(Self)
                    .map_err(|e| ParseIdError {
                        id_type: stringify!($name),
                        message: e.to_string(),
                    })
            }
        }
    };
}

define_id!(
    /// Strongly typed identifier for insurance applications.
    ///
    /// Identifies the aggregate root record. Provides compile-time type
    /// safety to prevent confusion with sub-entity ID types.
    ///
    /// # Example
    ///
    /// ```
    /// use premia_core::ApplicationId;
    ///
    /// let application_id = ApplicationId::from_raw(42);
    /// assert_eq!(application_id.as_i64(), 42);
    ///
    /// // Parse from string
    /// let application_id: ApplicationId = "42".parse().unwrap();
    /// ```
    ApplicationId
);

define_id!(
    /// Strongly typed identifier for addresses owned by an application.
    AddressId
);

define_id!(
    /// Strongly typed identifier for beneficiaries owned by an application.
    ///
    /// # Example
    ///
    /// ```
    /// use premia_core::BeneficiaryId;
    ///
    /// let beneficiary_id = BeneficiaryId::from_raw(3);
    /// println!("Beneficiary: {}", beneficiary_id);
    /// ```
    BeneficiaryId
);

define_id!(
    /// Strongly typed identifier for vehicles owned by an application.
    VehicleId
);
