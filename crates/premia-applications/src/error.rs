//! Error types for the application engine.
//!
//! Two kinds of failure flow out of the engine and they are deliberately
//! kept apart. [`Violation`] batches are the *expected* outcome of invalid
//! user input: every check runs, every violation is collected, and the whole
//! batch is returned for the caller to render. [`IntegrityError`] signals a
//! caller bug (a descriptor referencing data that is not part of the
//! baseline) and aborts the operation immediately.

use serde::Serialize;
use std::fmt::{Display, Formatter};
use thiserror::Error;

use premia_core::ApplicationId;

/// One of the three owned sub-collections of an application aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubCollection {
    Beneficiaries,
    Address,
    Vehicles,
}

impl SubCollection {
    /// The collection name as it appears in payloads and field paths.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beneficiaries => "beneficiaries",
            Self::Address => "address",
            Self::Vehicles => "vehicles",
        }
    }
}

impl Display for SubCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation violation.
///
/// Structural (per-field) violations carry the dotted path of the offending
/// field, e.g. `beneficiaries[1].date_of_birth`, so clients can highlight
/// the field. Business-invariant violations apply to the aggregate as a
/// whole and carry no path.
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    /// Dotted field path into the payload, absent for aggregate-level errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Error code for programmatic handling.
    pub code: &'static str,
    /// Human-readable error message.
    pub message: String,
    /// Optional constraint details (e.g. `max_length`, attempted count).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<serde_json::Value>,
}

impl Violation {
    /// Create a violation tagged with a field path.
    pub fn field(
        path: impl Into<String>,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: Some(path.into()),
            code,
            message: message.into(),
            constraints: None,
        }
    }

    /// Create a field violation with constraint details.
    pub fn field_with_constraints(
        path: impl Into<String>,
        code: &'static str,
        message: impl Into<String>,
        constraints: serde_json::Value,
    ) -> Self {
        Self {
            path: Some(path.into()),
            code,
            message: message.into(),
            constraints: Some(constraints),
        }
    }

    /// Create an aggregate-level violation without a field path.
    pub fn general(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            path: None,
            code,
            message: message.into(),
            constraints: None,
        }
    }

    /// Create an aggregate-level violation with constraint details.
    pub fn general_with_constraints(
        code: &'static str,
        message: impl Into<String>,
        constraints: serde_json::Value,
    ) -> Self {
        Self {
            path: None,
            code,
            message: message.into(),
            constraints: Some(constraints),
        }
    }
}

/// The caller supplied internally inconsistent data.
///
/// Unlike a [`Violation`] batch this is not a user-correctable input error:
/// it means the descriptor or submission disagrees with the baseline the
/// caller itself fetched, so the operation fails fast instead of collecting
/// further results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    /// A submitted or referenced sub-entity id does not exist in the baseline.
    #[error("unknown {collection} id {id}: not part of the baseline application")]
    UnknownEntity {
        /// Which sub-collection the id was looked up in.
        collection: SubCollection,
        /// The raw id that failed the lookup.
        id: i64,
    },

    /// The descriptor targets a different application than the baseline.
    #[error("application mismatch: descriptor targets {actual}, baseline is {expected}")]
    ApplicationMismatch {
        /// The baseline aggregate's id.
        expected: ApplicationId,
        /// The id named by the descriptor.
        actual: ApplicationId,
    },
}

/// Failure modes of validating an update against a baseline.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// The update violates structural rules or business invariants. The
    /// batch contains every violation found; nothing was mutated.
    #[error("update rejected with {} violation(s)", .0.len())]
    Rejected(Vec<Violation>),

    /// The descriptor references data outside the baseline (caller bug).
    #[error(transparent)]
    Integrity(#[from] IntegrityError),
}
