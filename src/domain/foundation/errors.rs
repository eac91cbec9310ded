//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Not found errors
    OwnerNotFound,
    PetNotFound,
    VisitNotFound,
    PetTypeNotFound,
    VetNotFound,
    ConditionNotFound,
    MedicationNotFound,

    // Conflict errors
    DuplicatePetName,
    OwnerIdMismatch,
    StaleVersion,

    // Infrastructure errors
    DatabaseError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::OwnerNotFound => "OWNER_NOT_FOUND",
            ErrorCode::PetNotFound => "PET_NOT_FOUND",
            ErrorCode::VisitNotFound => "VISIT_NOT_FOUND",
            ErrorCode::PetTypeNotFound => "PET_TYPE_NOT_FOUND",
            ErrorCode::VetNotFound => "VET_NOT_FOUND",
            ErrorCode::ConditionNotFound => "CONDITION_NOT_FOUND",
            ErrorCode::MedicationNotFound => "MEDICATION_NOT_FOUND",
            ErrorCode::DuplicatePetName => "DUPLICATE_PET_NAME",
            ErrorCode::OwnerIdMismatch => "OWNER_ID_MISMATCH",
            ErrorCode::StaleVersion => "STALE_VERSION",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
            details: HashMap::new(),
        }
        .with_detail("field", field.into())
    }

    /// Creates a not-found error with the id recorded as a detail.
    pub fn not_found(code: ErrorCode, entity: &str, id: impl fmt::Display) -> Self {
        Self::new(code, format!("{} not found with id: {}", entity, id)).with_detail("id", id.to_string())
    }

    /// Creates a stale-version conflict for shared reference data.
    pub fn stale_version(entity: &str, expected: u32, actual: u32) -> Self {
        Self::new(
            ErrorCode::StaleVersion,
            format!(
                "{} was updated concurrently: version {} is stale (current is {})",
                entity, actual, expected
            ),
        )
        .with_detail("expected", expected.to_string())
        .with_detail("actual", actual.to_string())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
