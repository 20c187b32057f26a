use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::StudentField;

/// Why a field of a candidate student was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    Missing,
    NotAString,
    Empty,
    InvalidEmail,
}

impl ValidationReason {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationReason::Missing => "Required",
            ValidationReason::NotAString => "Expected string",
            ValidationReason::Empty => "Must not be empty",
            ValidationReason::InvalidEmail => "Invalid email",
        }
    }
}

/// A candidate student failed the schema check on one field.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("{field}: {}", .reason.message())]
pub struct ValidationError {
    pub field: StudentField,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(field: StudentField, reason: ValidationReason) -> Self {
        Self { field, reason }
    }
}

/// Errors that can occur during student operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StudentError {
    #[error("Student validation error: {0}")]
    ValidationError(#[from] ValidationError),
    #[error("Student not found: {0}")]
    NotFound(u64),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError<ValidationError>> for StudentError {
    fn from(err: FrameworkError<ValidationError>) -> Self {
        match err {
            FrameworkError::Rejected(e) => StudentError::ValidationError(e),
            other => StudentError::ActorCommunicationError(other.to_string()),
        }
    }
}
