//! Schema checks for candidate students.
//!
//! [`parse_candidate`] is the structural check applied to untyped input (HTTP
//! bodies); [`validate_candidate`] is the content check every typed candidate
//! passes before it is stored. Fields are checked in the order name, email,
//! phone and the first failure wins.

use serde_json::{Map, Value};

use super::error::{ValidationError, ValidationReason};
use crate::domain::{StudentCreate, StudentField};

pub fn validate_candidate(candidate: &StudentCreate) -> Result<(), ValidationError> {
    for field in StudentField::ALL {
        validate_field(field, candidate.field(field))?;
    }
    Ok(())
}

/// Builds a candidate from a JSON object. Unknown keys, `id` included, are ignored.
pub fn parse_candidate(value: &Value) -> Result<StudentCreate, ValidationError> {
    let empty = Map::new();
    let object = value.as_object().unwrap_or(&empty);

    let name = string_field(object, StudentField::Name)?;
    let email = string_field(object, StudentField::Email)?;
    let phone = string_field(object, StudentField::Phone)?;

    let candidate = StudentCreate { name, email, phone };
    validate_candidate(&candidate)?;
    Ok(candidate)
}

fn string_field(object: &Map<String, Value>, field: StudentField) -> Result<String, ValidationError> {
    match object.get(field.as_str()) {
        None | Some(Value::Null) => Err(ValidationError::new(field, ValidationReason::Missing)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::new(field, ValidationReason::NotAString)),
    }
}

fn validate_field(field: StudentField, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, ValidationReason::Empty));
    }
    if field == StudentField::Email && !is_email(value) {
        return Err(ValidationError::new(field, ValidationReason::InvalidEmail));
    }
    Ok(())
}

/// `local@domain.tld` with no whitespace and a single `@`.
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot < domain.len() - 1 && !domain.starts_with('.'),
        None => false,
    }
}
