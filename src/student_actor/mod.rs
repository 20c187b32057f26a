//! Student-specific domain logic: the entity binding and its schema checks.

pub mod entity;
pub mod error;
pub mod validation;

pub use error::*;
pub use validation::{parse_candidate, validate_candidate};
