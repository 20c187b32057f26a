use crate::actor_framework::Entity;
use crate::domain::{Student, StudentCreate};
use super::error::ValidationError;
use super::validation::validate_candidate;

impl Entity for Student {
    type Id = u64;
    type CreateParams = StudentCreate;
    type Rejection = ValidationError;

    fn id(&self) -> &u64 {
        &self.id
    }

    /// Runs the schema check; rejected candidates never receive an id.
    fn validate(params: &StudentCreate) -> Result<(), ValidationError> {
        validate_candidate(params)
    }

    /// Creates a new Student from validated registration params.
    ///
    /// # Arguments
    /// * `id` - Sequence number assigned by the actor
    /// * `params` - Name, email and phone of the student
    fn from_create_params(id: u64, params: StudentCreate) -> Self {
        Self {
            id,
            name: params.name,
            email: params.email,
            phone: params.phone,
        }
    }
}
