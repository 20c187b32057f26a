use tracing::{debug, info, instrument, warn};
use crate::domain::{Student, StudentCreate};
use crate::student_actor::StudentError;
use crate::actor_framework::ResourceClient;

/// Client for interacting with the Student actor.
#[derive(Clone)]
pub struct StudentClient {
    inner: ResourceClient<Student>,
}

impl StudentClient {
    pub fn new(inner: ResourceClient<Student>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn list_students(&self) -> Result<Vec<Student>, StudentError> {
        debug!("Sending request");
        let students = self.inner.list().await?;
        debug!(student_count = students.len(), "Listed students");
        Ok(students)
    }

    #[instrument(fields(student_name = %student.name), skip(self, student))]
    pub async fn create_student(&self, student: StudentCreate) -> Result<Student, StudentError> {
        debug!("Sending request");
        match self.inner.create(student).await {
            Ok(created) => {
                info!(student_id = created.id, "Student created");
                Ok(created)
            }
            Err(e) => {
                warn!(error = %e, "Student creation failed");
                Err(e.into())
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn get_student(&self, id: u64) -> Result<Option<Student>, StudentError> {
        debug!("Sending request");
        Ok(self.inner.get(id).await?)
    }

    /// Deleting an id that does not exist succeeds.
    #[instrument(skip(self))]
    pub async fn delete_student(&self, id: u64) -> Result<(), StudentError> {
        debug!("Sending request");
        let removed = self.inner.delete(id).await?;
        debug!(removed, "Delete acknowledged");
        Ok(())
    }
}
