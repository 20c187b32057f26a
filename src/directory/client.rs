use tracing::{debug, error, info, instrument, warn};

use crate::clients::StudentClient;
use crate::domain::{Student, StudentCreate, StudentField};
use crate::student_actor::{validate_candidate, StudentError};
use super::view::DirectoryView;

/// Consumer side of the directory: keeps a local view in sync with the
/// repository and issues mutations through the request boundary.
#[derive(Clone)]
pub struct DirectoryClient {
    students: StudentClient,
    view: DirectoryView,
}

impl DirectoryClient {
    pub fn new(students: StudentClient) -> Self {
        Self {
            students,
            view: DirectoryView::default(),
        }
    }

    pub fn view(&self) -> &DirectoryView {
        &self.view
    }

    /// Changes what the view searches; no request is sent.
    pub fn search(&mut self, field: StudentField, query: impl Into<String>) {
        self.view.set_field(field);
        self.view.set_query(query);
    }

    /// Re-fetches the list. On failure the previous records stay in place.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<(), StudentError> {
        match self.students.list_students().await {
            Ok(students) => {
                debug!(student_count = students.len(), "Directory refreshed");
                self.view.set_students(students);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Unable to load students");
                Err(e)
            }
        }
    }

    /// Submits a new student, then refreshes.
    ///
    /// Invalid candidates are refused locally with the offending field and
    /// never reach the repository. Once the repository has stored the student
    /// this returns `Ok`; a failed refresh only leaves the previous view.
    #[instrument(fields(student_name = %candidate.name), skip(self, candidate))]
    pub async fn register(&mut self, candidate: StudentCreate) -> Result<Student, StudentError> {
        if let Err(e) = validate_candidate(&candidate) {
            warn!(field = %e.field, error = %e, "Submission blocked");
            return Err(e.into());
        }
        let created = self.students.create_student(candidate).await?;
        info!(student_id = created.id, "Student registered");
        if self.refresh().await.is_err() {
            warn!(student_id = created.id, "Registered student not yet shown");
        }
        Ok(created)
    }

    /// Deletes a student, then refreshes. A failed refresh does not undo
    /// the successful delete.
    #[instrument(skip(self))]
    pub async fn remove(&mut self, id: u64) -> Result<(), StudentError> {
        self.students.delete_student(id).await?;
        info!("Student removed");
        if self.refresh().await.is_err() {
            warn!("Removed student still shown");
        }
        Ok(())
    }
}
