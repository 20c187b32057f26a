use crate::domain::{Student, StudentField};
use super::filter::matching_indices;

/// Local, read-only projection of the directory.
///
/// Holds the last fetched records together with the search field and query.
/// Every setter recomputes the visible subset, so `visible()` never lags
/// behind its inputs.
#[derive(Debug, Clone, Default)]
pub struct DirectoryView {
    students: Vec<Student>,
    field: StudentField,
    query: String,
    visible: Vec<usize>,
}

impl DirectoryView {
    pub fn new(students: Vec<Student>) -> Self {
        let mut view = Self {
            students,
            ..Self::default()
        };
        view.recompute();
        view
    }

    pub fn set_students(&mut self, students: Vec<Student>) {
        self.students = students;
        self.recompute();
    }

    pub fn set_field(&mut self, field: StudentField) {
        self.field = field;
        self.recompute();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.recompute();
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn field(&self) -> StudentField {
        self.field
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn visible(&self) -> impl Iterator<Item = &Student> + '_ {
        self.visible.iter().map(|&i| &self.students[i])
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Text to show in place of the table when nothing is visible.
    pub fn empty_message(&self) -> Option<String> {
        if !self.visible.is_empty() {
            return None;
        }
        if self.query.is_empty() {
            Some("The class directory is empty. Add a student to get started.".to_string())
        } else {
            Some(format!(
                "No students found matching \"{}\" in {}.",
                self.query, self.field
            ))
        }
    }

    fn recompute(&mut self) {
        self.visible = matching_indices(&self.students, self.field, &self.query);
    }
}
