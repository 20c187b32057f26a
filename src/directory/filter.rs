use crate::domain::{Student, StudentField};

/// Keeps the students whose selected field contains `query`, ignoring case.
/// An empty query keeps everything.
pub fn filter_students<'a>(
    students: &'a [Student],
    field: StudentField,
    query: &str,
) -> Vec<&'a Student> {
    matching_indices(students, field, query)
        .into_iter()
        .map(|i| &students[i])
        .collect()
}

/// Positions in `students` of the records [`filter_students`] would keep.
pub fn matching_indices(students: &[Student], field: StudentField, query: &str) -> Vec<usize> {
    let query = query.to_lowercase();
    students
        .iter()
        .enumerate()
        .filter(|(_, student)| query.is_empty() || student.field(field).to_lowercase().contains(&query))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: u64, name: &str, email: &str, phone: &str) -> Student {
        Student {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    fn roster() -> Vec<Student> {
        vec![
            student(1, "Ann", "ann@school.org", "555-0101"),
            student(2, "Bob", "BOB@Example.com", "555-0202"),
        ]
    }

    #[test]
    fn test_name_filter_is_case_insensitive() {
        let students = roster();
        let found = filter_students(&students, StudentField::Name, "an");
        assert_eq!(found, vec![&students[0]]);
    }

    #[test]
    fn test_empty_query_matches_all() {
        let students = roster();
        assert_eq!(filter_students(&students, StudentField::Email, "").len(), 2);
    }

    #[test]
    fn test_filter_uses_selected_field() {
        let students = roster();
        assert_eq!(filter_students(&students, StudentField::Email, "example"), vec![&students[1]]);
        assert_eq!(filter_students(&students, StudentField::Phone, "0101"), vec![&students[0]]);
        assert!(filter_students(&students, StudentField::Name, "example").is_empty());
    }
}
