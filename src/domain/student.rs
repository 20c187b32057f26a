use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Represents a registered student in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Payload for registering a new student. The id is assigned by the actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl StudentCreate {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

/// One of the three text fields of a student.
///
/// Tags validation failures and selects the column the directory searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentField {
    #[default]
    Name,
    Email,
    Phone,
}

impl StudentField {
    pub const ALL: [StudentField; 3] = [StudentField::Name, StudentField::Email, StudentField::Phone];

    pub fn as_str(&self) -> &'static str {
        match self {
            StudentField::Name => "name",
            StudentField::Email => "email",
            StudentField::Phone => "phone",
        }
    }
}

impl fmt::Display for StudentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudentField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StudentField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown student field: {}", s))
    }
}

impl Student {
    /// Returns the value of the given field.
    pub fn field(&self, field: StudentField) -> &str {
        match field {
            StudentField::Name => &self.name,
            StudentField::Email => &self.email,
            StudentField::Phone => &self.phone,
        }
    }
}

impl StudentCreate {
    pub fn field(&self, field: StudentField) -> &str {
        match field {
            StudentField::Name => &self.name,
            StudentField::Email => &self.email,
            StudentField::Phone => &self.phone,
        }
    }
}
