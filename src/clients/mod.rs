//! Typed handles over the actor channels.

pub mod student_client;

pub use student_client::StudentClient;
