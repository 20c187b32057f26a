//! # Student Directory
//!
//! Registers students, lists and searches them, and deletes them.
//!
//! - **Domain types** - [`domain::Student`], [`domain::StudentCreate`], [`domain::StudentField`]
//! - **Actor framework** - a generic [`actor_framework::ResourceActor`] owning the records,
//!   reached through a cloneable [`actor_framework::ResourceClient`]
//! - **Record repository** - [`student_actor`] binds `Student` to the framework and
//!   validates candidates; [`clients::StudentClient`] is its typed handle
//! - **Directory client** - [`directory::DirectoryClient`] keeps a filtered
//!   [`directory::DirectoryView`] in sync with the repository
//! - **System** - [`app_system::DirectorySystem`] starts, seeds and stops the actor;
//!   [`rest`] exposes it over HTTP
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use student_directory::app_system::{DirectorySystem, Settings};
//! use student_directory::domain::{StudentCreate, StudentField};
//!
//! let system = DirectorySystem::start(&Settings::default()).await?;
//! let mut directory = system.directory();
//! directory.register(StudentCreate::new("Ann", "ann@example.com", "555")).await?;
//! directory.search(StudentField::Name, "an");
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod directory;
pub mod domain;
pub mod rest;
pub mod student_actor;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;
