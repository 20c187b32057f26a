//! System orchestration, configuration, startup, and shutdown logic.

pub mod config;
pub mod directory_system;
pub mod tracing;

pub use config::{Cli, Settings};
pub use directory_system::*;
pub use self::tracing::setup_tracing;
