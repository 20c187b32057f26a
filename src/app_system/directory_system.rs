use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, instrument};

use super::config::Settings;
use crate::actor_framework::ResourceActor;
use crate::clients::StudentClient;
use crate::directory::DirectoryClient;
use crate::domain::{Student, StudentCreate};
use crate::student_actor::StudentError;

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Seeding failed: {0}")]
    Seed(#[from] StudentError),
    #[error("Actor task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Illustrative fixture data loaded into a fresh directory.
pub fn sample_students() -> Vec<StudentCreate> {
    vec![
        StudentCreate::new("Deepanshu", "deepanshu@example.com", "1234567890"),
        StudentCreate::new("Deemak", "deemak@example.com", "0987654321"),
        StudentCreate::new("John Doe", "john@example.com", "5555555555"),
    ]
}

/// Ids start at 1 and advance by one per call. The increment is atomic, so
/// the closure can be shared without handing out duplicates.
pub fn sequential_ids() -> impl Fn() -> u64 + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || counter.fetch_add(1, Ordering::SeqCst)
}

/// Owns the student actor task and hands out clients to it.
///
/// Responsible for starting the actor, seeding it, and handling shutdown.
pub struct DirectorySystem {
    pub student_client: StudentClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl DirectorySystem {
    #[instrument(name = "directory_system", skip(settings), fields(seed = settings.seed))]
    pub async fn start(settings: &Settings) -> Result<Self, SystemError> {
        info!("Starting directory system");

        let (student_actor, student_resource_client) =
            ResourceActor::<Student>::new(settings.buffer_size, sequential_ids());
        let student_client = StudentClient::new(student_resource_client);
        let student_handle = tokio::spawn(student_actor.run());

        let system = Self {
            student_client,
            handles: vec![student_handle],
        };

        if settings.seed {
            for candidate in sample_students() {
                system.student_client.create_student(candidate).await?;
            }
            info!(count = sample_students().len(), "Seeded sample students");
        }

        info!("Directory system started");
        Ok(system)
    }

    pub fn directory(&self) -> DirectoryClient {
        DirectoryClient::new(self.student_client.clone())
    }

    /// Drops this system's client and waits for the actor to drain.
    ///
    /// The actor stops once every client clone is gone, so callers must drop
    /// the ones they handed out (e.g. the REST state) first.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down directory system");
        drop(self.student_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("Directory system shutdown complete");
        Ok(())
    }
}
