use std::net::SocketAddr;
use std::future::Future;

use axum::{routing::get, Router};
use tracing::info;

use crate::clients::StudentClient;

mod handlers;
mod models;

pub use models::{ErrorResponse, HealthResponse};

use handlers::{create_student, delete_student, get_student, health, list_students, not_found};

#[derive(Clone)]
pub struct AppState {
    pub students: StudentClient,
    pub started_at: std::time::SystemTime,
}

pub fn router(students: StudentClient) -> Router {
    let state = AppState {
        students,
        started_at: std::time::SystemTime::now(),
    };

    Router::new()
        .route("/health", get(health))
        .route("/api/students", get(list_students).post(create_student))
        .route("/api/students/:id", get(get_student).delete(delete_student))
        .fallback(not_found)
        .with_state(state)
}

/// Serves the API on `addr` until `shutdown` resolves.
pub async fn serve(
    addr: SocketAddr,
    students: StudentClient,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let app = router(students);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "REST listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            info!("REST shutdown requested");
        })
        .await?;
    info!("REST server exited");
    Ok(())
}
