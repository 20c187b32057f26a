use tracing::{error, info, Instrument};

use student_directory::app_system::{setup_tracing, DirectorySystem, Settings};
use student_directory::rest;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load();
    setup_tracing(&settings.log_level);

    info!(bind = %settings.bind, seed = settings.seed, "Starting student directory");

    let system = DirectorySystem::start(&settings).await?;

    let mut directory = system.directory();
    if let Err(e) = directory.refresh().await {
        error!(error = %e, "Initial directory load failed");
    }
    info!(student_count = directory.view().visible_count(), "Directory ready");
    drop(directory);

    let span = tracing::info_span!("rest");
    let served = rest::serve(settings.bind, system.student_client.clone(), async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
        }
    })
    .instrument(span)
    .await;

    if let Err(e) = &served {
        error!(error = %e, "REST server failed");
    }

    system.shutdown().await?;

    info!("Student directory stopped");
    served
}
