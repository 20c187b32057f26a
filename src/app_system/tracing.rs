/// Installs the process-wide subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` (e.g. `info` or
/// `student_directory=debug`) is used.
///
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=student_directory::rest=debug,info cargo run
/// ```
pub fn setup_tracing(default_directive: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .try_init();
}
