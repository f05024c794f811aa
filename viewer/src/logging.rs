//! Tracing setup for the viewer process

/// Initialize the fmt subscriber with a per-crate filter.
///
/// Log lines go to stderr: stdout belongs to the headless JSONL stream and
/// the terminal renderer's alternate screen.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = format!("engine={log_level},viewer={log_level}");

    fmt()
        .with_env_filter(EnvFilter::new(&env_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
