//! TINY scanner/parser CLI entry point

fn main() {
    // Structured logging with an env-based filter; default to warn so command output stays clean
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    tiny::cli::run();
}
