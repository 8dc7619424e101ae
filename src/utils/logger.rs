use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match (verbose, level) {
        (true, _) => EnvFilter::new("boxing_ring=debug,info"),
        (false, Some(level)) => EnvFilter::new(format!("boxing_ring={}", level)),
        (false, None) => EnvFilter::new("boxing_ring=info"),
    })
}

/// Compact human-readable output. `RUST_LOG` wins over `verbose` and `level`.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    tracing_subscriber::registry()
        .with(default_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool, level: Option<&str>) {
    tracing_subscriber::registry()
        .with(default_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}
