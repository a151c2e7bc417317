use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const QUIET: &str = "employee_record=info";
const VERBOSE: &str = "employee_record=debug,info";

/// `RUST_LOG` wins over the built-in directive.
fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Human-readable logs on stderr; stdout carries only the rendered roster.
///
/// `verbose` enables the per-record construction events from `Employee::new`.
pub fn init_cli_logger(verbose: bool) {
    let filter = env_filter(if verbose { VERBOSE } else { QUIET });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// JSON lines on stderr at the quiet level.
pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(env_filter(QUIET))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .json(),
        )
        .init();
}
