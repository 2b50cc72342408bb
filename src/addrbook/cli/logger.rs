use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a tracing filter, e.g. `ADDRBOOK_LOG=addrbook=trace`.
pub const LOG_ENV: &str = "ADDRBOOK_LOG";

pub fn init_logger(verbose: bool) {
    let default = if verbose {
        "addrbook=debug"
    } else {
        "addrbook=warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    // Logs go to stderr so stdout stays clean for contact output.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
