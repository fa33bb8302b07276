use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the global tracing subscriber. `PUMMEL_LOG` or `RUST_LOG` take
/// precedence; otherwise a positive verbosity lowers the filter to `debug`.
pub fn init_logging(verbose: bool) {
    let filter = std::env::var("PUMMEL_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| {
                if verbose {
                    EnvFilter::new("debug")
                } else {
                    EnvFilter::new("info")
                }
            },
            |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
        );

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}
