use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs a global `tracing` subscriber filtered by `RUST_LOG`
/// (default `info`). Later calls are ignored.
pub fn init_logging() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    tracing::subscriber::set_global_default(subscriber).is_ok()
}
