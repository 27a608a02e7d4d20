use tracing::error;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

use electricity_prices::config::AppConfig;
use electricity_prices::run_session;

/// Stamps log lines with local wall-clock time, the same clock the hourly
/// price slots are read against.
struct LocalClock;

impl FormatTime for LocalClock {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

#[tokio::main]
async fn main() {
    // Logs go to stderr and default to "warn" so they stay out of the menu.
    // Override with RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_timer(LocalClock)
        .init();

    // Fail fast on a broken config; a missing one just means defaults.
    let cfg = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("❌ Critical Error: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_session(cfg).await {
        error!("⚠️ Session aborted: {}", e);
        std::process::exit(1);
    }
}
