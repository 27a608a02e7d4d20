// src/lib.rs

pub mod analytics;
pub mod chart;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod series;
pub mod shell;

use crate::config::AppConfig;
use crate::shell::Shell;

use tokio::io::{self, BufReader};
use tracing::info;

/// Runs one interactive session on stdin/stdout/stderr.
pub async fn run_session(cfg: AppConfig) -> io::Result<()> {
    info!("🚀 Starting electricity price session ({}).", cfg.price_unit());

    let mut shell = Shell::new(BufReader::new(io::stdin()), io::stdout(), io::stderr(), cfg);
    shell.run().await
}
