//! Dependency task job entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use dependency_tasks::{LaunchConfig, SyncError, install_crypto_provider, summary_line};
use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();
    install_crypto_provider();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), SyncError> {
    let config = load_config()?;
    let task_count = dependency_tasks::run(&config).await?;
    write_summary(task_count)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`SyncError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<LaunchConfig, SyncError> {
    LaunchConfig::load().map_err(|error| SyncError::Configuration {
        message: error.to_string(),
    })
}

fn write_summary(task_count: usize) -> Result<(), SyncError> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", summary_line(task_count)).map_err(|error| SyncError::Io {
        message: error.to_string(),
    })
}
