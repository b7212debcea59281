// Tracing setup. The terminal belongs to the viewer, so logs go to a file.

use std::path::Path;

use anyhow::Context;

pub const LOG_FILE: &str = "hitprop.log";
pub const DEFAULT_FILTER: &str = "hitprop=info,hitprop_tui=info,hitprop_core=info,warn";

/// Initialize tracing to log to `<log_dir>/hitprop.log`. `RUST_LOG`
/// overrides the default filter.
pub fn init_tracing(log_dir: &Path) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let log_file = std::fs::File::create(log_dir.join(LOG_FILE))
        .with_context(|| format!("failed to create {}", log_dir.join(LOG_FILE).display()))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
