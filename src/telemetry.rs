use std::io::IsTerminal;
use std::sync::OnceLock;

use thiserror::Error;
use tracing_subscriber::{
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
    Registry
};

static INITIALISED: OnceLock<()> = OnceLock::new();

#[derive(Debug, Error)]
pub enum InitError {
    #[error("tracing has already been initialised")]
    AlreadyInitialised,
    #[error("failed to install tracing subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError)
}

/// 安裝全域 tracing subscriber，預設層級為 `info`，可由 `RUST_LOG` 覆寫。
pub fn init_tracing() -> Result<(), InitError> {
    INITIALISED
        .set(())
        .map_err(|_| InitError::AlreadyInitialised)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);
    Registry::default()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;
    Ok(())
}
