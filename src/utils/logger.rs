use crate::utils::error::{HelperError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LogFormat {
    #[default]
    Compact,
    /// 一行一筆 JSON，供機器收集
    Json,
}

fn default_filter(verbose: bool) -> EnvFilter {
    let directives = if verbose {
        "typed_helpers=debug,info"
    } else {
        "typed_helpers=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

/// Installs the global subscriber; fails if one is already set.
pub fn try_init_logger(verbose: bool, format: LogFormat) -> Result<()> {
    let registry = tracing_subscriber::registry().with(default_filter(verbose));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let installed = match format {
        LogFormat::Compact => registry.with(fmt_layer.compact()).try_init(),
        LogFormat::Json => registry.with(fmt_layer.json()).try_init(),
    };

    installed.map_err(|e| HelperError::ConfigError {
        message: format!("Logger already initialized: {}", e),
    })
}

pub fn init_cli_logger(verbose: bool) {
    if let Err(e) = try_init_logger(verbose, LogFormat::Compact) {
        eprintln!("⚠️ {}", e);
    }
}

pub fn init_json_logger() {
    if let Err(e) = try_init_logger(false, LogFormat::Json) {
        eprintln!("⚠️ {}", e);
    }
}
