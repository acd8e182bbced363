use crate::config::toml_config::HelperConfig;
use crate::core::business::get_user_display_name_with;
use crate::core::formatting::{format_date, truncate_with};
use crate::domain::model::User;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "typed-helpers")]
#[command(about = "Formatting and display helpers from the command line")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact, help = "Log output format")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print a date, timestamp (ms) or datetime string as YYYY-MM-DD
    FormatDate { input: String },

    /// Shorten text to a maximum number of characters
    Truncate {
        text: String,
        #[arg(long)]
        max_length: Option<usize>,
        #[arg(long)]
        suffix: Option<String>,
    },

    /// Resolve the display name of a user given as JSON
    DisplayName {
        #[arg(long)]
        user_json: Option<String>,
    },

    /// Echo only the last stdin line of each burst
    Debounce {
        #[arg(long)]
        delay_ms: Option<u64>,
    },
}

impl CliConfig {
    pub fn load_helper_config(&self) -> Result<HelperConfig> {
        match &self.config {
            Some(path) => HelperConfig::from_file(path),
            None => Ok(HelperConfig::default()),
        }
    }
}

/// 執行不需要非同步的子命令，回傳要輸出的文字
pub fn execute(command: &Command, config: &HelperConfig) -> Result<Option<String>> {
    match command {
        Command::FormatDate { input } => {
            let output = match input.parse::<i64>() {
                Ok(timestamp) => format_date(timestamp)?,
                Err(_) => format_date(input.as_str())?,
            };
            Ok(Some(output))
        }
        Command::Truncate {
            text,
            max_length,
            suffix,
        } => {
            let max_length = max_length.unwrap_or(config.format.default_max_length);
            let suffix = suffix.as_deref().unwrap_or(&config.format.truncate_suffix);
            Ok(Some(truncate_with(text, max_length, suffix)))
        }
        Command::DisplayName { user_json } => {
            let user = user_json
                .as_deref()
                .map(serde_json::from_str::<User>)
                .transpose()?;
            Ok(Some(get_user_display_name_with(user.as_ref(), &config.display)))
        }
        Command::Debounce { .. } => Ok(None),
    }
}
