use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use typed_helpers::config::cli::execute;
use typed_helpers::utils::logger::{self, LogFormat};
use typed_helpers::utils::validation::Validate;
use typed_helpers::{debounce, delay, CliConfig, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(),
    }

    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.load_helper_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if let Command::Debounce { delay_ms } = &cli.command {
        let delay_ms = delay_ms.unwrap_or(config.timing.debounce_ms);
        tracing::info!("Debouncing stdin with a {}ms window", delay_ms);

        let echo = debounce(|line: String| println!("{}", line), delay_ms);
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            echo.call(line);
        }

        // 等待最後一筆觸發
        delay(delay_ms + 10).await;
        return Ok(());
    }

    match execute(&cli.command, &config) {
        Ok(Some(output)) => println!("{}", output),
        Ok(None) => {}
        Err(e) => {
            tracing::error!("❌ Command failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    }

    Ok(())
}
