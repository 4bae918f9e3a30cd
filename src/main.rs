use anyhow::Context;
use calendar_diff::adapters::render;
use calendar_diff::utils::error::DiffError;
use calendar_diff::utils::{logger, validation::Validate};
use calendar_diff::{CliConfig, ConfigProvider, DiffEngine, SystemClock, TomlConfig};
use clap::Parser;

fn exit_with(e: &DiffError) -> ! {
    tracing::error!(
        "❌ Calendar diff failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}

fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 先載入設定檔，日誌等級可能來自檔案
    let file = match &config.config {
        Some(path) => match TomlConfig::from_file(path).and_then(|f| f.validate().map(|_| f)) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => None,
    };

    let log_level = file.as_ref().and_then(|f| f.log_level());
    if config.log_json {
        logger::init_json_logger(log_level);
    } else {
        logger::init_cli_logger(config.verbose, log_level);
    }

    tracing::info!("🚀 Starting calendar-diff");
    if let Some(file) = &file {
        tracing::info!(
            "📁 Loaded configuration from: {}",
            config.config.as_deref().unwrap_or_default()
        );
        config = match config.merged_with(file) {
            Ok(merged) => merged,
            Err(e) => exit_with(&e),
        };
    }
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let engine = DiffEngine::from_config(SystemClock, &config);
    let report = match engine.run(&config) {
        Ok(report) => report,
        Err(e) => exit_with(&e),
    };

    let output = render::render(&report, config.output_format())
        .context("failed to render the result")?;
    println!("{}", output);

    Ok(())
}
