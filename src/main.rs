use anyhow::Context;
use clap::Parser;
use namespace_publisher::utils::{logger, validation::Validate};
use namespace_publisher::{CliConfig, PublishConfig, Publisher, ShellRunner};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting push-to-clojars");
    tracing::debug!("CLI config: {:?}", cli);

    // 載入配置
    let loaded = match &cli.config {
        Some(path) => PublishConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path.display())),
        None => Ok(PublishConfig::default()),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - commands are printed, not executed");
    }

    let runner = ShellRunner::new(config.shell.clone());
    let publisher = Publisher::new(runner, config, cli.base_dir())
        .with_dry_run(cli.dry_run)
        .with_strict(cli.strict);

    match publisher.run().await {
        Ok(report) => {
            tracing::info!(
                "✅ Done: {} published ({} with non-zero exit), {} skipped, {} dry-run",
                report.published(),
                report.failed(),
                report.skipped(),
                report.dry_runs()
            );
        }
        Err(e) => {
            tracing::error!("❌ Publishing failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
