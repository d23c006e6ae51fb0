use clap::Parser;
use times_table::utils::{logger, validation::Validate};
use times_table::{CliConfig, Console, Result, Settings, StudyEngine, StudyError, StudyPipeline, TomlConfig};

fn main() {
    let cli = CliConfig::parse();

    // 先合併設定，日誌等級可能來自設定檔
    let settings = load_settings(&cli);
    let (verbose, json_logs) = match &settings {
        Ok(s) => (s.verbose, s.json_logs),
        Err(_) => (cli.verbose, cli.json_logs),
    };
    logger::init_cli_logger(verbose, json_logs);

    tracing::info!("Starting times-table");
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = settings.and_then(run) {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ times-table failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        report_failure(&e);
        std::process::exit(e.exit_code());
    }
}

fn load_settings(cli: &CliConfig) -> Result<Settings> {
    cli.validate()?;

    let mut settings = Settings::default();
    if let Some(path) = &cli.config {
        let file = TomlConfig::from_file(path)?;
        file.validate()?;
        settings = settings.overlay(&file);
    }

    Ok(settings.overlay(cli))
}

fn run(settings: Settings) -> Result<()> {
    tracing::debug!("Resolved settings: {:?}", settings);

    let pipeline = StudyPipeline::new(Console::stdio(), settings);
    let mut engine = StudyEngine::new(pipeline);
    let report = engine.run()?;

    tracing::info!("✅ {} rows written, {}", report.row_count(), report.summary_line());
    Ok(())
}

fn report_failure(e: &StudyError) {
    if e.follows_prompt() {
        eprintln!();
    }
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}
