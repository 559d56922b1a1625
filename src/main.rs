use clap::Parser;
use lot_sizer::utils::logger;
use lot_sizer::{CliConfig, LocalStorage, LotPipeline, ReportEngine, TerminalConsole};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting lot-sizer");
    tracing::debug!("CLI config: {:?}", config);

    let pipeline = LotPipeline::new(TerminalConsole::stdio(), LocalStorage::working_dir());
    let mut engine = ReportEngine::new(pipeline);

    match engine.run() {
        Ok(summary) => {
            tracing::info!(
                "✅ Report completed: {} row(s), {} solved",
                summary.rows,
                summary.solved
            );
        }
        Err(e) => {
            tracing::error!("❌ Report failed: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
