use clap::Parser;
use snap_watch::utils::logger;
use snap_watch::{app, CheckerConfig, CliConfig};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting snap-watch");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = CheckerConfig::from_cli(&cli);

    match app::run_from_env(config).await {
        Ok(summary) => {
            if summary.notified {
                println!(
                    "✅ Found {} available slot(s), notification sent",
                    summary.available_slots
                );
            } else {
                println!("No available tickets found at this time.");
            }
        }
        Err(e) => {
            tracing::error!("❌ Run failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
