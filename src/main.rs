use anyhow::Context;
use clap::Parser;
use sheets_dispatch::utils::{logger, validation::Validate};
use sheets_dispatch::{Action, CliConfig, RequestDispatcher, SheetsApi};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let action: Action = config.action.parse()?;
    let fields = config.request_fields()?;
    let dispatcher = RequestDispatcher::new(config.dispatcher_config()?)
        .context("failed to build dispatcher")?;

    match dispatcher.dispatch(action, fields).await {
        Ok(response) => {
            if let Some(message) = response.message() {
                tracing::info!("✅ {}: {}", action, message);
            }
            println!("{}", serde_json::to_string_pretty(response.as_value())?);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
