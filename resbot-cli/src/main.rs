//! resbot: run the Telegram resource bot, list or check its catalog.

use anyhow::Result;
use clap::Parser;
use resbot_cli::{check_resources, list_resources, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.load_config()?;

    match cli.command {
        Commands::Run { token, catalog } => {
            let config = config.with_token(token).with_catalog_file(catalog);
            run_bot(config).await
        }
        Commands::List { catalog } => list_resources(&config.with_catalog_file(catalog)),
        Commands::Check { catalog } => check_resources(&config.with_catalog_file(catalog)),
    }
}
