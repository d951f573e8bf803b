// Knowledge Extractor API Entry Point
// "The Brain" analyses texts; the server stores and searches the results.

mod brain;
mod config;
mod database;
mod error;
mod models;
mod server;
mod summarizer;
mod telemetry;

#[cfg(test)]
mod tests;

use brain::Analyzer;
use config::AppConfig;
use server::AppState;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the environment alone is enough.
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()?;
    telemetry::init_tracing(config.log_format);

    info!("Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let pool = database::init_db(&config.database_url).await?;
    let analyzer = Analyzer::new(summarizer::from_config(&config.summarizer));

    server::serve(AppState::new(pool, analyzer), &config.bind_address()).await
}
