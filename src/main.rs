use std::error::Error;

use tracing::{Level, info};
use upgrade_engine::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env when present.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e.into());
        }
    }

    telemetry::init("info,tower_http=warn", Level::INFO)?;
    info!("starting droptimizer backend");

    api::start().await?;

    Ok(())
}
