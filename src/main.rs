//! HTTP server for the SAD Pay Engine.
//!
//! Reads `SAD_PAY_CONFIG_DIR` (default `./config/sad`) and `SAD_PAY_BIND_ADDR`
//! (default `0.0.0.0:3000`). Log filtering follows `RUST_LOG`.

use std::error::Error;

use sad_pay_engine::api::{AppState, create_router};
use sad_pay_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/sad";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config_dir =
        std::env::var("SAD_PAY_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr =
        std::env::var("SAD_PAY_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    // Incomplete rate tables are fatal
    let tables = ConfigLoader::load(&config_dir)?.into_tables();
    info!(
        config_dir = %config_dir,
        schedule = %tables.metadata().name,
        version = %tables.metadata().version,
        effective_date = %tables.metadata().effective_date,
        "Loaded rate tables"
    );

    let app = create_router(AppState::new(tables));
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "SAD pay engine listening");

    axum::serve(listener, app).await?;
    Ok(())
}
