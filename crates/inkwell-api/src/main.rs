//! Inkwell API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p inkwell-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use inkwell_common::{init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = init_tracing(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        "Configuration loaded"
    );

    if let Err(e) = inkwell_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
