//! `menu-site` binary.
//!
//! Run with:
//!   RUST_LOG=menu_site=debug cargo run
//!
//! Try:
//!   curl http://localhost:3000/
//!   curl http://localhost:3000/burgers
//!   curl -i http://localhost:3000/bogus-category
//!   curl http://localhost:3000/healthz

use std::process::ExitCode;

use menu_site::Config;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("menu_site=info")))
        .with(fmt::layer())
        .init();

    let result = match Config::from_env() {
        Ok(config) => menu_site::run(config).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("menu-site failed: {e}");
            ExitCode::FAILURE
        }
    }
}
