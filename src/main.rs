mod app;

use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

use pattern_dashboard::api::ApiClient;
use pattern_dashboard::config::Config;

use crate::app::PatternsApp;

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    let api = Box::new(ApiClient::new(&cfg));

    let mut app = PatternsApp::new(api);
    app.run().await?;

    Ok(())
}
