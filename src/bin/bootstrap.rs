// Lambda bootstrap entry point shared by every Cryptonaut function

use anyhow::Context;
use lambda_runtime::Error;
use std::sync::Arc;
use tracing::info;

use cryptonaut::core::config::AppConfig;
use cryptonaut::handlers::InvocationHandler;

fn load_handler() -> anyhow::Result<Arc<dyn InvocationHandler>> {
    let config = AppConfig::from_env().context("Failed to load configuration")?;
    let kind = config
        .selected_handler()
        .context("Failed to select a handler")?;

    info!(handler = %kind, "Cold start");
    Ok(Arc::from(kind.build(&config)))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    cryptonaut::setup_logging();

    let handler = load_handler()?;
    cryptonaut::runtime::serve(handler).await
}
