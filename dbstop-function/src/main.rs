use std::sync::Arc;

use dbstop_function::config::Config;
use dbstop_function::handler::function_handler;
use dbstop_providers::rds::RdsProvider;
use lambda_runtime::{run, service_fn, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // Module targets are noise in CloudWatch, and ingestion supplies
        // the timestamp.
        .with_target(false)
        .without_time()
        .init();

    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    let provider = Arc::new(RdsProvider::from_env().await);

    run(service_fn(move |event| {
        let provider = Arc::clone(&provider);
        let config = config.clone();
        async move { function_handler(provider.as_ref(), &config, event).await }
    }))
    .await
}
