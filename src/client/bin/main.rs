use bookstore::client::run_demo;
use bookstore::core::domain::Configuration;
use bookstore::utils::logs::setup_tracing;

// Runs the walkthrough against BOOKSTORE_SERVER_URL (default http://127.0.0.1:50051).

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Configuration::from_env()?;
    setup_tracing(&config);

    run_demo(&config).await?;
    Ok(())
}
