use bookstore::catalog::controller::serve;
use bookstore::core::domain::Configuration;
use bookstore::utils::logs::setup_tracing;

// Settings come from BOOKSTORE_* environment variables, see Configuration::from_env.

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Configuration::from_env()?;
    setup_tracing(&config);

    tracing::info!(server = %config.server_name, "starting bookstore service: create, get, update, delete, list and search books by price");
    serve(config).await
}
