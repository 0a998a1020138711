//! Diagnostic binary: loads configuration, restores the stored session, and
//! smoke-checks the backend by fetching the package catalog.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use bhavan_booking::adapters::http::HttpBookingApi;
use bhavan_booking::adapters::storage::FileSessionStore;
use bhavan_booking::application::handlers::auth::VerifySessionHandler;
use bhavan_booking::application::handlers::catalog::BrowsePackagesHandler;
use bhavan_booking::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    config.validate()?;
    tracing::info!(
        base_url = %config.api.base_url,
        test_mode = config.is_test_mode(),
        "Configuration loaded"
    );

    let store = Arc::new(FileSessionStore::new(&config.storage.data_dir));
    let api = Arc::new(HttpBookingApi::new(&config.api, store.clone()));

    match VerifySessionHandler::new(api.clone(), store).handle().await {
        Ok(Some(session)) => tracing::info!(user = %session.user.full_name, "Signed in"),
        Ok(None) => tracing::info!("No stored session; continuing unauthenticated"),
        Err(e) => tracing::warn!(error = %e, "Session verification failed"),
    }

    let catalog = BrowsePackagesHandler::new(api).home().await?;
    println!(
        "{} packages available ({} popular)",
        catalog.packages.len(),
        catalog.popular.len()
    );
    for package in &catalog.popular {
        println!("  {}  {}", package.id, package.name);
    }

    Ok(())
}
