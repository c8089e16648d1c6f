//! Composition root: wires configuration into stores, services and the router.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::adapter::inbound::http::{self, AppState, Localizer, ScopeGate};
use crate::adapter::outbound::i18n::BundleMessageResolver;
use crate::adapter::outbound::memory::MemoryProductStore;
#[cfg(feature = "sqlite")]
use crate::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};
#[cfg(feature = "sqlite")]
use crate::adapter::outbound::sqlite::SqliteProductStore;
use crate::application::product::ProductService;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::config::storage::StorageBackend;
use crate::port::outbound::store::ProductStore;

/// Build the message resolver: bundled catalogues, then the configured
/// override directory on top.
pub(crate) fn build_messages(config: &Config) -> Result<BundleMessageResolver> {
    let mut messages = BundleMessageResolver::bundled(config.default_locale()?)?;
    if let Some(dir) = &config.messages.directory {
        info!(directory = %dir.display(), "Loading message catalogues");
        messages.load_directory(dir)?;
    }
    Ok(messages)
}

/// Build the HTTP router over the given store.
///
/// # Errors
/// Returns an error if the message catalogues or auth settings are invalid.
pub fn build_router<S: ProductStore>(config: &Config, store: Arc<S>) -> Result<Router> {
    let messages = build_messages(config)?;
    let localizer = Localizer::new(Arc::new(messages), config.default_locale()?);

    if !config.auth.enabled {
        warn!("Scope checks disabled; relying on the gateway");
    }
    let gate = ScopeGate::new(config.auth.enabled, config.scope_header()?, localizer.clone());

    let service = Arc::new(ProductService::new(store));
    let state = AppState::new(service, localizer, config.server.base_path.as_str());

    Ok(http::router(state, gate))
}

/// Open the configured store and serve until Ctrl-C.
///
/// # Errors
/// Returns an error if the store cannot be opened or the listener fails.
pub async fn serve(config: Config) -> Result<()> {
    match config.storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory product store");
            run(&config, Arc::new(MemoryProductStore::new())).await
        }
        #[cfg(feature = "sqlite")]
        StorageBackend::Sqlite => {
            info!(database = %config.storage.database, "Opening SQLite product store");
            let pool = create_pool(&config.storage.database_url())?;
            run_migrations(&pool)?;
            run(&config, Arc::new(SqliteProductStore::new(pool))).await
        }
        #[cfg(not(feature = "sqlite"))]
        StorageBackend::Sqlite => Err(crate::error::ConfigError::InvalidValue {
            field: "backend",
            reason: "sqlite support requires the sqlite feature".to_string(),
        }
        .into()),
    }
}

async fn run<S: ProductStore>(config: &Config, store: Arc<S>) -> Result<()> {
    let app = build_router(config, store)?;
    let addr = config.bind_addr()?;

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, base_path = %config.server.base_path, "Catalogue listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Catalogue stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
