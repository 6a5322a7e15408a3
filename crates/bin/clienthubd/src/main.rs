//! # clienthubd — clienthub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file + env vars)
//! - Initialize `tracing` logging
//! - Construct the JSON file store (adapter) and probe the data file
//! - Construct application services on one shared document gate
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use clienthub_adapter_http_axum::router;
use clienthub_adapter_http_axum::state::AppState;
use clienthub_adapter_storage_json_file::JsonFileStore;
use clienthub_app::ports::DocumentStore;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Storage
    let store = clienthub_adapter_storage_json_file::Config {
        path: config.storage.path.clone(),
    }
    .build();
    probe(&store).await;

    // HTTP
    let state = AppState::from_store(store);
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        address = %bind_addr,
        data_file = %config.storage.path.display(),
        "clienthubd listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("clienthubd stopped");
    Ok(())
}

/// Load the data file once so a broken file shows up in the logs at startup.
/// Serving continues either way: every request reloads the file.
async fn probe(store: &JsonFileStore) {
    match store.load().await {
        Ok(document) => tracing::info!(
            customers = document.customers.len(),
            interactions = document.interactions.len(),
            "data file loaded"
        ),
        Err(err) => tracing::warn!(
            path = %store.path().display(),
            error = ?err,
            "data file cannot be loaded, requests will fail until it is fixed"
        ),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
