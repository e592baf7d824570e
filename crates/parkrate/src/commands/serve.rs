//! Run the HTTP rate service until Ctrl-C.

use std::sync::Arc;

use tokio::net::TcpListener;

use parkrate_core::{InMemoryRateStore, RateStore};

use crate::cli::{GlobalOpts, ServeArgs};
use crate::error::CliError;
use crate::routes;
use crate::state::AppState;

pub async fn handle(args: ServeArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = super::load(global)?;
    let host = args.host.unwrap_or_else(|| cfg.http.host.clone());
    let port = args.port.unwrap_or(cfg.http.port);

    // The service may start with an empty table and receive one over POST.
    let rules = match args.rates.as_deref() {
        Some(path) => parkrate_config::load_rates_file(path)?,
        None => parkrate_config::load_initial_rates(&cfg)?,
    };

    let store = InMemoryRateStore::with_basis(cfg.matching.time_basis);
    store.set_rates(&rules);
    let basis = store.basis();
    let state = AppState::new(Arc::new(store));

    let listener = TcpListener::bind((host.as_str(), port))
        .await
        .map_err(|source| CliError::Bind {
            addr: format!("{host}:{port}"),
            source,
        })?;
    let addr = listener.local_addr()?;

    tracing::info!(
        rules = rules.len(),
        time_basis = ?basis,
        "parkrate listening on http://{addr}"
    );

    axum::serve(listener, routes::app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(CliError::Serve)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, gracefully stopping…");
}
