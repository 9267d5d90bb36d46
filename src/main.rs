#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::todo)]
#![warn(clippy::panic)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(unreachable_pub)]
#![warn(missing_debug_implementations)]
#![warn(unused_qualifications)]
#![deny(unused_must_use)]

use message_service::config::Config;
use message_service::{storage, telemetry};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::sync::watch;
use tracing::Instrument;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load();
    telemetry::init_telemetry(&config.telemetry)?;

    let boot_span = tracing::info_span!("boot_server");
    let (listener, app_router, pool, mut shutdown_rx) = async {
        // Phase 1: Storage (non-fatal, never retried)
        let pool = storage::connect(config.database_url(), &config.database).await;
        if let Some(pool) = &pool {
            storage::bootstrap(pool).await;
        }

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        message_service::spawn_signal_handler(shutdown_tx);

        // Phase 2: Router
        let app_router = message_service::api::app_router(message_service::build_state(pool.clone()));

        // Phase 3: Listener
        let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(address = %addr, "listening");

        Ok::<_, anyhow::Error>((listener, app_router, pool, shutdown_rx))
    }
    .instrument(boot_span)
    .await?;

    if let Err(e) = axum::serve(listener, app_router)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.wait_for(|&s| s).await;
        })
        .await
    {
        tracing::error!(error = %e, "Server error");
    }

    if let Some(pool) = pool {
        let timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
        if tokio::time::timeout(timeout, pool.close()).await.is_err() {
            tracing::warn!("Timeout waiting for database connections to close.");
        }
    }

    tracing::info!("Server stopped");
    Ok(())
}
