//! Vote front-end binary.
//!
//! - Ballot on `gateway.listen`: `GET /`, `POST /`, `/media/*`, `/static/*`
//! - Metrics on `gateway.metrics_listen`: `/metrics`, `/healthz`, `/readyz`
//! - Graceful shutdown on Ctrl+C / SIGTERM (readiness flips to draining first)

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vote_core::error::Result;
use vote_gateway::{app_state::AppState, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "vote-gateway failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cfg = config::load()?;
    let listen = cfg.gateway.listen_addr()?;
    let metrics_listen = cfg.gateway.metrics_addr()?;
    tracing::info!(option_a = %cfg.options.a, option_b = %cfg.options.b, "ballot configured");

    let state = AppState::new(cfg, config::resolve_hostname())?;

    // A dead metrics port must not take the ballot down with it.
    match tokio::net::TcpListener::bind(metrics_listen).await {
        Ok(listener) => {
            tracing::info!(%metrics_listen, "metrics server started");
            let ops = router::build_ops_router(state.clone());
            tokio::spawn(async move {
                if let Err(e) = axum::serve(listener, ops).await {
                    tracing::error!(error = %e, "metrics server stopped");
                }
            });
        }
        Err(e) => tracing::error!(%metrics_listen, error = %e, "failed to start metrics server"),
    }

    let app = router::build_router(state.clone());
    tracing::info!(%listen, "vote-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| vote_core::VoteError::Internal(format!("failed to bind {listen}: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| vote_core::VoteError::Internal(format!("server failed: {e}")))?;

    tracing::info!("vote-gateway stopped");
    Ok(())
}

async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    state.metrics().set_draining();
    tracing::info!("signal received, starting graceful shutdown");
}
