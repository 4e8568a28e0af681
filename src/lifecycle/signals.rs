//! OS signal handling.
//!
//! Translates SIGINT (ctrl-c) and, on unix, SIGTERM into a shutdown
//! trigger. Uses Tokio's async-safe signal handling.

use crate::lifecycle::Shutdown;

/// Wait for a termination signal, then trigger shutdown.
pub async fn wait_for_signal(shutdown: Shutdown) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
    shutdown.trigger();
}
