use std::path::Path;

use tokio::net::TcpListener;

use echo_server::config::EchoConfig;
use echo_server::http::EchoServer;
use echo_server::lifecycle::{signals, Shutdown};
use echo_server::observability::logging;

/// Default location of the optional configuration file. A missing file
/// yields the built-in defaults (bind on 0.0.0.0:8080).
const CONFIG_PATH: &str = "echo.toml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    tracing::info!("echo-server v{} starting", env!("CARGO_PKG_VERSION"));

    let config = EchoConfig::load_or_default(Path::new(CONFIG_PATH))?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(signals::wait_for_signal(shutdown));

    let server = EchoServer::new();
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
