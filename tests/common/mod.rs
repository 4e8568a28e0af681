//! Shared utilities for integration tests.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use echo_server::{EchoServer, Shutdown};

/// Spawn the echo server on an ephemeral port.
///
/// Returns the bound address, the shutdown handle, and the server task
/// so tests can assert a clean exit.
pub async fn spawn_server() -> (SocketAddr, Shutdown, JoinHandle<Result<(), std::io::Error>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = EchoServer::new();

    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    (addr, shutdown, handle)
}
