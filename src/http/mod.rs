//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum router, method/path dispatch)
//!     → echo.rs (read body, write it back)
//!     → Send to client
//! ```
//!
//! Method dispatch (405) and path dispatch (404) are the router's job;
//! handlers only see requests that matched their route binding.

pub mod echo;
pub mod server;

pub use server::EchoServer;
