//! Minimal HTTP echo server built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────┐
//!                    │               ECHO SERVER                 │
//!                    │                                           │
//!   Client Request   │  ┌──────────┐    ┌────────────────────┐  │
//!   ─────────────────┼─▶│  axum    │───▶│  POST /echo        │  │
//!                    │  │  router  │    │  handler (echo)    │  │
//!   Client Response  │  └──────────┘    └────────────────────┘  │
//!   ◀────────────────┼── body bytes written back verbatim       │
//!                    │                                           │
//!                    │  ┌─────────────────────────────────────┐ │
//!                    │  │        Cross-Cutting Concerns        │ │
//!                    │  │  ┌────────┐ ┌───────────┐ ┌───────┐ │ │
//!                    │  │  │ config │ │ lifecycle │ │ logs  │ │ │
//!                    │  │  └────────┘ └───────────┘ └───────┘ │ │
//!                    │  └─────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────┘
//! ```
//!
//! The router answers 405 for non-POST methods at `/echo` and 404 for
//! unmatched paths; only well-routed requests reach the handler.

// Core subsystems
pub mod config;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::EchoConfig;
pub use http::EchoServer;
pub use lifecycle::Shutdown;
