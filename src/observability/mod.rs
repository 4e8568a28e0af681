//! Observability subsystem.
//!
//! The request ID and metrics layers a larger service would carry are
//! out of scope here; structured logging is the one consumer.

pub mod logging;
