//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Human or JSON formatting on stderr
//! - Optional JSON log file
//! - `RUST_LOG` overrides the configured level

pub mod logger;

pub use logger::LoggerImpl;
