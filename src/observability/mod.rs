//! Observability subsystem
//!
//! Structured JSON logging for the service. Logging is synchronous, side
//! effect free with respect to request handling, and deterministic: the same
//! event with the same fields always produces the same line.
//!
//! # Usage
//!
//! ```ignore
//! use poemario::observability::Logger;
//!
//! Logger::info("POEM_CREATED", &[("id", "7")]);
//! ```

mod logger;

pub use logger::{Logger, Severity};
