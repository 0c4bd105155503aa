//! Observability for rosterdb
//!
//! Structured, synchronous logging. One log line is one event, emitted as a
//! single JSON object with deterministic field ordering, so log output is
//! stable across runs and trivially machine-parseable.

mod logger;

pub use logger::{LogLevel, Logger};
