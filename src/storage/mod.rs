//! Durable record file for rosterdb
//!
//! The storage layer holds the canonical persistent state of all employee
//! records as an append-only file with no in-place updates.
//!
//! # Design Principles
//!
//! - Append-only (records are only ever added)
//! - fsync after every write; a write is not acknowledged until durable
//! - Checksum-verified on every read
//! - Any checksum failure on read aborts the operation

mod checksum;
mod errors;
mod reader;
mod record;
mod writer;

pub use checksum::compute_checksum;
pub use errors::{Severity, StorageError, StorageResult};
pub use reader::RosterReader;
pub use record::EmployeeRow;
pub use writer::RosterWriter;
