//! rosterdb - A minimal, durable employee record service
//!
//! Employee records (first name, last name, identification number) are
//! normalized at construction, stored in an append-only checksummed record
//! file, and exposed over an HTTP API. A companion `roster` binary issues
//! the operations as outbound calls and renders results for a human.

pub mod cli;
pub mod client;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod repository;
pub mod storage;
