//! Companion client for the employee service
//!
//! An independent process that talks to the service purely over HTTP:
//! issues the three operations, parses responses, and renders results as
//! human-readable lines. Any non-success outcome uniformly degrades to
//! "no result"; raw transport errors never reach the end user.

pub mod cli;
pub mod http;
pub mod render;

pub use http::{ClientError, EmployeeClient};
