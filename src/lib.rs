//! # safescan
//!
//! HTTP service that rates the pages behind a web search by how densely
//! their visible text uses sensitive-content keywords.
//!
//! The scoring pipeline lives in [`safescan_search`]; this crate adds the
//! service configuration file, the axum server, and the `safescan-server`
//! binary.

pub mod config;
pub mod error;
pub mod server;

pub use config::{ServerConfig, ServiceConfig};
pub use error::{Result, ServiceError};
pub use server::{AnalysisServer, AppState, router, serve};
