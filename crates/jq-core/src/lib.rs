//! # jq-core
//!
//! Core types shared across the Jira query builder crates:
//! - Common error type and result alias
//! - Configuration loading from the environment

pub mod config;
pub mod error;

pub use config::{AppConfig, JiraConfig, ServerConfig};
pub use error::{JqError, JqResult};
