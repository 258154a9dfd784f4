//! Collaborator contracts for the orchestration layer
//!
//! The query builder core only needs two things from the outside world:
//! metadata to populate selection options, and a service that executes an
//! assembled JQL string. Both are async traits so the HTTP surface can be
//! tested against mocks.

use async_trait::async_trait;
use jq_core::JqResult;

use crate::models::{Issue, Project};

/// Source of selectable metadata for building a query spec
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// All visible projects, in the order Jira returns them
    async fn projects(&self) -> JqResult<Vec<Project>>;

    /// Component names for a project
    async fn project_components(&self, project_key: &str) -> JqResult<Vec<String>>;

    /// Issue type names across the instance
    async fn issue_types(&self) -> JqResult<Vec<String>>;

    /// Status names across the instance
    async fn statuses(&self) -> JqResult<Vec<String>>;
}

/// Executes a JQL string against the search API.
///
/// The JQL argument is treated as an opaque string and sent verbatim.
#[async_trait]
pub trait SearchService: Send + Sync {
    async fn search(&self, jql: &str, max_results: u32) -> JqResult<Vec<Issue>>;
}
