//! # jq-client
//!
//! Jira REST API collaborator for the query builder.
//!
//! Provides the two contracts the orchestration layer depends on - a
//! metadata source for populating selection options and a search service
//! that executes an assembled JQL string - plus [`JiraClient`], the
//! reqwest-backed implementation of both against Jira's REST API v3.
//!
//! No pagination, no retry, no metadata caching. The caller gets exactly
//! one HTTP request per operation.

pub mod client;
pub mod models;
pub mod traits;

pub use client::JiraClient;
pub use models::{Issue, IssueFields, Project};
pub use traits::{MetadataSource, SearchService};
