//! Wire models for Jira REST API v3 payloads
//!
//! Only the fields the query builder reads are modeled; everything else in
//! Jira's responses is ignored. Optional fields deserialize permissively -
//! a missing summary or a null assignee must never fail a search.

use serde::{Deserialize, Serialize};

/// Issue fields requested from the search endpoint
pub const DEFAULT_SEARCH_FIELDS: &[&str] = &["summary", "status", "assignee", "created"];

/// A Jira project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub key: String,
    pub name: String,
}

/// A component within a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

/// An issue type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub subtask: bool,
}

/// A workflow status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Status {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

/// Request body for the search endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub jql: String,
    pub max_results: u32,
    pub fields: Vec<String>,
}

impl SearchRequest {
    pub fn new(jql: impl Into<String>, max_results: u32) -> Self {
        Self {
            jql: jql.into(),
            max_results,
            fields: DEFAULT_SEARCH_FIELDS.iter().map(|f| (*f).to_string()).collect(),
        }
    }
}

/// Response body from the search endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub issues: Vec<Issue>,
}

/// One issue record from a search result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub key: String,
    #[serde(default)]
    pub fields: IssueFields,
}

/// The requested fields of an issue
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueFields {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub status: Option<StatusRef>,
    #[serde(default)]
    pub assignee: Option<UserRef>,
    /// Raw created timestamp as Jira sent it
    #[serde(default)]
    pub created: Option<String>,
}

/// Status reference embedded in an issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusRef {
    pub name: String,
}

/// User reference embedded in an issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(rename = "displayName")]
    pub display_name: String,
}
