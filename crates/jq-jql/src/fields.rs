//! JQL field-name constants
//!
//! The field names the assembler emits, plus the sortable fields offered
//! by the query form.

pub const PROJECT: &str = "project";
pub const ISSUE_TYPE: &str = "issuetype";
pub const STATUS: &str = "status";
pub const COMPONENT: &str = "component";
pub const SUMMARY: &str = "summary";
pub const CREATED: &str = "created";
pub const UPDATED: &str = "updated";
pub const LABELS: &str = "labels";
pub const ATTACHMENTS: &str = "attachments";

/// Fields offered for ORDER BY in the query form
pub const SORTABLE: &[&str] = &[
    "created",
    "updated",
    "priority",
    "assignee",
    "status",
    "issuetype",
    "key",
];
