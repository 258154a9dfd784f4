//! Display rows for search results
//!
//! A search hit becomes one table row: key, summary, status, assignee,
//! created. Missing assignees render as "Unassigned"; a created timestamp
//! that fails to parse is shown verbatim rather than dropped.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Serialize, Serializer};

use jq_client::models::Issue;

/// Shown when an issue has no assignee
pub const UNASSIGNED: &str = "Unassigned";

/// Jira's issue timestamp format: `2024-03-01T09:15:00.000+0000`
const JIRA_TIMESTAMP: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Display format for parsed timestamps
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A created timestamp: parsed when possible, raw fallback otherwise.
///
/// The fallback is an explicit branch, not a swallowed parse error - rows
/// with malformed timestamps still display whatever Jira sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreatedStamp {
    Parsed(DateTime<FixedOffset>),
    Raw(String),
}

impl CreatedStamp {
    /// Parse a raw timestamp string, falling back to the raw text
    pub fn parse(raw: &str) -> Self {
        DateTime::parse_from_str(raw, JIRA_TIMESTAMP)
            .or_else(|_| DateTime::parse_from_rfc3339(raw))
            .map(Self::Parsed)
            .unwrap_or_else(|_| Self::Raw(raw.to_string()))
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }
}

impl fmt::Display for CreatedStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parsed(dt) => write!(f, "{}", dt.format(DISPLAY_FORMAT)),
            Self::Raw(raw) => f.write_str(raw),
        }
    }
}

impl Serialize for CreatedStamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One row of the results table
#[derive(Debug, Clone, Serialize)]
pub struct IssueRow {
    pub key: String,
    pub summary: String,
    pub status: String,
    pub assignee: String,
    pub created: CreatedStamp,
}

impl From<Issue> for IssueRow {
    fn from(issue: Issue) -> Self {
        let fields = issue.fields;
        Self {
            key: issue.key,
            summary: fields.summary.unwrap_or_default(),
            status: fields.status.map(|s| s.name).unwrap_or_default(),
            assignee: fields
                .assignee
                .map(|a| a.display_name)
                .unwrap_or_else(|| UNASSIGNED.to_string()),
            created: CreatedStamp::parse(&fields.created.unwrap_or_default()),
        }
    }
}

/// Shape a batch of search hits into rows, preserving result order
pub fn to_rows(issues: Vec<Issue>) -> Vec<IssueRow> {
    issues.into_iter().map(IssueRow::from).collect()
}
