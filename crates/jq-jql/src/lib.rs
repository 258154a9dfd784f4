//! # jq-jql
//!
//! JQL clause assembly for the Jira query builder.
//!
//! This crate turns a structured [`QuerySpec`] into a Jira Query Language
//! string. It is pure: no I/O, no retained state, one output string per call.
//!
//! ## Structure
//!
//! - `clause` - Field selections and the value-clause formatter
//! - `advanced` - Free-text, date-bound, attachment, and label options
//! - `sort` - Sort direction and the ORDER BY specification
//! - `spec` - The QuerySpec aggregate and full-query assembly
//! - `builder` - Fluent API for constructing query specs
//! - `fields` - JQL field-name constants
//!
//! ## Example
//!
//! ```
//! use jq_jql::builder::QuerySpecBuilder;
//! use jq_jql::sort::SortDirection;
//!
//! let spec = QuerySpecBuilder::new("OPS")
//!     .issue_types(vec!["Bug".into(), "Task".into()])
//!     .statuses(vec!["Open".into()])
//!     .has_attachments()
//!     .order_by("created", SortDirection::Desc)
//!     .build();
//!
//! assert_eq!(
//!     spec.to_jql(),
//!     "project = \"OPS\" AND issuetype IN (\"Bug\", \"Task\") AND status = \"Open\" \
//!      AND attachments IS NOT EMPTY ORDER BY created DESC"
//! );
//! ```

pub mod advanced;
pub mod builder;
pub mod clause;
pub mod fields;
pub mod sort;
pub mod spec;

// Re-exports for convenience
pub use advanced::{AdvancedOptions, AttachmentsFilter};
pub use builder::QuerySpecBuilder;
pub use clause::{value_clause, Selection};
pub use sort::{OrderSpec, SortDirection};
pub use spec::QuerySpec;
