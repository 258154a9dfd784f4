//! # jq-results
//!
//! Shapes raw search hits into display rows and serializes them as CSV.
//!
//! - `row` - IssueRow with assignee and timestamp fallbacks
//! - `csv` - CSV serialization with field escaping

pub mod csv;
pub mod row;

pub use csv::{format_csv, write_csv};
pub use row::{CreatedStamp, IssueRow};
