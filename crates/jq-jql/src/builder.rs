//! Query Spec Builder
//!
//! Provides a fluent API for constructing query specs without writing
//! struct literals.

use crate::advanced::{AdvancedOptions, AttachmentsFilter};
use crate::clause::Selection;
use crate::sort::{OrderSpec, SortDirection};
use crate::spec::QuerySpec;

/// Builder for constructing query specs fluently
#[derive(Debug, Default)]
pub struct QuerySpecBuilder {
    project: String,
    issue_type: Selection,
    status: Selection,
    component: Selection,
    advanced: AdvancedOptions,
    order: OrderSpec,
}

impl QuerySpecBuilder {
    /// Create a new builder for a project
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            ..Default::default()
        }
    }

    /// Select issue types
    pub fn issue_types(mut self, values: Vec<String>) -> Self {
        self.issue_type = Selection::from_values(values);
        self
    }

    /// Select a single issue type
    pub fn issue_type(mut self, value: impl Into<String>) -> Self {
        self.issue_type = Selection::one(value);
        self
    }

    /// Select statuses
    pub fn statuses(mut self, values: Vec<String>) -> Self {
        self.status = Selection::from_values(values);
        self
    }

    /// Select a single status
    pub fn status(mut self, value: impl Into<String>) -> Self {
        self.status = Selection::one(value);
        self
    }

    /// Select components
    pub fn components(mut self, values: Vec<String>) -> Self {
        self.component = Selection::from_values(values);
        self
    }

    /// Select a single component
    pub fn component(mut self, value: impl Into<String>) -> Self {
        self.component = Selection::one(value);
        self
    }

    /// Match summaries containing the given text
    pub fn summary_contains(mut self, text: impl Into<String>) -> Self {
        self.advanced.summary_contains = text.into();
        self
    }

    /// Lower bound on the created timestamp
    pub fn created_after(mut self, value: impl Into<String>) -> Self {
        self.advanced.created_after = value.into();
        self
    }

    /// Upper bound on the created timestamp
    pub fn created_before(mut self, value: impl Into<String>) -> Self {
        self.advanced.created_before = value.into();
        self
    }

    /// Lower bound on the updated timestamp
    pub fn updated_after(mut self, value: impl Into<String>) -> Self {
        self.advanced.updated_after = value.into();
        self
    }

    /// Upper bound on the updated timestamp
    pub fn updated_before(mut self, value: impl Into<String>) -> Self {
        self.advanced.updated_before = value.into();
        self
    }

    /// Only issues with attachments
    pub fn has_attachments(mut self) -> Self {
        self.advanced.attachments = AttachmentsFilter::Has;
        self
    }

    /// Only issues without attachments
    pub fn no_attachments(mut self) -> Self {
        self.advanced.attachments = AttachmentsFilter::None;
        self
    }

    /// Set the raw comma-separated labels string
    pub fn labels(mut self, raw: impl Into<String>) -> Self {
        self.advanced.labels = raw.into();
        self
    }

    /// Order by a field in the given direction
    pub fn order_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.order = OrderSpec::by(field, direction);
        self
    }

    /// Order by a field ascending
    pub fn order_by_asc(self, field: impl Into<String>) -> Self {
        self.order_by(field, SortDirection::Asc)
    }

    /// Order by a field descending
    pub fn order_by_desc(self, field: impl Into<String>) -> Self {
        self.order_by(field, SortDirection::Desc)
    }

    /// Build the query spec
    pub fn build(self) -> QuerySpec {
        QuerySpec {
            project: self.project,
            issue_type: self.issue_type,
            status: self.status,
            component: self.component,
            advanced: self.advanced,
            order: self.order,
        }
    }
}
