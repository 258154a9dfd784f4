//! The QuerySpec aggregate and full-query assembly
//!
//! A QuerySpec captures every user selection for one query: the mandatory
//! project, the three categorical field selections, the advanced options,
//! and the sort directive. `to_jql` renders it as one JQL string.

use serde::{Deserialize, Serialize};

use crate::advanced::AdvancedOptions;
use crate::clause::{quoted_list, value_clause, Selection};
use crate::fields;
use crate::sort::OrderSpec;

/// Structured representation of all filter and sort criteria for one query.
///
/// Constructed fresh per interaction; never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuerySpec {
    /// Project key; always emitted as an equality clause
    pub project: String,
    /// Issue type selection
    #[serde(default)]
    pub issue_type: Selection,
    /// Status selection
    #[serde(default)]
    pub status: Selection,
    /// Component selection
    #[serde(default)]
    pub component: Selection,
    /// Advanced options
    #[serde(default)]
    pub advanced: AdvancedOptions,
    /// Sort directive
    #[serde(default)]
    pub order: OrderSpec,
}

impl QuerySpec {
    /// Create a spec for a project with everything else unset
    pub fn for_project(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            ..Default::default()
        }
    }

    /// Render the spec as a JQL string.
    ///
    /// Conditions are collected in a fixed order - project, issue type,
    /// status, component, summary, date bounds, attachments, labels -
    /// joined with ` AND `, and suffixed with `ORDER BY` when the sort
    /// directive is effective. Absent or empty inputs contribute no
    /// clause; the function itself never fails.
    pub fn to_jql(&self) -> String {
        let mut conditions = vec![format!("{} = \"{}\"", fields::PROJECT, self.project)];

        for (field, selection) in [
            (fields::ISSUE_TYPE, &self.issue_type),
            (fields::STATUS, &self.status),
            (fields::COMPONENT, &self.component),
        ] {
            if let Some(clause) = value_clause(field, selection) {
                conditions.push(clause);
            }
        }

        if !self.advanced.summary_contains.is_empty() {
            conditions.push(format!(
                "{} ~ \"{}\"",
                fields::SUMMARY,
                self.advanced.summary_contains
            ));
        }

        // The four date bounds are independent; no after<=before validation.
        for (field, op, value) in [
            (fields::CREATED, ">=", &self.advanced.created_after),
            (fields::CREATED, "<=", &self.advanced.created_before),
            (fields::UPDATED, ">=", &self.advanced.updated_after),
            (fields::UPDATED, "<=", &self.advanced.updated_before),
        ] {
            if !value.is_empty() {
                conditions.push(format!("{field} {op} \"{value}\""));
            }
        }

        if let Some(clause) = self.advanced.attachments.clause() {
            conditions.push(clause.to_string());
        }

        let labels = self.advanced.label_tokens();
        match labels.len() {
            0 => {}
            1 => conditions.push(format!("{} = \"{}\"", fields::LABELS, labels[0])),
            _ => {
                let owned: Vec<String> = labels.iter().map(|l| (*l).to_string()).collect();
                conditions.push(format!("{} IN ({})", fields::LABELS, quoted_list(&owned)));
            }
        }

        let mut jql = conditions.join(" AND ");

        if self.order.is_effective() {
            let field = self.order.field.as_deref().unwrap_or_default();
            jql.push_str(&format!(" ORDER BY {} {}", field, self.order.direction.as_jql()));
        }

        jql
    }
}
