//! Field selections and the value-clause formatter
//!
//! A selection is what the user picked for one categorical field: nothing,
//! a single value, or an ordered list of values. The formatter turns a
//! field name plus a selection into zero or one JQL comparison clause.

use serde::{Deserialize, Serialize};

/// A field selection: absent, a single value, or an ordered list of values
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub enum Selection {
    /// Nothing selected
    #[default]
    None,
    /// Exactly one value
    One(String),
    /// Two or more values, in selection order
    Many(Vec<String>),
}

impl Selection {
    /// Create from a list of values, collapsing the one-element case
    pub fn from_values(values: Vec<String>) -> Self {
        match values.len() {
            0 => Self::None,
            1 => Self::One(values.into_iter().next().unwrap()),
            _ => Self::Many(values),
        }
    }

    /// Create from a single scalar value; an empty string selects nothing
    pub fn one(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Self::None
        } else {
            Self::One(value)
        }
    }

    /// Get the selected values in order
    pub fn values(&self) -> &[String] {
        match self {
            Self::None => &[],
            Self::One(v) => std::slice::from_ref(v),
            Self::Many(vs) => vs,
        }
    }

    /// Check if nothing is selected
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl From<Vec<String>> for Selection {
    fn from(values: Vec<String>) -> Self {
        Self::from_values(values)
    }
}

impl From<Selection> for Vec<String> {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::None => vec![],
            Selection::One(v) => vec![v],
            Selection::Many(vs) => vs,
        }
    }
}

/// Double-quote each value and join with comma-space: `"a", "b", "c"`
pub(crate) fn quoted_list(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("\"{v}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Produce a JQL comparison clause for a field and its selection.
///
/// An empty selection yields no clause. One value yields `field = "v"`,
/// two or more yield `field IN ("v1", "v2")` in selection order.
///
/// Embedded `"` characters in values are not escaped; a value containing
/// a double quote produces invalid JQL. Known limitation.
pub fn value_clause(field: &str, selection: &Selection) -> Option<String> {
    match selection {
        Selection::None => None,
        Selection::One(v) => Some(format!("{field} = \"{v}\"")),
        Selection::Many(vs) => Some(format!("{field} IN ({})", quoted_list(vs))),
    }
}
