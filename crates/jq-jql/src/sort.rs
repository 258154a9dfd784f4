//! Sort direction and the ORDER BY specification
//!
//! A query carries at most one sort directive. It only takes effect when
//! explicitly activated and a field is chosen.

use serde::{Deserialize, Serialize};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    /// Ascending order (A-Z, oldest first)
    #[default]
    Asc,
    /// Descending order (Z-A, newest first)
    Desc,
}

impl SortDirection {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Asc),
            "desc" | "descending" => Some(Self::Desc),
            _ => None,
        }
    }

    /// The JQL keyword for this direction
    pub fn as_jql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// Get the opposite direction
    pub fn reverse(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// ORDER BY specification for a query
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderSpec {
    /// Whether ordering is enabled
    #[serde(default)]
    pub active: bool,
    /// The field to sort by
    #[serde(default)]
    pub field: Option<String>,
    /// Sort direction, ASC when unspecified
    #[serde(default)]
    pub direction: SortDirection,
}

impl OrderSpec {
    /// Create an inactive order spec
    pub fn inactive() -> Self {
        Self::default()
    }

    /// Create an active order spec for a field
    pub fn by(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            active: true,
            field: Some(field.into()),
            direction,
        }
    }

    /// Create an active ascending order spec
    pub fn by_asc(field: impl Into<String>) -> Self {
        Self::by(field, SortDirection::Asc)
    }

    /// Create an active descending order spec
    pub fn by_desc(field: impl Into<String>) -> Self {
        Self::by(field, SortDirection::Desc)
    }

    /// Ordering applies only when active and a field is chosen
    pub fn is_effective(&self) -> bool {
        self.active && self.field.as_deref().is_some_and(|f| !f.is_empty())
    }
}
