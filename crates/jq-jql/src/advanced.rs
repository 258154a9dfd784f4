//! Advanced query options
//!
//! Free-text summary search, created/updated date bounds, the attachment
//! presence filter, and the raw labels string. All fields are permissive:
//! an empty value contributes no clause.

use serde::{Deserialize, Serialize};

/// Attachment presence filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentsFilter {
    /// Not filtering on attachments
    #[default]
    Unset,
    /// Only issues that have attachments
    Has,
    /// Only issues without attachments
    None,
}

impl AttachmentsFilter {
    /// The JQL existence clause for this filter, if any
    pub fn clause(&self) -> Option<&'static str> {
        match self {
            Self::Unset => Option::None,
            Self::Has => Some("attachments IS NOT EMPTY"),
            Self::None => Some("attachments IS EMPTY"),
        }
    }
}

/// Optional filters beyond the categorical field selections.
///
/// Date bound values are pre-formatted timestamp strings; the builder
/// embeds them verbatim and does not parse or validate date semantics.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdvancedOptions {
    /// Substring match against the summary field
    #[serde(default)]
    pub summary_contains: String,
    /// Lower bound on created (`created >= value`)
    #[serde(default)]
    pub created_after: String,
    /// Upper bound on created (`created <= value`)
    #[serde(default)]
    pub created_before: String,
    /// Lower bound on updated (`updated >= value`)
    #[serde(default)]
    pub updated_after: String,
    /// Upper bound on updated (`updated <= value`)
    #[serde(default)]
    pub updated_before: String,
    /// Attachment presence filter
    #[serde(default)]
    pub attachments: AttachmentsFilter,
    /// Raw comma-separated labels string
    #[serde(default)]
    pub labels: String,
}

impl AdvancedOptions {
    /// Split the raw labels string into trimmed, non-empty tokens
    pub fn label_tokens(&self) -> Vec<&str> {
        let raw = self.labels.trim();
        if raw.is_empty() {
            return vec![];
        }
        raw.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachments_clauses() {
        assert_eq!(AttachmentsFilter::Unset.clause(), Option::None);
        assert_eq!(
            AttachmentsFilter::Has.clause(),
            Some("attachments IS NOT EMPTY")
        );
        assert_eq!(
            AttachmentsFilter::None.clause(),
            Some("attachments IS EMPTY")
        );
    }

    #[test]
    fn test_label_tokens_split_and_trimmed() {
        let options = AdvancedOptions {
            labels: "a, b ,c".into(),
            ..Default::default()
        };
        assert_eq!(options.label_tokens(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_label_tokens_empty_and_blank() {
        let empty = AdvancedOptions::default();
        assert!(empty.label_tokens().is_empty());

        let blank = AdvancedOptions {
            labels: "   ".into(),
            ..Default::default()
        };
        assert!(blank.label_tokens().is_empty());
    }

    #[test]
    fn test_label_tokens_drop_empty_pieces() {
        let options = AdvancedOptions {
            labels: "backend,, ,frontend,".into(),
            ..Default::default()
        };
        assert_eq!(options.label_tokens(), vec!["backend", "frontend"]);
    }

    #[test]
    fn test_deserialize_empty_object() {
        let options: AdvancedOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, AdvancedOptions::default());
        assert_eq!(options.attachments, AttachmentsFilter::Unset);
    }
}
