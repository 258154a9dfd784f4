//! Shared application state
//!
//! One immutable state value shared across handlers. A query spec is built
//! fresh per request; nothing about a query is retained here - the state
//! only carries configuration and the (optional) Jira connection.

use std::sync::Arc;

use jq_client::{JiraClient, MetadataSource, SearchService};
use jq_core::AppConfig;

use crate::error::{ApiError, ApiResult};

/// The Jira-facing collaborators, as trait objects so tests can mock them
pub struct JiraServices {
    pub metadata: Arc<dyn MetadataSource>,
    pub search: Arc<dyn SearchService>,
}

/// Immutable shared state for all handlers
pub struct AppState {
    pub config: AppConfig,
    jira: Option<JiraServices>,
}

impl AppState {
    /// State backed by a live Jira client
    pub fn with_client(config: AppConfig, client: JiraClient) -> Self {
        let client = Arc::new(client);
        Self {
            config,
            jira: Some(JiraServices {
                metadata: client.clone(),
                search: client,
            }),
        }
    }

    /// State with explicit collaborator implementations (used by tests)
    pub fn with_services(
        config: AppConfig,
        metadata: Arc<dyn MetadataSource>,
        search: Arc<dyn SearchService>,
    ) -> Self {
        Self {
            config,
            jira: Some(JiraServices { metadata, search }),
        }
    }

    /// State without a Jira connection; preview and health still work
    pub fn without_jira(config: AppConfig) -> Self {
        Self { config, jira: None }
    }

    pub fn is_connected(&self) -> bool {
        self.jira.is_some()
    }

    pub fn metadata(&self) -> ApiResult<&Arc<dyn MetadataSource>> {
        self.jira
            .as_ref()
            .map(|j| &j.metadata)
            .ok_or(ApiError::NotConfigured)
    }

    pub fn search(&self) -> ApiResult<&Arc<dyn SearchService>> {
        self.jira
            .as_ref()
            .map(|j| &j.search)
            .ok_or(ApiError::NotConfigured)
    }
}
