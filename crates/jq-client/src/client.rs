//! Reqwest-backed Jira REST API v3 client
//!
//! Implements both collaborator contracts with one HTTP request per
//! operation: basic auth with email + API token, JSON in and out.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

use jq_core::{JiraConfig, JqError, JqResult};

use crate::models::{
    Component, Issue, IssueType, Project, SearchRequest, SearchResponse, Status,
};
use crate::traits::{MetadataSource, SearchService};

/// Authenticated client for one Jira instance
#[derive(Debug, Clone)]
pub struct JiraClient {
    http: reqwest::Client,
    base_url: Url,
    email: String,
    api_token: String,
}

impl JiraClient {
    /// Build a client from connection settings.
    ///
    /// Fails when the base URL is absent or unparseable; credentials are
    /// not verified until the first request.
    pub fn new(config: &JiraConfig) -> JqResult<Self> {
        if config.base_url.is_empty() {
            return Err(JqError::config("JIRA_BASE_URL is not set"));
        }
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| JqError::config(format!("invalid Jira base URL: {e}")))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| JqError::transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            email: config.email.clone(),
            api_token: config.api_token.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> JqResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| JqError::config(format!("invalid endpoint path {path}: {e}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> JqResult<T> {
        let url = self.endpoint(path)?;
        debug!(%url, "GET");
        let response = self
            .http
            .get(url)
            .basic_auth(&self.email, Some(&self.api_token))
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| JqError::transport(e.to_string()))?;
        Self::decode(response).await
    }

    async fn post_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> JqResult<T> {
        let url = self.endpoint(path)?;
        debug!(%url, "POST");
        let response = self
            .http
            .post(url)
            .basic_auth(&self.email, Some(&self.api_token))
            .header(header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| JqError::transport(e.to_string()))?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> JqResult<T> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let message = response.text().await.unwrap_or_default();
            return Err(JqError::unauthorized(message));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(JqError::Api {
                status: status.as_u16(),
                message,
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| JqError::decode(e.to_string()))
    }
}

#[async_trait]
impl MetadataSource for JiraClient {
    async fn projects(&self) -> JqResult<Vec<Project>> {
        self.get_json("/rest/api/3/project").await
    }

    async fn project_components(&self, project_key: &str) -> JqResult<Vec<String>> {
        let components: Vec<Component> = self
            .get_json(&format!("/rest/api/3/project/{project_key}/components"))
            .await?;
        Ok(components.into_iter().map(|c| c.name).collect())
    }

    async fn issue_types(&self) -> JqResult<Vec<String>> {
        let types: Vec<IssueType> = self.get_json("/rest/api/3/issuetype").await?;
        Ok(types.into_iter().map(|t| t.name).collect())
    }

    async fn statuses(&self) -> JqResult<Vec<String>> {
        let statuses: Vec<Status> = self.get_json("/rest/api/3/status").await?;
        Ok(statuses.into_iter().map(|s| s.name).collect())
    }
}

#[async_trait]
impl SearchService for JiraClient {
    async fn search(&self, jql: &str, max_results: u32) -> JqResult<Vec<Issue>> {
        let request = SearchRequest::new(jql, max_results);
        let response: SearchResponse = self.post_json("/rest/api/3/search/jql", &request).await?;
        info!(jql, count = response.issues.len(), "search executed");
        Ok(response.issues)
    }
}
