//! Query builder API handlers
//!
//! The form UI's lifecycle as JSON endpoints: fetch metadata, preview the
//! assembled JQL, run the query, export the results. Every handler builds
//! its QuerySpec fresh from the request body and treats the assembled JQL
//! as an opaque string.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use jq_client::models::Project;
use jq_jql::QuerySpec;
use jq_results::row::IssueRow;
use jq_results::{format_csv, row::to_rows};

use crate::error::ApiResult;
use crate::state::AppState;

/// Selectable option for the project picker
#[derive(Debug, Serialize)]
pub struct ProjectOption {
    pub key: String,
    pub name: String,
}

impl From<Project> for ProjectOption {
    fn from(project: Project) -> Self {
        Self {
            key: project.key,
            name: project.name,
        }
    }
}

/// Everything the query form needs to render its pickers
#[derive(Debug, Serialize)]
pub struct MetadataResponse {
    pub projects: Vec<ProjectOption>,
    pub issue_types: Vec<String>,
    pub statuses: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ComponentsResponse {
    pub components: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub jql: String,
}

/// Request body for run and export
#[derive(Debug, Deserialize)]
pub struct RunRequest {
    pub spec: QuerySpec,
    #[serde(default)]
    pub max_results: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct RunResponse {
    pub jql: String,
    pub total: usize,
    pub rows: Vec<IssueRow>,
}

/// GET /api/metadata
pub async fn metadata(State(state): State<Arc<AppState>>) -> ApiResult<Json<MetadataResponse>> {
    let source = state.metadata()?;
    let projects = source.projects().await?;
    let issue_types = source.issue_types().await?;
    let statuses = source.statuses().await?;

    Ok(Json(MetadataResponse {
        projects: projects.into_iter().map(ProjectOption::from).collect(),
        issue_types,
        statuses,
    }))
}

/// GET /api/projects/{key}/components
pub async fn components(
    State(state): State<Arc<AppState>>,
    Path(project_key): Path<String>,
) -> ApiResult<Json<ComponentsResponse>> {
    let components = state.metadata()?.project_components(&project_key).await?;
    Ok(Json(ComponentsResponse { components }))
}

/// POST /api/query/preview
///
/// Pure; works without a Jira connection.
pub async fn preview(Json(spec): Json<QuerySpec>) -> Json<PreviewResponse> {
    let jql = spec.to_jql();
    debug!(%jql, "assembled preview");
    Json(PreviewResponse { jql })
}

/// POST /api/query/run
pub async fn run(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RunRequest>,
) -> ApiResult<Json<RunResponse>> {
    let jql = request.spec.to_jql();
    let cap = request
        .max_results
        .unwrap_or(state.config.jira.max_results);

    let issues = state.search()?.search(&jql, cap).await?;
    let rows = to_rows(issues);

    Ok(Json(RunResponse {
        jql,
        total: rows.len(),
        rows,
    }))
}

/// POST /api/query/export
pub async fn export(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RunRequest>,
) -> ApiResult<impl IntoResponse> {
    let jql = request.spec.to_jql();
    let cap = request
        .max_results
        .unwrap_or(state.config.jira.max_results);

    let issues = state.search()?.search(&jql, cap).await?;
    let csv = format_csv(&to_rows(issues));

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"jira_results.csv\"",
            ),
        ],
        csv,
    ))
}
