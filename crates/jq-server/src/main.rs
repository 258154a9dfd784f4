//! Jira Query Builder server
//!
//! HTTP surface for building and executing JQL queries: metadata for the
//! form pickers, JQL preview, query execution, CSV export.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jq_client::JiraClient;
use jq_core::AppConfig;

mod error;
mod handlers;
mod health;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    dotenvy::dotenv().ok();
    let config = AppConfig::from_env().unwrap_or_else(|e| {
        warn!("Failed to load config from env: {}, using defaults", e);
        AppConfig::default()
    });

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.server.host,
        port = config.server.port,
        "Starting Jira Query Builder"
    );

    // Connect to Jira; preview and health work without it
    let app_state = if config.jira.has_credentials() {
        match JiraClient::new(&config.jira) {
            Ok(client) => {
                info!(base_url = %config.jira.base_url, "Jira client configured");
                Arc::new(AppState::with_client(config.clone(), client))
            }
            Err(e) => {
                warn!("Failed to build Jira client: {}. Running without Jira.", e);
                Arc::new(AppState::without_jira(config.clone()))
            }
        }
    } else {
        warn!("Jira credentials not set. Running without Jira.");
        Arc::new(AppState::without_jira(config.clone()))
    };

    let app = build_router(app_state);

    let addr = config.server_addr();
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,jq_server=debug,jq_client=debug,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Build the application router
fn build_router(state: Arc<AppState>) -> Router {
    let health_routes = Router::new()
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness));

    let api_routes = Router::new()
        .route("/metadata", get(handlers::metadata))
        .route("/projects/:key/components", get(handlers::components))
        .route("/query/preview", post(handlers::preview))
        .route("/query/run", post(handlers::run))
        .route("/query/export", post(handlers::export));

    Router::new()
        .merge(health_routes)
        .nest("/api", api_routes)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use mockall::mock;
    use tower::ServiceExt;

    use jq_client::models::{Issue, IssueFields, Project, StatusRef, UserRef};
    use jq_client::{MetadataSource, SearchService};
    use jq_core::{JqError, JqResult};

    mock! {
        Meta {}

        #[async_trait]
        impl MetadataSource for Meta {
            async fn projects(&self) -> JqResult<Vec<Project>>;
            async fn project_components(&self, project_key: &str) -> JqResult<Vec<String>>;
            async fn issue_types(&self) -> JqResult<Vec<String>>;
            async fn statuses(&self) -> JqResult<Vec<String>>;
        }
    }

    mock! {
        Search {}

        #[async_trait]
        impl SearchService for Search {
            async fn search(&self, jql: &str, max_results: u32) -> JqResult<Vec<Issue>>;
        }
    }

    fn sample_issue(key: &str, assignee: Option<&str>) -> Issue {
        Issue {
            key: key.to_string(),
            fields: IssueFields {
                summary: Some("Fix login timeout".into()),
                status: Some(StatusRef {
                    name: "Open".into(),
                }),
                assignee: assignee.map(|name| UserRef {
                    display_name: name.into(),
                }),
                created: Some("2024-03-01T09:15:00.000+0000".into()),
            },
        }
    }

    fn test_app(metadata: MockMeta, search: MockSearch) -> Router {
        let state = Arc::new(AppState::with_services(
            AppConfig::default(),
            Arc::new(metadata),
            Arc::new(search),
        ));
        build_router(state)
    }

    fn unconnected_app() -> Router {
        build_router(Arc::new(AppState::without_jira(AppConfig::default())))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let response = unconnected_app()
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_reports_connection_state() {
        let response = unconnected_app()
            .oneshot(
                Request::builder()
                    .uri("/health/ready")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["jira_configured"], false);
    }

    #[tokio::test]
    async fn test_preview_assembles_jql() {
        let request = post_json(
            "/api/query/preview",
            r#"{
                "project": "OPS",
                "issue_type": ["Bug", "Task"],
                "status": ["Open"],
                "advanced": {"attachments": "has"},
                "order": {"active": true, "field": "created", "direction": "DESC"}
            }"#,
        );

        let response = unconnected_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(
            body["jql"],
            "project = \"OPS\" AND issuetype IN (\"Bug\", \"Task\") AND status = \"Open\" \
             AND attachments IS NOT EMPTY ORDER BY created DESC"
        );
    }

    #[tokio::test]
    async fn test_run_shapes_rows() {
        let metadata = MockMeta::new();
        let mut search = MockSearch::new();
        search
            .expect_search()
            .withf(|jql, cap| jql == "project = \"OPS\"" && *cap == 200)
            .returning(|_, _| Ok(vec![sample_issue("OPS-1", Some("Alex Kim")), sample_issue("OPS-2", None)]));

        let request = post_json("/api/query/run", r#"{"spec": {"project": "OPS"}}"#);
        let response = test_app(metadata, search).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["jql"], "project = \"OPS\"");
        assert_eq!(body["total"], 2);
        assert_eq!(body["rows"][0]["key"], "OPS-1");
        assert_eq!(body["rows"][0]["assignee"], "Alex Kim");
        assert_eq!(body["rows"][1]["assignee"], "Unassigned");
        assert_eq!(body["rows"][0]["created"], "2024-03-01 09:15:00");
    }

    #[tokio::test]
    async fn test_run_honors_max_results() {
        let metadata = MockMeta::new();
        let mut search = MockSearch::new();
        search
            .expect_search()
            .withf(|_, cap| *cap == 25)
            .returning(|_, _| Ok(vec![]));

        let request = post_json(
            "/api/query/run",
            r#"{"spec": {"project": "OPS"}, "max_results": 25}"#,
        );
        let response = test_app(metadata, search).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_run_without_jira_is_503() {
        let request = post_json("/api/query/run", r#"{"spec": {"project": "OPS"}}"#);
        let response = unconnected_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = body_json(response).await;
        assert_eq!(body["error"], "jira_not_configured");
    }

    #[tokio::test]
    async fn test_run_maps_unauthorized() {
        let metadata = MockMeta::new();
        let mut search = MockSearch::new();
        search
            .expect_search()
            .returning(|_, _| Err(JqError::unauthorized("token expired")));

        let request = post_json("/api/query/run", r#"{"spec": {"project": "OPS"}}"#);
        let response = test_app(metadata, search).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_export_returns_csv() {
        let metadata = MockMeta::new();
        let mut search = MockSearch::new();
        search
            .expect_search()
            .returning(|_, _| Ok(vec![sample_issue("OPS-1", Some("Alex Kim"))]));

        let request = post_json("/api/query/export", r#"{"spec": {"project": "OPS"}}"#);
        let response = test_app(metadata, search).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let csv = String::from_utf8(bytes.to_vec()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Key,Summary,Status,Assignee,Created"));
        assert_eq!(
            lines.next(),
            Some("OPS-1,Fix login timeout,Open,Alex Kim,2024-03-01 09:15:00")
        );
    }

    #[tokio::test]
    async fn test_metadata_endpoint() {
        let mut metadata = MockMeta::new();
        metadata.expect_projects().returning(|| {
            Ok(vec![Project {
                id: "10000".into(),
                key: "OPS".into(),
                name: "Operations".into(),
            }])
        });
        metadata
            .expect_issue_types()
            .returning(|| Ok(vec!["Bug".into(), "Task".into()]));
        metadata
            .expect_statuses()
            .returning(|| Ok(vec!["Open".into(), "Done".into()]));
        let search = MockSearch::new();

        let response = test_app(metadata, search)
            .oneshot(
                Request::builder()
                    .uri("/api/metadata")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["projects"][0]["key"], "OPS");
        assert_eq!(body["issue_types"], serde_json::json!(["Bug", "Task"]));
        assert_eq!(body["statuses"][1], "Done");
    }

    #[tokio::test]
    async fn test_components_endpoint() {
        let mut metadata = MockMeta::new();
        metadata
            .expect_project_components()
            .withf(|key| key == "OPS")
            .returning(|_| Ok(vec!["API".into(), "Frontend".into()]));
        let search = MockSearch::new();

        let response = test_app(metadata, search)
            .oneshot(
                Request::builder()
                    .uri("/api/projects/OPS/components")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["components"], serde_json::json!(["API", "Frontend"]));
    }
}
