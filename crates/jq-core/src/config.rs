//! Configuration types and loading
//!
//! Connection settings for the Jira instance and the local HTTP server,
//! loaded from environment variables over sensible defaults.

use serde::{Deserialize, Serialize};

use crate::error::{JqError, JqResult};

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Jira connection configuration
    pub jira: JiraConfig,

    /// Local HTTP server configuration
    pub server: ServerConfig,
}

/// Jira instance connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JiraConfig {
    /// Base URL of the Jira instance (e.g. `https://your-domain.atlassian.net`)
    pub base_url: String,
    /// Account email used for basic auth
    pub email: String,
    /// API token used for basic auth
    pub api_token: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// Default result-size cap for searches
    pub max_results: u32,
}

impl Default for JiraConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            email: String::new(),
            api_token: String::new(),
            timeout_seconds: 30,
            max_results: 200,
        }
    }
}

impl JiraConfig {
    /// Check that enough is configured to attempt a connection
    pub fn has_credentials(&self) -> bool {
        !self.base_url.is_empty() && !self.email.is_empty() && !self.api_token.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> JqResult<Self> {
        let mut config = Self::default();

        // Jira connection
        if let Ok(url) = std::env::var("JIRA_BASE_URL") {
            config.jira.base_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(email) = std::env::var("JIRA_EMAIL") {
            config.jira.email = email;
        }
        if let Ok(token) = std::env::var("JIRA_API_TOKEN") {
            config.jira.api_token = token;
        }
        if let Ok(timeout) = std::env::var("JIRA_TIMEOUT_SECONDS") {
            config.jira.timeout_seconds = timeout.parse().unwrap_or(30);
        }
        if let Ok(max) = std::env::var("JIRA_MAX_RESULTS") {
            config.jira.max_results = max.parse().unwrap_or(200);
        }

        // Server
        if let Ok(host) = std::env::var("HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| JqError::config(format!("invalid PORT value: {port}")))?;
        }

        Ok(config)
    }

    /// Get the local server address
    pub fn server_addr(&self) -> std::net::SocketAddr {
        use std::net::SocketAddr;
        let ip: std::net::IpAddr = self.server.host.parse().unwrap_or([0, 0, 0, 0].into());
        SocketAddr::new(ip, self.server.port)
    }
}
