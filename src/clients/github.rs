//! GitHub REST + npm registry client

use crate::clients::HostingApi;
use crate::core::{RepositoryDescriptor, RepositoryMetadata, ScaffoldConfig, ScaffoldError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Response};
use serde_json::json;
use tracing::{debug, warn};

/// Talks to the GitHub API and checks names against the npm registry
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    api_base: String,
    registry: String,
}

impl GitHubClient {
    /// Build a client sending the configured `User-Agent` on every request
    pub fn new(config: &ScaffoldConfig) -> Result<Self, ScaffoldError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base().to_string(),
            registry: config.registry().to_string(),
        })
    }

    /// Registry document URL; scoped names keep their `@` but escape the slash
    pub fn package_url(&self, name: &str) -> String {
        format!("{}/{}", self.registry, name.replace('/', "%2f"))
    }

    pub fn repos_url(&self) -> String {
        format!("{}/user/repos", self.api_base)
    }

    pub fn repo_url(&self, full_name: &str) -> String {
        format!("{}/repos/{}", self.api_base, full_name)
    }
}

/// Return the body of a success response, or the status and body as an error
async fn expect_success(response: Response) -> Result<String, ScaffoldError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        warn!("Hosting API returned {}: {}", status, body.trim());
        return Err(ScaffoldError::RemoteApi {
            status: Some(status.as_u16()),
            body,
        });
    }
    Ok(body)
}

#[async_trait]
impl HostingApi for GitHubClient {
    async fn package_exists(&self, name: &str) -> Result<bool, ScaffoldError> {
        let url = self.package_url(name);
        debug!("HEAD {}", url);

        let response = self
            .http
            .head(&url)
            .send()
            .await
            .map_err(|e| ScaffoldError::Network(e.to_string()))?;

        debug!("Registry answered {} for {}", response.status(), name);
        Ok(response.status().is_success())
    }

    async fn create_repository(
        &self,
        name: &str,
        auth_header: &str,
    ) -> Result<RepositoryDescriptor, ScaffoldError> {
        let url = self.repos_url();
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, auth_header)
            .json(&json!({ "name": name }))
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = expect_success(response).await?;
        serde_json::from_str(&body).map_err(|e| ScaffoldError::RemoteApi {
            status: Some(status),
            body: format!("unexpected repository response ({}): {}", e, body),
        })
    }

    async fn update_repository(
        &self,
        repository: &RepositoryDescriptor,
        metadata: &RepositoryMetadata,
        auth_header: &str,
    ) -> Result<(), ScaffoldError> {
        let url = self.repo_url(&repository.full_name);
        debug!("PATCH {}", url);

        let response = self
            .http
            .patch(&url)
            .header(AUTHORIZATION, auth_header)
            .json(metadata)
            .send()
            .await?;

        expect_success(response).await.map(|_| ())
    }
}
