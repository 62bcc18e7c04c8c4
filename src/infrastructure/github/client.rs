use async_trait::async_trait;
use reqwest::{header, Client as ReqwestClient, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use super::types::{
    CommentRequest, CreateProjectData, GraphQlRequest, GraphQlResponse, IssueRequest,
    IssueResponse, IssueStateRequest, LabelRequest, OwnerIdData, CREATE_PROJECT_MUTATION,
    OWNER_ID_QUERY,
};
use crate::domain::errors::{GitHubApiError, TrackerResult};
use crate::domain::models::{
    CreatedIssue, GitHubConfig, LabelDefinition, LabelSyncAction, ProjectBoard,
};
use crate::domain::ports::IssueTracker;
use crate::infrastructure::credentials::GitHubCredentials;

const ACCEPT_V3: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("tracker-sync/", env!("CARGO_PKG_VERSION"));

/// Configuration for the GitHub HTTP client
#[derive(Debug, Clone)]
pub struct GitHubClientConfig {
    pub credentials: GitHubCredentials,

    /// Repository name under the credentials' owner
    pub repo: String,

    /// REST API base URL
    pub api_url: String,

    /// GraphQL endpoint URL
    pub graphql_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GitHubClientConfig {
    pub fn new(credentials: GitHubCredentials, github: &GitHubConfig) -> Self {
        Self {
            credentials,
            repo: github.repo.clone(),
            api_url: github.api_url.clone(),
            graphql_url: github.graphql_url.clone(),
            timeout_secs: github.timeout_secs,
        }
    }
}

/// HTTP client for the GitHub REST and GraphQL APIs
///
/// Every method makes a single attempt. Non-success statuses come back as
/// [`GitHubApiError::Rejected`] with the response body attached.
pub struct GitHubClient {
    http_client: ReqwestClient,
    api_url: Url,
    graphql_url: Url,
    owner: String,
    repo: String,
}

impl GitHubClient {
    /// Create a new GitHub API client
    ///
    /// The token is installed as a sensitive default header so it never shows
    /// up in request debug output.
    pub fn new(config: GitHubClientConfig) -> TrackerResult<Self> {
        info!(
            "Initializing GitHub client: api_url={}, repo={}/{}, timeout={}s, token={}",
            config.api_url,
            config.credentials.owner,
            config.repo,
            config.timeout_secs,
            config.credentials.token.masked()
        );

        let mut auth = header::HeaderValue::from_str(&format!(
            "token {}",
            config.credentials.token.expose()
        ))
        .map_err(|e| GitHubApiError::InvalidRequest(format!("Invalid token: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(header::ACCEPT, header::HeaderValue::from_static(ACCEPT_V3));

        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http_client,
            api_url: parse_url(&config.api_url)?,
            graphql_url: parse_url(&config.graphql_url)?,
            owner: config.credentials.owner,
            repo: config.repo,
        })
    }

    /// `{api_url}/repos/{owner}/{repo}/{segments...}` with each segment
    /// percent-encoded.
    fn repo_url(&self, segments: &[&str]) -> TrackerResult<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|()| GitHubApiError::InvalidUrl(self.api_url.to_string()))?
            .pop_if_empty()
            .extend(["repos", self.owner.as_str(), self.repo.as_str()])
            .extend(segments);
        Ok(url)
    }

    /// Turn an unexpected response into a rejection carrying its body.
    async fn rejection(response: Response) -> GitHubApiError {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error body".to_string());

        warn!("GitHub API error ({}): {}", status, body);

        GitHubApiError::Rejected {
            status: status.as_u16(),
            body,
        }
    }

    /// POST a GraphQL document and return its `data` payload.
    async fn graphql<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> TrackerResult<T> {
        debug!("POST {}", self.graphql_url);

        let response = self
            .http_client
            .post(self.graphql_url.clone())
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(Self::rejection(response).await);
        }

        let envelope: GraphQlResponse<T> = response
            .json()
            .await
            .map_err(|e| GitHubApiError::InvalidResponse(e.to_string()))?;
        envelope.into_data()
    }
}

#[async_trait]
impl IssueTracker for GitHubClient {
    #[instrument(skip(self, label), fields(label = label.name))]
    async fn create_or_update_label(
        &self,
        label: &LabelDefinition,
    ) -> TrackerResult<LabelSyncAction> {
        let body = LabelRequest::from(label);
        let url = self.repo_url(&["labels"])?;
        debug!("POST {}", url);

        let response = self.http_client.post(url).json(&body).send().await?;

        match response.status() {
            StatusCode::CREATED => Ok(LabelSyncAction::Created),
            // GitHub answers 422 `already_exists`; 409 is accepted as the same thing.
            StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
                debug!("Label exists, updating");
                let url = self.repo_url(&["labels", label.name])?;
                debug!("PATCH {}", url);

                let response = self.http_client.patch(url).json(&body).send().await?;
                if response.status() == StatusCode::OK {
                    Ok(LabelSyncAction::Updated)
                } else {
                    Err(Self::rejection(response).await)
                }
            }
            _ => Err(Self::rejection(response).await),
        }
    }

    #[instrument(skip(self, body, labels), fields(labels = labels.len()))]
    async fn create_issue(
        &self,
        title: &str,
        body: &str,
        labels: &[String],
    ) -> TrackerResult<CreatedIssue> {
        let url = self.repo_url(&["issues"])?;
        debug!("POST {}", url);

        let response = self
            .http_client
            .post(url)
            .json(&IssueRequest {
                title,
                body,
                labels,
            })
            .send()
            .await?;

        if response.status() != StatusCode::CREATED {
            return Err(Self::rejection(response).await);
        }

        let issue: IssueResponse = response
            .json()
            .await
            .map_err(|e| GitHubApiError::InvalidResponse(e.to_string()))?;
        Ok(issue.into())
    }

    #[instrument(skip(self, body))]
    async fn add_comment(&self, issue_number: u64, body: &str) -> TrackerResult<()> {
        let number = issue_number.to_string();
        let url = self.repo_url(&["issues", &number, "comments"])?;
        debug!("POST {}", url);

        let response = self
            .http_client
            .post(url)
            .json(&CommentRequest { body })
            .send()
            .await?;

        if response.status() == StatusCode::CREATED {
            Ok(())
        } else {
            Err(Self::rejection(response).await)
        }
    }

    #[instrument(skip(self))]
    async fn close_issue(&self, issue_number: u64) -> TrackerResult<()> {
        let number = issue_number.to_string();
        let url = self.repo_url(&["issues", &number])?;
        debug!("PATCH {}", url);

        let response = self
            .http_client
            .patch(url)
            .json(&IssueStateRequest::closed())
            .send()
            .await?;

        if response.status() == StatusCode::OK {
            Ok(())
        } else {
            Err(Self::rejection(response).await)
        }
    }

    #[instrument(skip(self))]
    async fn create_project_board(&self, title: &str) -> TrackerResult<ProjectBoard> {
        let owner: OwnerIdData = self
            .graphql(OWNER_ID_QUERY, serde_json::json!({ "login": self.owner }))
            .await?;
        let owner_id = owner.owner_id()?;
        debug!(owner_id = %owner_id, "Resolved project owner");

        let created: CreateProjectData = self
            .graphql(
                CREATE_PROJECT_MUTATION,
                serde_json::json!({ "ownerId": owner_id, "title": title }),
            )
            .await?;
        created.project()
    }
}

fn parse_url(raw: &str) -> TrackerResult<Url> {
    Url::parse(raw).map_err(|e| GitHubApiError::InvalidUrl(format!("{raw}: {e}")))
}
