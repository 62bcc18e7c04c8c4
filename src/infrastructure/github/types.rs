/// Request and response bodies for the GitHub REST and GraphQL APIs
use serde::{Deserialize, Serialize};

use crate::domain::errors::{GitHubApiError, TrackerResult};
use crate::domain::models::{CreatedIssue, LabelDefinition, ProjectBoard};

/// Body for label create and update calls
#[derive(Debug, Clone, Serialize)]
pub struct LabelRequest<'a> {
    pub name: &'a str,
    pub color: &'a str,
    pub description: &'a str,
}

impl<'a> From<&'a LabelDefinition> for LabelRequest<'a> {
    fn from(label: &'a LabelDefinition) -> Self {
        Self {
            name: label.name,
            color: label.color,
            description: label.description,
        }
    }
}

/// Body for issue creation
#[derive(Debug, Clone, Serialize)]
pub struct IssueRequest<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub labels: &'a [String],
}

/// Body for comment creation
#[derive(Debug, Clone, Serialize)]
pub struct CommentRequest<'a> {
    pub body: &'a str,
}

/// Body for issue state changes
#[derive(Debug, Clone, Serialize)]
pub struct IssueStateRequest {
    pub state: &'static str,
}

impl IssueStateRequest {
    pub const fn closed() -> Self {
        Self { state: "closed" }
    }
}

/// Issue fields returned by a successful create
#[derive(Debug, Clone, Deserialize)]
pub struct IssueResponse {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub html_url: String,
}

impl From<IssueResponse> for CreatedIssue {
    fn from(issue: IssueResponse) -> Self {
        Self {
            number: issue.number,
            title: issue.title,
            html_url: issue.html_url,
        }
    }
}

/// Outgoing GraphQL document with variables
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: serde_json::Value,
}

/// GraphQL envelope; both halves may be present at once
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

impl<T> GraphQlResponse<T> {
    /// Data when there are no errors, otherwise the joined error messages.
    pub fn into_data(self) -> TrackerResult<T> {
        if !self.errors.is_empty() {
            let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
            return Err(GitHubApiError::GraphQl(messages.join("; ")));
        }
        self.data
            .ok_or_else(|| GitHubApiError::InvalidResponse("missing `data`".to_string()))
    }
}

pub const OWNER_ID_QUERY: &str = r"
query($login: String!) {
  repositoryOwner(login: $login) {
    id
  }
}
";

pub const CREATE_PROJECT_MUTATION: &str = r"
mutation($ownerId: ID!, $title: String!) {
  createProjectV2(input: {ownerId: $ownerId, title: $title}) {
    projectV2 {
      id
      number
      title
      url
    }
  }
}
";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerIdData {
    pub repository_owner: Option<NodeId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeId {
    pub id: Option<String>,
}

impl OwnerIdData {
    pub fn owner_id(self) -> TrackerResult<String> {
        self.repository_owner
            .and_then(|owner| owner.id)
            .ok_or_else(|| {
                GitHubApiError::InvalidResponse("missing `repositoryOwner.id`".to_string())
            })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectData {
    pub create_project_v2: Option<CreateProjectPayload>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectPayload {
    pub project_v2: Option<ProjectNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectNode {
    pub id: Option<String>,
    pub number: Option<u64>,
    pub title: Option<String>,
    pub url: Option<String>,
}

impl CreateProjectData {
    pub fn project(self) -> TrackerResult<ProjectBoard> {
        let missing = |field: &str| GitHubApiError::InvalidResponse(format!("missing `{field}`"));
        let node = self
            .create_project_v2
            .ok_or_else(|| missing("createProjectV2"))?
            .project_v2
            .ok_or_else(|| missing("createProjectV2.projectV2"))?;
        Ok(ProjectBoard {
            id: node.id.ok_or_else(|| missing("projectV2.id"))?,
            number: node.number.ok_or_else(|| missing("projectV2.number"))?,
            title: node.title.ok_or_else(|| missing("projectV2.title"))?,
            url: node.url.ok_or_else(|| missing("projectV2.url"))?,
        })
    }
}
