//! Integration tests for the GitHub API client
//!
//! Every test points the client at a mockito server and checks both the
//! request the client sends and how it classifies the response.

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

use tracker_sync::domain::catalog::LABELS;
use tracker_sync::domain::errors::GitHubApiError;
use tracker_sync::domain::models::{LabelDefinition, LabelSyncAction};
use tracker_sync::domain::ports::IssueTracker;
use tracker_sync::infrastructure::credentials::{GitHubCredentials, Token};
use tracker_sync::infrastructure::github::{GitHubClient, GitHubClientConfig};

const LABELS_PATH: &str = "/repos/octocat/devmet-app/labels";
const ISSUES_PATH: &str = "/repos/octocat/devmet-app/issues";

fn client_for(api_url: &str, graphql_url: &str) -> GitHubClient {
    GitHubClient::new(GitHubClientConfig {
        credentials: GitHubCredentials {
            token: Token::new("ghp_test_token"),
            owner: "octocat".to_string(),
        },
        repo: "devmet-app".to_string(),
        api_url: api_url.to_string(),
        graphql_url: graphql_url.to_string(),
        timeout_secs: 5,
    })
    .expect("Failed to create client")
}

fn client(server: &ServerGuard) -> GitHubClient {
    client_for(&server.url(), &format!("{}/graphql", server.url()))
}

fn label_body(label: &LabelDefinition) -> serde_json::Value {
    json!({
        "name": label.name,
        "color": label.color,
        "description": label.description,
    })
}

#[tokio::test]
async fn test_create_label_sends_auth_headers() {
    let mut server = Server::new_async().await;
    let label = LABELS[0];
    let mock = server
        .mock("POST", LABELS_PATH)
        .match_header("authorization", "token ghp_test_token")
        .match_header("accept", "application/vnd.github.v3+json")
        .match_header("user-agent", Matcher::Regex("^tracker-sync/".to_string()))
        .match_body(Matcher::Json(label_body(&label)))
        .with_status(201)
        .with_body(r#"{"name":"P0-Critical"}"#)
        .create_async()
        .await;

    let action = client(&server).create_or_update_label(&label).await.unwrap();

    assert_eq!(action, LabelSyncAction::Created);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_existing_label_is_patched_once_on_422() {
    let mut server = Server::new_async().await;
    let label = LABELS[0];
    let post = server
        .mock("POST", LABELS_PATH)
        .with_status(422)
        .with_body(r#"{"message":"Validation Failed","errors":[{"code":"already_exists"}]}"#)
        .expect(1)
        .create_async()
        .await;
    let patch = server
        .mock("PATCH", "/repos/octocat/devmet-app/labels/P0-Critical")
        .match_body(Matcher::Json(label_body(&label)))
        .with_status(200)
        .with_body(r#"{"name":"P0-Critical"}"#)
        .expect(1)
        .create_async()
        .await;

    let action = client(&server).create_or_update_label(&label).await.unwrap();

    assert_eq!(action, LabelSyncAction::Updated);
    post.assert_async().await;
    patch.assert_async().await;
}

#[tokio::test]
async fn test_existing_label_is_patched_on_409() {
    let mut server = Server::new_async().await;
    let label = LabelDefinition {
        name: "good first issue",
        color: "7057ff",
        description: "Good for newcomers",
    };
    let post = server
        .mock("POST", LABELS_PATH)
        .with_status(409)
        .expect(1)
        .create_async()
        .await;
    let patch = server
        .mock("PATCH", "/repos/octocat/devmet-app/labels/good%20first%20issue")
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let action = client(&server).create_or_update_label(&label).await.unwrap();

    assert_eq!(action, LabelSyncAction::Updated);
    post.assert_async().await;
    patch.assert_async().await;
}

#[tokio::test]
async fn test_failed_label_update_is_rejected() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", LABELS_PATH)
        .with_status(422)
        .create_async()
        .await;
    server
        .mock("PATCH", Matcher::Regex("^/repos/octocat/devmet-app/labels/".to_string()))
        .with_status(403)
        .with_body(r#"{"message":"Must have admin rights"}"#)
        .create_async()
        .await;

    let err = client(&server)
        .create_or_update_label(&LABELS[1])
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert_eq!(err.summary(), "403");
}

#[tokio::test]
async fn test_other_label_status_is_not_retried_as_update() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", LABELS_PATH)
        .with_status(401)
        .with_body(r#"{"message":"Bad credentials"}"#)
        .create_async()
        .await;
    let patch = server
        .mock("PATCH", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let err = client(&server)
        .create_or_update_label(&LABELS[0])
        .await
        .unwrap_err();

    assert!(matches!(err, GitHubApiError::Rejected { status: 401, .. }));
    patch.assert_async().await;
}

#[tokio::test]
async fn test_create_issue_parses_response() {
    let mut server = Server::new_async().await;
    let labels = vec!["P0-Critical".to_string(), "feature".to_string()];
    let mock = server
        .mock("POST", ISSUES_PATH)
        .match_body(Matcher::Json(json!({
            "title": "[TASK-007] Create Configuration Management",
            "body": "## Description",
            "labels": ["P0-Critical", "feature"],
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "number": 12,
                "title": "[TASK-007] Create Configuration Management",
                "html_url": "https://github.com/octocat/devmet-app/issues/12",
                "state": "open",
            })
            .to_string(),
        )
        .create_async()
        .await;

    let issue = client(&server)
        .create_issue(
            "[TASK-007] Create Configuration Management",
            "## Description",
            &labels,
        )
        .await
        .unwrap();

    assert_eq!(issue.number, 12);
    assert_eq!(issue.html_url, "https://github.com/octocat/devmet-app/issues/12");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_issue_failure_carries_body() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", ISSUES_PATH)
        .with_status(500)
        .with_body(r#"{"message":"Server Error"}"#)
        .create_async()
        .await;

    let err = client(&server)
        .create_issue("title", "body", &[])
        .await
        .unwrap_err();

    match err {
        GitHubApiError::Rejected { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, r#"{"message":"Server Error"}"#);
        }
        other => panic!("Expected Rejected error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_issue_with_unexpected_body_is_invalid_response() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", ISSUES_PATH)
        .with_status(201)
        .with_body("not json")
        .create_async()
        .await;

    let err = client(&server)
        .create_issue("title", "body", &[])
        .await
        .unwrap_err();

    assert!(matches!(err, GitHubApiError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_add_comment_and_close() {
    let mut server = Server::new_async().await;
    let comment = server
        .mock("POST", "/repos/octocat/devmet-app/issues/7/comments")
        .match_body(Matcher::Json(json!({ "body": "Done already" })))
        .with_status(201)
        .with_body("{}")
        .create_async()
        .await;
    let close = server
        .mock("PATCH", "/repos/octocat/devmet-app/issues/7")
        .match_body(Matcher::Json(json!({ "state": "closed" })))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = client(&server);
    client.add_comment(7, "Done already").await.unwrap();
    client.close_issue(7).await.unwrap();

    comment.assert_async().await;
    close.assert_async().await;
}

#[tokio::test]
async fn test_close_missing_issue_is_rejected() {
    let mut server = Server::new_async().await;
    server
        .mock("PATCH", "/repos/octocat/devmet-app/issues/99")
        .with_status(404)
        .with_body(r#"{"message":"Not Found"}"#)
        .create_async()
        .await;

    let err = client(&server).close_issue(99).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_create_project_board_two_steps() {
    let mut server = Server::new_async().await;
    let owner = server
        .mock("POST", "/graphql")
        .match_body(Matcher::PartialJson(json!({ "variables": { "login": "octocat" } })))
        .with_status(200)
        .with_body(r#"{"data":{"repositoryOwner":{"id":"U_kgDOowner"}}}"#)
        .expect(1)
        .create_async()
        .await;
    let create = server
        .mock("POST", "/graphql")
        .match_body(Matcher::PartialJson(json!({
            "variables": { "ownerId": "U_kgDOowner", "title": "DevMetrics Development" }
        })))
        .with_status(200)
        .with_body(
            json!({
                "data": {
                    "createProjectV2": {
                        "projectV2": {
                            "id": "PVT_kwHOproject",
                            "number": 3,
                            "title": "DevMetrics Development",
                            "url": "https://github.com/users/octocat/projects/3"
                        }
                    }
                }
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let board = client(&server)
        .create_project_board("DevMetrics Development")
        .await
        .unwrap();

    assert_eq!(board.id, "PVT_kwHOproject");
    assert_eq!(board.number, 3);
    assert_eq!(board.url, "https://github.com/users/octocat/projects/3");
    owner.assert_async().await;
    create.assert_async().await;
}

#[tokio::test]
async fn test_project_board_missing_owner_id() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/graphql")
        .match_body(Matcher::PartialJson(json!({ "variables": { "login": "octocat" } })))
        .with_status(200)
        .with_body(r#"{"data":{"repositoryOwner":null}}"#)
        .create_async()
        .await;
    let create = server
        .mock("POST", "/graphql")
        .match_body(Matcher::Regex("createProjectV2".to_string()))
        .expect(0)
        .create_async()
        .await;

    let err = client(&server)
        .create_project_board("DevMetrics Development")
        .await
        .unwrap_err();

    assert!(matches!(err, GitHubApiError::InvalidResponse(_)));
    create.assert_async().await;
}

#[tokio::test]
async fn test_project_board_graphql_errors() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/graphql")
        .with_status(200)
        .with_body(
            r#"{"data":null,"errors":[{"message":"Could not resolve to a ProjectV2Owner"}]}"#,
        )
        .create_async()
        .await;

    let err = client(&server)
        .create_project_board("DevMetrics Development")
        .await
        .unwrap_err();

    assert!(
        matches!(err, GitHubApiError::GraphQl(ref msg) if msg.contains("ProjectV2Owner")),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn test_project_board_http_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/graphql")
        .with_status(401)
        .with_body(r#"{"message":"Bad credentials"}"#)
        .create_async()
        .await;

    let err = client(&server)
        .create_project_board("DevMetrics Development")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let client = client_for("http://127.0.0.1:1", "http://127.0.0.1:1/graphql");

    let err = client.close_issue(7).await.unwrap_err();

    assert!(matches!(err, GitHubApiError::Network(_)));
    assert!(err.summary().starts_with("Network error"));
}
