//! Integration tests for task endpoints: project-scoped listing,
//! explicit status updates, and ownership enforcement

mod common;

use axum::http::StatusCode;
use serde_json::json;

/// Register a user, create a project, return (token, project id)
async fn setup_project(app: &common::TestApp, prefix: &str) -> (String, String) {
    let token = app
        .register_and_login(&common::TestApp::unique_email(prefix), "A", "pw")
        .await;
    let (status, response) = app
        .post_authed(
            "/api/v1/projects",
            &token,
            &json!({ "name": "Task host" }).to_string(),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let project: serde_json::Value = serde_json::from_str(&response).unwrap();
    (token, project["id"].as_str().unwrap().to_string())
}

async fn create_task(
    app: &common::TestApp,
    token: &str,
    project: &str,
    name: &str,
) -> serde_json::Value {
    let body = json!({ "name": name, "project": project });
    let (status, response) = app
        .post_authed("/api/v1/tasks", token, &body.to_string())
        .await;
    assert_eq!(status, StatusCode::CREATED);
    serde_json::from_str(&response).unwrap()
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_new_task_defaults_to_pending_status() {
    let app = common::TestApp::new().await;
    let (token, project) = setup_project(&app, "task_new").await;

    let task = create_task(&app, &token, &project, "Write tests").await;
    assert_eq!(task["status"], false);
    assert_eq!(task["project"].as_str().unwrap(), project);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_listing_is_scoped_to_project() {
    let app = common::TestApp::new().await;
    let (token, project_a) = setup_project(&app, "task_scope").await;

    // Second project for the same caller
    let (status, response) = app
        .post_authed(
            "/api/v1/projects",
            &token,
            &json!({ "name": "Other host" }).to_string(),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let project_b: serde_json::Value = serde_json::from_str(&response).unwrap();
    let project_b = project_b["id"].as_str().unwrap();

    let in_a = create_task(&app, &token, &project_a, "In A").await;
    create_task(&app, &token, project_b, "In B").await;

    let (status, response) = app
        .get_authed(&format!("/api/v1/tasks?project={}", project_a), &token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let tasks: Vec<serde_json::Value> = serde_json::from_str(&response).unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"], in_a["id"]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_applies_explicit_status() {
    let app = common::TestApp::new().await;
    let (token, project) = setup_project(&app, "task_status").await;

    let task = create_task(&app, &token, &project, "Flip me").await;
    let id = task["id"].as_str().unwrap();

    // Status alone: name retains its stored value
    let (status, response) = app
        .put_authed(
            &format!("/api/v1/tasks/{}", id),
            &token,
            &json!({ "status": true }).to_string(),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let updated: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(updated["status"], true);
    assert_eq!(updated["name"], "Flip me");

    // Name and status together
    let (status, response) = app
        .put_authed(
            &format!("/api/v1/tasks/{}", id),
            &token,
            &json!({ "name": "Flipped", "status": false }).to_string(),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let updated: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(updated["status"], false);
    assert_eq!(updated["name"], "Flipped");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_by_non_creator_is_forbidden() {
    let app = common::TestApp::new().await;
    let (token_a, project) = setup_project(&app, "task_owner").await;
    let token_b = app
        .register_and_login(&common::TestApp::unique_email("task_intruder"), "B", "pw")
        .await;

    let task = create_task(&app, &token_a, &project, "A's task").await;
    let id = task["id"].as_str().unwrap();

    let (status, _) = app
        .put_authed(
            &format!("/api/v1/tasks/{}", id),
            &token_b,
            &json!({ "status": true }).to_string(),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .delete_authed(&format!("/api/v1/tasks/{}", id), &token_b)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Unchanged and still present for A
    let (_, response) = app
        .get_authed(&format!("/api/v1/tasks?project={}", project), &token_a)
        .await;
    let tasks: Vec<serde_json::Value> = serde_json::from_str(&response).unwrap();
    let found = tasks.iter().find(|t| t["id"] == task["id"]).unwrap();
    assert_eq!(found["status"], false);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_by_creator_removes_task() {
    let app = common::TestApp::new().await;
    let (token, project) = setup_project(&app, "task_del").await;

    let task = create_task(&app, &token, &project, "Done soon").await;
    let id = task["id"].as_str().unwrap();

    let (status, _) = app
        .delete_authed(&format!("/api/v1/tasks/{}", id), &token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, response) = app
        .get_authed(&format!("/api/v1/tasks?project={}", project), &token)
        .await;
    let tasks: Vec<serde_json::Value> = serde_json::from_str(&response).unwrap();
    assert!(!tasks.iter().any(|t| t["id"] == task["id"]));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_and_delete_unknown_id_not_found() {
    let app = common::TestApp::new().await;
    let (token, _project) = setup_project(&app, "task_nf").await;

    let missing = uuid::Uuid::new_v4();

    let (status, _) = app
        .put_authed(
            &format!("/api/v1/tasks/{}", missing),
            &token,
            &json!({ "status": true }).to_string(),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .delete_authed(&format!("/api/v1/tasks/{}", missing), &token)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
