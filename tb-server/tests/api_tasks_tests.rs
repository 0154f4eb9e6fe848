//! Integration tests for task API handlers
mod common;

use crate::common::{create_test_app_state, create_test_sprint, create_test_task};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use tb_server::build_router;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_list_tasks_empty() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/api/tasks")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["count"], 0);
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_task_lands_in_backlog() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let request = json_request(
        "POST",
        "/api/tasks",
        json!({ "title": "Write release notes", "dueDate": 1767225600 }),
    );
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["title"], "Write release notes");
    assert_eq!(json["data"]["status"], "pending");
    assert_eq!(json["data"]["color"], "#4A90E2");
    assert_eq!(json["data"]["dueDate"], 1767225600);
    let task_id = json["data"]["id"].as_str().unwrap().to_string();

    // The new task is immediately visible in the backlog
    let request = Request::builder()
        .method("GET")
        .uri("/api/backlog")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let tasks = json["data"]["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"], task_id);
}

#[tokio::test]
async fn test_create_task_missing_fields_collects_errors() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let request = json_request("POST", "/api/tasks", json!({}));
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    let errors = json["errors"].as_array().unwrap();
    let fields: Vec<&str> = errors
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"title"));
    assert!(fields.contains(&"dueDate"));

    // Nothing was persisted
    let request = Request::builder()
        .method("GET")
        .uri("/api/tasks")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["count"], 0);
}

#[tokio::test]
async fn test_create_task_rejects_unknown_status() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let request = json_request(
        "POST",
        "/api/tasks",
        json!({ "title": "T", "dueDate": 1767225600, "status": "blocked" }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let errors = json["errors"].as_array().unwrap();
    assert_eq!(errors[0]["field"], "status");
}

#[tokio::test]
async fn test_get_task_success() {
    let state = create_test_app_state().await;
    let task_id = create_test_task(&state.pool, "Fix login", "in-progress", 1767225600).await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/tasks/{}", task_id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["id"], task_id.to_string());
    assert_eq!(json["data"]["title"], "Fix login");
    assert_eq!(json["data"]["status"], "in-progress");
}

#[tokio::test]
async fn test_get_task_not_found() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let fake_id = Uuid::new_v4();
    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/tasks/{}", fake_id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_get_task_invalid_uuid() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/api/tasks/not-a-uuid")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["errors"][0]["field"], "id");
}

#[tokio::test]
async fn test_list_tasks_filters_by_status() {
    let state = create_test_app_state().await;
    create_test_task(&state.pool, "Done one", "done", 100).await;
    create_test_task(&state.pool, "Pending one", "pending", 200).await;
    create_test_task(&state.pool, "Done two", "done", 300).await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/api/tasks?status=done")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["count"], 2);
    for task in json["data"].as_array().unwrap() {
        assert_eq!(task["status"], "done");
    }
}

#[tokio::test]
async fn test_list_tasks_ignores_unknown_status_filter() {
    let state = create_test_app_state().await;
    create_test_task(&state.pool, "Done one", "done", 100).await;
    create_test_task(&state.pool, "Pending one", "pending", 200).await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/api/tasks?status=bogus")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    // Unknown filter value means no filter
    let json = body_json(response).await;
    assert_eq!(json["count"], 2);
}

#[tokio::test]
async fn test_list_tasks_sorted_by_due_date() {
    let state = create_test_app_state().await;
    create_test_task(&state.pool, "Later", "pending", 3000).await;
    create_test_task(&state.pool, "Sooner", "pending", 1000).await;
    create_test_task(&state.pool, "Middle", "pending", 2000).await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/api/tasks?sortByDueDate=true")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let due_dates: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["dueDate"].as_i64().unwrap())
        .collect();
    assert_eq!(due_dates, vec![1000, 2000, 3000]);
}

#[tokio::test]
async fn test_list_tasks_filtered_and_sorted_together() {
    let state = create_test_app_state().await;
    create_test_task(&state.pool, "Done late", "done", 3000).await;
    create_test_task(&state.pool, "Pending", "pending", 500).await;
    create_test_task(&state.pool, "Done early", "done", 1000).await;
    create_test_task(&state.pool, "Done middle", "done", 2000).await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/api/tasks?status=done&sortByDueDate=true")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    // Only done tasks, non-decreasing by due date
    let json = body_json(response).await;
    assert_eq!(json["count"], 3);
    let tasks = json["data"].as_array().unwrap();
    for task in tasks {
        assert_eq!(task["status"], "done");
    }
    let due_dates: Vec<i64> = tasks.iter().map(|t| t["dueDate"].as_i64().unwrap()).collect();
    assert_eq!(due_dates, vec![1000, 2000, 3000]);
}

#[tokio::test]
async fn test_update_task_partial() {
    let state = create_test_app_state().await;
    let task_id = create_test_task(&state.pool, "Original", "pending", 1767225600).await;
    let app = build_router(state.clone());

    let request = json_request(
        "PUT",
        &format!("/api/tasks/{}", task_id),
        json!({ "status": "done" }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    // Only the supplied field changed
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "done");
    assert_eq!(json["data"]["title"], "Original");
    assert_eq!(json["data"]["dueDate"], 1767225600);
}

#[tokio::test]
async fn test_update_task_rejects_invalid_status() {
    let state = create_test_app_state().await;
    let task_id = create_test_task(&state.pool, "Original", "pending", 1767225600).await;
    let app = build_router(state.clone());

    let request = json_request(
        "PUT",
        &format!("/api/tasks/{}", task_id),
        json!({ "status": "archived" }),
    );
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // The stored task is unchanged
    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/tasks/{}", task_id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "pending");
}

#[tokio::test]
async fn test_update_task_not_found() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let request = json_request(
        "PUT",
        &format!("/api/tasks/{}", Uuid::new_v4()),
        json!({ "title": "New" }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_task_in_sprint_is_refused() {
    let state = create_test_app_state().await;
    let task_id = create_test_task(&state.pool, "Assigned", "pending", 100).await;
    let sprint_id = create_test_sprint(&state.pool, "Sprint 1", 0, 1000).await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/sprints/{}/add-task/{}", sprint_id, task_id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/tasks/{}", task_id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("sprint"));

    // The task survives unchanged
    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/tasks/{}", task_id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_delete_unassigned_task_removes_backlog_reference() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let request = json_request(
        "POST",
        "/api/tasks",
        json!({ "title": "Short lived", "dueDate": 100 }),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    let json = body_json(response).await;
    let task_id = json["data"]["id"].as_str().unwrap().to_string();

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/tasks/{}", task_id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    // Gone from the backlog as well
    let request = Request::builder()
        .method("GET")
        .uri("/api/backlog")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["data"]["tasks"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_delete_task_not_found() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/tasks/{}", Uuid::new_v4()))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
