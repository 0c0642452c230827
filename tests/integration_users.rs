#![allow(clippy::unwrap_used, clippy::panic, clippy::todo, clippy::missing_panics_doc, clippy::must_use_candidate, missing_debug_implementations, clippy::clone_on_ref_ptr, clippy::items_after_statements, unreachable_pub, clippy::print_stdout, clippy::similar_names)]
use reqwest::StatusCode;
use serde_json::json;

mod common;

// An id the sequence will never hand out during a test run.
const MISSING_ID: i64 = i64::MAX;

#[tokio::test]
async fn test_list_users() {
    let app = common::TestApp::spawn().await;
    let username1 = common::generate_username("testuser1");
    let username2 = common::generate_username("testuser2");
    app.create_user(&username1).await;
    app.create_user(&username2).await;

    let resp = app.client.get(format!("{}/users/", app.server_url)).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = resp.json().await.unwrap();
    let usernames: Vec<&str> =
        body["results"].as_array().unwrap().iter().map(|u| u["username"].as_str().unwrap()).collect();
    assert!(usernames.contains(&username1.as_str()));
    assert!(usernames.contains(&username2.as_str()));
}

#[tokio::test]
async fn test_list_users_is_ordered_by_id() {
    let app = common::TestApp::spawn().await;
    app.create_user(&common::generate_username("user")).await;
    app.create_user(&common::generate_username("user")).await;

    let resp = app.client.get(format!("{}/users/", app.server_url)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = resp.json().await.unwrap();
    let ids: Vec<i64> = body["results"].as_array().unwrap().iter().map(|u| u["id"].as_i64().unwrap()).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[tokio::test]
async fn test_retrieve_user() {
    let app = common::TestApp::spawn().await;
    let username = common::generate_username("testuser1");
    let id = app.create_user(&username).await;

    let resp = app.client.get(format!("{}/users/{id}/", app.server_url)).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["id"].as_i64().unwrap(), id);
    assert_eq!(body["username"].as_str().unwrap(), username);
}

#[tokio::test]
async fn test_retrieve_wrong_user() {
    let app = common::TestApp::spawn().await;

    let resp = app.client.get(format!("{}/users/{MISSING_ID}/", app.server_url)).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Not found");
}

#[tokio::test]
async fn test_create_user() {
    let app = common::TestApp::spawn().await;
    let username = common::generate_username("newuser");

    let resp = app
        .client
        .post(format!("{}/users/", app.server_url))
        .json(&json!({ "username": username }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = resp.json().await.unwrap();
    let id = body["id"].as_i64().unwrap();
    assert_eq!(body["username"].as_str().unwrap(), username);

    // The new record is retrievable under its assigned id.
    let resp = app.client.get(format!("{}/users/{id}/", app.server_url)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["username"].as_str().unwrap(), username);
}

#[tokio::test]
async fn test_create_user_assigns_fresh_ids() {
    let app = common::TestApp::spawn().await;
    let first = app.create_user(&common::generate_username("user")).await;
    let second = app.create_user(&common::generate_username("user")).await;

    assert_ne!(first, second);
    assert!(second > first);
}

#[tokio::test]
async fn test_create_user_missing_username() {
    let app = common::TestApp::spawn().await;

    let resp =
        app.client.post(format!("{}/users/", app.server_url)).json(&json!({})).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["username"][0], "This field is required.");
}

#[tokio::test]
async fn test_create_user_blank_username() {
    let app = common::TestApp::spawn().await;

    let resp = app
        .client
        .post(format!("{}/users/", app.server_url))
        .json(&json!({ "username": "   " }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["username"][0], "This field may not be blank.");
}

#[tokio::test]
async fn test_create_user_duplicate_username() {
    let app = common::TestApp::spawn().await;
    let username = common::generate_username("taken");
    app.create_user(&username).await;

    let resp = app
        .client
        .post(format!("{}/users/", app.server_url))
        .json(&json!({ "username": username }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["username"][0], "A user with that username already exists.");
}

#[tokio::test]
async fn test_update_user() {
    let app = common::TestApp::spawn().await;
    let id = app.create_user(&common::generate_username("testuser1")).await;
    let updated = common::generate_username("updateduser");

    let resp = app
        .client
        .put(format!("{}/users/{id}/", app.server_url))
        .json(&json!({ "username": updated }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["id"].as_i64().unwrap(), id);
    assert_eq!(body["username"].as_str().unwrap(), updated);

    // The change is visible on the next retrieve.
    let resp = app.client.get(format!("{}/users/{id}/", app.server_url)).send().await.unwrap();
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["username"].as_str().unwrap(), updated);
}

#[tokio::test]
async fn test_update_wrong_user() {
    let app = common::TestApp::spawn().await;

    let resp = app
        .client
        .put(format!("{}/users/{MISSING_ID}/", app.server_url))
        .json(&json!({ "username": common::generate_username("ghost") }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_user_duplicate_username() {
    let app = common::TestApp::spawn().await;
    let taken = common::generate_username("taken");
    app.create_user(&taken).await;
    let id = app.create_user(&common::generate_username("other")).await;

    let resp = app
        .client
        .put(format!("{}/users/{id}/", app.server_url))
        .json(&json!({ "username": taken }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["username"][0], "A user with that username already exists.");
}

#[tokio::test]
async fn test_update_user_missing_username() {
    let app = common::TestApp::spawn().await;
    let id = app.create_user(&common::generate_username("user")).await;

    let resp =
        app.client.put(format!("{}/users/{id}/", app.server_url)).json(&json!({})).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["username"][0], "This field is required.");
}

#[tokio::test]
async fn test_delete_user() {
    let app = common::TestApp::spawn().await;
    let id = app.create_user(&common::generate_username("testuser1")).await;

    let resp = app.client.delete(format!("{}/users/{id}/", app.server_url)).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(resp.content_length().unwrap_or(0) == 0);

    let resp = app.client.get(format!("{}/users/{id}/", app.server_url)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_wrong_user() {
    let app = common::TestApp::spawn().await;

    let resp = app.client.delete(format!("{}/users/{MISSING_ID}/", app.server_url)).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
