//! Integration tests for the weight pages.

mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;

use weightlog_core::traits::Repository;
use weightlog_core::types::WeightId;

use helpers::{FailingStore, TestApp};

fn form<'a>(date: &'a str, max: &'a str, min: &'a str) -> [(&'static str, &'a str); 3] {
    [("date", date), ("max", max), ("min", min)]
}

#[tokio::test]
async fn test_index_without_records_shows_zero_averages() {
    let app = TestApp::new();

    let response = app.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("No weights recorded yet."));
    assert!(response.body.contains("<td>0.00</td><td>0.00</td><td>0.00</td>"));
}

#[tokio::test]
async fn test_index_lists_records_with_averages() {
    let app = TestApp::new();
    app.seed("2020-11-10", 54, 52).await;
    app.seed("2020-11-09", 50, 48).await;

    let response = app.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<td>52.00</td><td>50.00</td><td>2.00</td>"));
    let first = response.body.find("2020-11-09").unwrap();
    let second = response.body.find("2020-11-10").unwrap();
    assert!(first < second, "records should be listed by date");
}

#[tokio::test]
async fn test_new_form_renders() {
    let app = TestApp::new();

    let response = app.get("/weight/new").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("action=\"/weight/insert\""));
}

#[tokio::test]
async fn test_insert_redirects_to_detail() {
    let app = TestApp::new();

    let response = app
        .post_form("/weight/insert", &form("2020-11-09", "50", "48"))
        .await;

    assert_eq!(response.status, StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.location.as_deref(), Some("/weight/1"));

    let stored = app.weights.find_by_id(WeightId(1)).await.unwrap();
    assert_eq!(stored.date, "2020-11-09");
    assert_eq!(stored.difference, 2);

    let detail = app.get("/weight/1").await;
    assert_eq!(detail.status, StatusCode::OK);
    assert!(detail.body.contains("<dd>2020-11-09</dd>"));
}

#[tokio::test]
async fn test_insert_rejects_non_numeric_values() {
    let app = TestApp::new();

    let response = app
        .post_form("/weight/insert", &form("2020-11-09", "abc", "48"))
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Please fill the max value correctly"));
    assert!(response.body.contains("value=\"abc\""));

    let response = app
        .post_form("/weight/insert", &form("2020-11-09", "50", "4.5"))
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Please fill the min value correctly"));

    assert!(app.weights.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_insert_validation_failures() {
    let app = TestApp::new();
    let cases = [
        (form("", "50", "48"), "Required date"),
        (form("2020-11-09", "0", "48"), "Required max weight"),
        (form("2020-11-09", "50", "0"), "Required min weight"),
        (
            form("2020-11-09", "48", "50"),
            "Max weight could not be smaller than min weight",
        ),
    ];

    for (fields, message) in cases {
        let response = app.post_form("/weight/insert", &fields).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{message}");
        assert!(response.body.contains(message), "{message}");
    }

    assert!(app.weights.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_insert_duplicate_date_conflicts() {
    let app = TestApp::new();
    app.seed("2020-11-09", 50, 48).await;

    let response = app
        .post_form("/weight/insert", &form(" 2020-11-09 ", "51", "49"))
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert!(response.body.contains("Weight already in the database"));
    assert_eq!(app.weights.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_insert_without_form_body_rerenders_form() {
    let app = TestApp::new();

    let response = app.post_raw("/weight/insert", None, "").await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("action=\"/weight/insert\""));
    assert!(response.body.contains("Please fill the max value correctly"));
    assert!(app.weights.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_insert_with_repeated_field_rerenders_form() {
    let app = TestApp::new();

    let response = app
        .post_raw(
            "/weight/insert",
            Some("application/x-www-form-urlencoded"),
            "date=2020-11-09&max=50&max=51&min=48",
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("action=\"/weight/insert\""));
    assert!(app.weights.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_insert_accepts_long_free_form_date() {
    let app = TestApp::new();
    let date = "2020-11-09 after the morning run, before breakfast";

    let response = app.post_form("/weight/insert", &form(date, "50", "48")).await;

    assert_eq!(response.status, StatusCode::MOVED_PERMANENTLY);
    let stored = app.weights.find_by_id(WeightId(1)).await.unwrap();
    assert_eq!(stored.date, date);
}

#[tokio::test]
async fn test_detail_bad_or_missing_id_redirects_home() {
    let app = TestApp::new();

    let response = app.get("/weight/abc").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.location.as_deref(), Some("/"));

    let response = app.get("/weight/-1").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.get("/weight/99").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.location.as_deref(), Some("/"));
}

#[tokio::test]
async fn test_edit_form_prefills_record() {
    let app = TestApp::new();
    let weight = app.seed("2020-11-09", 50, 48).await;

    let response = app.get(&format!("/weight/{}/edit", weight.id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(&format!("action=\"/weight/{}/update\"", weight.id)));
    assert!(response.body.contains("value=\"2020-11-09\""));

    let response = app.get("/weight/99/edit").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_replaces_record() {
    let app = TestApp::new();
    let weight = app.seed("2020-11-09", 50, 48).await;

    let response = app
        .post_form(
            &format!("/weight/{}/update", weight.id),
            &form("2020-11-09", "60", "55"),
        )
        .await;

    assert_eq!(response.status, StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.location, Some(format!("/weight/{}", weight.id)));

    let stored = app.weights.find_by_id(weight.id).await.unwrap();
    assert_eq!(stored.max, 60);
    assert_eq!(stored.min, 55);
    assert_eq!(stored.difference, 5);
}

#[tokio::test]
async fn test_update_with_bad_id_leaves_store_untouched() {
    let app = TestApp::new();
    let weight = app.seed("2020-11-09", 50, 48).await;

    let response = app
        .post_form("/weight/abc/update", &form("2020-11-09", "60", "55"))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.location.as_deref(), Some("/"));
    assert_eq!(app.weights.find_by_id(weight.id).await.unwrap(), weight);
}

#[tokio::test]
async fn test_update_checks_id_before_body() {
    let app = TestApp::new();
    let weight = app.seed("2020-11-09", 50, 48).await;

    let response = app.post_raw("/weight/abc/update", None, "").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.location.as_deref(), Some("/"));

    let response = app
        .post_raw(&format!("/weight/{}/update", weight.id), None, "")
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(
        response
            .body
            .contains(&format!("action=\"/weight/{}/update\"", weight.id))
    );

    assert_eq!(app.weights.find_by_id(weight.id).await.unwrap(), weight);
}

#[tokio::test]
async fn test_update_failures_rerender_edit_form() {
    let app = TestApp::new();
    let first = app.seed("2020-11-09", 50, 48).await;
    app.seed("2020-11-10", 54, 52).await;
    let path = format!("/weight/{}/update", first.id);

    let response = app.post_form(&path, &form("2020-11-09", "x", "48")).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains(&format!("action=\"{path}\"")));

    let response = app.post_form(&path, &form("2020-11-09", "40", "48")).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.contains("Max weight could not be smaller than min weight"));

    let response = app.post_form(&path, &form("2020-11-10", "50", "48")).await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    let response = app
        .post_form("/weight/99/update", &form("2020-11-12", "50", "48"))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    assert_eq!(app.weights.find_by_id(first.id).await.unwrap(), first);
}

#[tokio::test]
async fn test_delete_removes_record() {
    let app = TestApp::new();
    let weight = app.seed("2020-11-09", 50, 48).await;

    let response = app
        .post_form(&format!("/weight/{}/delete", weight.id), &[])
        .await;

    assert_eq!(response.status, StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.location.as_deref(), Some("/"));
    assert!(app.weights.find_all().await.unwrap().is_empty());

    let response = app
        .post_form(&format!("/weight/{}/delete", weight.id), &[])
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.post_form("/weight/abc/delete", &[]).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_storage_failures_are_server_errors() {
    let app = TestApp::with_store(Arc::new(FailingStore));

    let response = app.get("/").await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.body.contains("connection refused"));

    let response = app.get("/weight/1").await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);

    let response = app
        .post_form("/weight/insert", &form("2020-11-09", "50", "48"))
        .await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.body.contains("value=\"2020-11-09\""));

    let response = app
        .post_form("/weight/1/update", &form("2020-11-09", "50", "48"))
        .await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);

    let response = app.post_form("/weight/1/delete", &[]).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_oversized_form_is_rejected() {
    let app = TestApp::new();
    let date = "9".repeat(32 * 1024);

    let response = app
        .post_form("/weight/insert", &form(&date, "50", "48"))
        .await;

    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
}
