use anyhow::Result;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use todo_htmx::{app, repository::TodoStore};
use tower::ServiceExt;

fn setup() -> Result<(String, Router)> {
    let tick = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_nanos();
    let path = format!("test_http_{}", tick);
    let store = TodoStore::open(&path)?;
    Ok((path, app(store)))
}
fn teardown((path, app): (String, Router)) -> Result<()> {
    drop(app);
    std::fs::remove_dir_all(path)?;
    Ok(())
}

async fn send(app: &Router, method: Method, uri: &str, form: Option<&str>) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match form {
        Some(form) => {
            builder = builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
            Body::from(form.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn root_serves_page_shell() -> Result<()> {
    let (path, app) = setup()?;
    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("htmx.org"));
    assert!(body.contains(r#"hx-get="/todos""#));
    teardown((path, app))?;
    Ok(())
}

#[tokio::test]
async fn create_toggle_delete_lifecycle() -> Result<()> {
    let (path, app) = setup()?;

    // first insert against a fresh store gets id 0
    let (status, fragment) = send(&app, Method::POST, "/todos", Some("content=buy%20milk")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(fragment.contains("buy milk"));
    assert!(fragment.contains(r#"hx-post="/todos/toggle/0""#));
    assert!(!fragment.contains("checked"));

    let (status, list) = send(&app, Method::GET, "/todos", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(list.contains("buy milk"));
    assert!(list.contains("<form"));

    let (status, fragment) = send(&app, Method::POST, "/todos/toggle/0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(fragment.contains("checked"));
    assert!(fragment.contains("buy milk"));

    let (status, body) = send(&app, Method::DELETE, "/todos/0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let (_, list) = send(&app, Method::GET, "/todos", None).await;
    assert!(!list.contains("buy milk"));

    teardown((path, app))?;
    Ok(())
}

#[tokio::test]
async fn empty_content_is_rejected_without_mutating() -> Result<()> {
    let (path, app) = setup()?;
    let (status, _) = send(&app, Method::POST, "/todos", Some("content=")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, list) = send(&app, Method::GET, "/todos", None).await;
    assert!(!list.contains("checkbox"));
    teardown((path, app))?;
    Ok(())
}

#[tokio::test]
async fn toggle_of_missing_id_is_not_found() -> Result<()> {
    let (path, app) = setup()?;
    let (status, _) = send(&app, Method::POST, "/todos/toggle/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, list) = send(&app, Method::GET, "/todos", None).await;
    assert!(!list.contains("checkbox"));
    teardown((path, app))?;
    Ok(())
}

#[tokio::test]
async fn non_numeric_id_is_a_client_error() -> Result<()> {
    let (path, app) = setup()?;
    let (status, _) = send(&app, Method::POST, "/todos/toggle/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = send(&app, Method::DELETE, "/todos/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    teardown((path, app))?;
    Ok(())
}

#[tokio::test]
async fn delete_of_missing_id_succeeds_silently() -> Result<()> {
    let (path, app) = setup()?;
    let (status, body) = send(&app, Method::DELETE, "/todos/42", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    teardown((path, app))?;
    Ok(())
}
