//! Router-level tests: the full axum app over a migrated in-memory database.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::routes::{self, Frontend};
use server::state::{ServerAuthConfig, ServerState};

const KEY: &str = "test-secret";

async fn test_app() -> Router {
    let db = models::db::connect_in_memory().await.unwrap();
    models::db::migrate(&db).await.unwrap();
    let state = ServerState::new(db, ServerAuthConfig { api_secret_key: Some(KEY.into()) });
    routes::build_router(state, CorsLayer::very_permissive(), None)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn send(method: Method, uri: &str, auth: Option<&str>, body: Value) -> Request<Body> {
    let mut b = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(a) = auth {
        b = b.header(header::AUTHORIZATION, a);
    }
    b.body(Body::from(serde_json::to_vec(&body).unwrap())).unwrap()
}

fn authed(method: Method, uri: &str, body: Value) -> Request<Body> {
    send(method, uri, Some(&format!("ApiKey {KEY}")), body)
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_skill(app: &Router, name: &str) -> Value {
    let res = app
        .clone()
        .oneshot(authed(
            Method::POST,
            "/api/skills",
            json!({"name": name, "iconUrl": format!("https://icons.example.com/{name}.svg"), "category": "Backend"}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    json_body(res).await
}

#[tokio::test]
async fn test_health() {
    let app = test_app().await;
    let res = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(res).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_writes_require_api_key() {
    let app = test_app().await;
    let body = json!({"name": "Rust", "iconUrl": "r.svg", "category": "backend"});

    let res = app.clone().oneshot(send(Method::POST, "/api/skills", None, body.clone())).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = app
        .clone()
        .oneshot(send(Method::POST, "/api/skills", Some(&format!("Bearer {KEY}")), body.clone()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(res).await["detail"], "api key has an invalid format");

    let res = app
        .clone()
        .oneshot(send(Method::POST, "/api/skills", Some("ApiKey wrong"), body))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // Reads stay public
    let res = app.oneshot(get("/api/skills")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(res).await, json!([]));
}

#[tokio::test]
async fn test_skill_lifecycle() {
    let app = test_app().await;

    let rust = create_skill(&app, "Rust").await;
    assert_eq!(rust["name"], "Rust");
    assert_eq!(rust["iconUrl"], "https://icons.example.com/Rust.svg");
    assert_eq!(rust["category"], "backend");
    let id = rust["id"].as_i64().unwrap();

    let res = app
        .clone()
        .oneshot(authed(Method::POST, "/api/skills", json!({"name": "rust", "iconUrl": "x", "category": "y"})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let res = app
        .clone()
        .oneshot(authed(Method::PATCH, &format!("/api/skills/{id}"), json!({"iconUrl": " new.svg "})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(res).await["iconUrl"], "new.svg");

    let res = app.clone().oneshot(get("/api/skills")).await.unwrap();
    let list = json_body(res).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let res = app
        .clone()
        .oneshot(authed(Method::DELETE, "/api/skills", json!({"name": "RUST"})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(res).await, json!(true));

    let res = app
        .oneshot(authed(Method::DELETE, "/api/skills", json!({"name": "Rust"})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_skill_create_reports_first_missing_field() {
    let app = test_app().await;
    let res = app
        .oneshot(authed(Method::POST, "/api/skills", json!({"name": "Rust", "category": "backend"})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = json_body(res).await;
    assert_eq!(body["error"], "Validation Error");
    assert_eq!(body["detail"], "'iconUrl' is required");
}

#[tokio::test]
async fn test_image_lifecycle() {
    let app = test_app().await;

    let res = app
        .clone()
        .oneshot(authed(Method::POST, "/api/images", json!({"name": " Hero.PNG ", "blob": "iVBORw0KGgo="})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(res).await, json!({"name": "hero.png", "blob": "iVBORw0KGgo="}));

    let res = app
        .clone()
        .oneshot(authed(Method::POST, "/api/images", json!({"name": "hero.png", "blob": "AAAA"})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let res = app.clone().oneshot(get("/api/images")).await.unwrap();
    assert_eq!(json_body(res).await, json!([{"name": "hero.png", "blob": "iVBORw0KGgo="}]));

    let res = app
        .clone()
        .oneshot(authed(Method::DELETE, "/api/images", json!({"name": "HERO.png"})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.oneshot(get("/api/images")).await.unwrap();
    assert_eq!(json_body(res).await, json!([]));
}

#[tokio::test]
async fn test_image_validation() {
    let app = test_app().await;

    let res = app
        .clone()
        .oneshot(authed(Method::POST, "/api/images", json!({"name": "logo"})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(res).await["detail"], "'blob' is required");

    let res = app
        .clone()
        .oneshot(authed(Method::POST, "/api/images", json!({"name": "logo", "blob": "%%%"})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app
        .oneshot(authed(Method::DELETE, "/api/images", json!({})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_project_lifecycle() {
    let app = test_app().await;
    let rust = create_skill(&app, "Rust").await["id"].as_i64().unwrap();
    let sql = create_skill(&app, "SQL").await["id"].as_i64().unwrap();
    let react = create_skill(&app, "React").await["id"].as_i64().unwrap();

    let res = app
        .clone()
        .oneshot(authed(
            Method::POST,
            "/api/projects",
            json!({
                "title": "Portfolio",
                "description": "This very site",
                "github_url": "https://github.com/example/portfolio",
                "skill_ids": [sql, rust]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = json_body(res).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["details"], Value::Null);
    let names: Vec<&str> = created["skills"].as_array().unwrap().iter().map(|s| s["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Rust", "SQL"]);
    assert_eq!(created["skills"][0]["iconUrl"], "https://icons.example.com/Rust.svg");

    let res = app
        .clone()
        .oneshot(authed(Method::PATCH, &format!("/api/projects/{id}"), json!({"skill_ids": [react], "demo_url": "https://demo.example.com"})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated = json_body(res).await;
    assert_eq!(updated["demo_url"], "https://demo.example.com");
    assert_eq!(updated["skills"].as_array().unwrap().len(), 1);
    assert_eq!(updated["skills"][0]["id"], react);

    let res = app.clone().oneshot(get(&format!("/api/projects/{id}"))).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(res).await, updated);

    let res = app.clone().oneshot(get("/api/projects")).await.unwrap();
    assert_eq!(json_body(res).await, json!([updated]));

    let res = app
        .clone()
        .oneshot(authed(Method::DELETE, &format!("/api/projects/{id}"), json!({})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.oneshot(get(&format!("/api/projects/{id}"))).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_project_validation() {
    let app = test_app().await;

    let res = app
        .clone()
        .oneshot(authed(Method::POST, "/api/projects", json!({"title": "No skills key", "description": "d"})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(res).await["detail"], "'skill_ids' is required");

    // Empty skill list is allowed
    let res = app
        .clone()
        .oneshot(authed(Method::POST, "/api/projects", json!({"title": "Bare", "description": "d", "skill_ids": []})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let id = json_body(res).await["id"].as_i64().unwrap();

    let res = app
        .clone()
        .oneshot(authed(Method::POST, "/api/projects", json!({"title": "Ghost skill", "description": "d", "skill_ids": [77]})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app
        .clone()
        .oneshot(authed(Method::PATCH, &format!("/api/projects/{id}"), json!({})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app
        .oneshot(authed(Method::PATCH, "/api/projects/9999", json!({"title": "x"})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = test_app().await;
    let res = app.oneshot(get("/api-docs/openapi.json")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let doc = json_body(res).await;
    assert!(doc["paths"]["/api/projects/{id}"].is_object());
}

#[tokio::test]
async fn test_spa_fallback_serves_index() {
    let dir = std::env::temp_dir().join(format!("portfolio-spa-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<html>portfolio</html>").unwrap();

    let db = models::db::connect_in_memory().await.unwrap();
    models::db::migrate(&db).await.unwrap();
    let state = ServerState::new(db, ServerAuthConfig { api_secret_key: None });
    let frontend = Frontend { dir: dir.to_string_lossy().into_owned(), spa_fallback: true };
    let app = routes::build_router(state, CorsLayer::very_permissive(), Some(frontend));

    let res = app.clone().oneshot(get("/projects/42")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"<html>portfolio</html>");

    // API routes still win over the fallback
    let res = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_malformed_requests_get_json_validation_errors() {
    let app = test_app().await;
    let key = format!("ApiKey {KEY}");

    // Wrong field type
    let res = app
        .clone()
        .oneshot(authed(Method::DELETE, "/api/images", json!({"name": 5})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(res).await["error"], "Validation Error");

    // No Content-Type
    let req = Request::builder()
        .method(Method::DELETE)
        .uri("/api/images")
        .header(header::AUTHORIZATION, &key)
        .body(Body::from(r#"{"name":"logo"}"#))
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(res).await["error"], "Validation Error");

    // Broken JSON
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/skills")
        .header(header::AUTHORIZATION, &key)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(res).await["detail"].is_string());

    // Non-numeric id
    let res = app.clone().oneshot(get("/api/projects/abc")).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(res).await["error"], "Validation Error");

    let res = app
        .oneshot(authed(Method::PATCH, "/api/skills/abc", json!({"name": "x"})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
