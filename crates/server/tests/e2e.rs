use std::net::SocketAddr;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes;
use server::state::{ServerAuthConfig, ServerState};

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let db = models::db::connect_in_memory().await?;
    models::db::migrate(&db).await?;
    let state = ServerState::new(db, ServerAuthConfig { api_secret_key: Some("e2e-key".into()) });
    let app = routes::build_router(state, CorsLayer::very_permissive(), None);

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_portfolio_content_roundtrip() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let auth = "ApiKey e2e-key";

    let res = c.get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.post(format!("{}/api/skills", app.base_url))
        .header("Authorization", auth)
        .json(&json!({"name": "Rust", "iconUrl": "rust.svg", "category": "backend"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let skill = res.json::<Value>().await?;

    let res = c.post(format!("{}/api/projects", app.base_url))
        .header("Authorization", auth)
        .json(&json!({"title": "CLI", "description": "A tool", "skill_ids": [skill["id"]]}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    let payload = vec![0x89u8, b'P', b'N', b'G'];
    let res = c.post(format!("{}/api/images", app.base_url))
        .header("Authorization", auth)
        .json(&json!({"name": "cover", "blob": STANDARD.encode(&payload)}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let projects = c.get(format!("{}/api/projects", app.base_url)).send().await?.json::<Value>().await?;
    assert_eq!(projects[0]["skills"][0]["name"], "Rust");

    let images = c.get(format!("{}/api/images", app.base_url)).send().await?.json::<Value>().await?;
    let blob = images[0]["blob"].as_str().unwrap_or_default();
    assert_eq!(STANDARD.decode(blob)?, payload);
    Ok(())
}

#[tokio::test]
async fn e2e_cors_preflight_allowed() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{}/api/skills", app.base_url))
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await?;
    assert!(res.status().is_success());
    assert!(res.headers().get("access-control-allow-origin").is_some());
    Ok(())
}
