use std::net::SocketAddr;

use catalog::domain::Identity;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::{routes, startup};

const IDENTITY: Identity = Identity { user_id: 1, organization_id: 1 };

struct TestApp {
    base_url: String,
}

/// Serve the full router over a private in-memory database on an ephemeral port.
async fn start_server() -> anyhow::Result<TestApp> {
    let db = models::db::connect_in_memory().await?;
    startup::seed_identity(&db, IDENTITY).await?;

    let app = routes::build_router(startup::build_state(db, IDENTITY), CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

async fn create_service(c: &reqwest::Client, app: &TestApp, name: &str, description: &str) -> anyhow::Result<Value> {
    let res = c.post(format!("{}/services", app.base_url))
        .json(&json!({"name": name, "description": description}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body = res.json::<Value>().await?;
    Ok(body["data"].clone())
}

#[tokio::test]
async fn e2e_ping() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/ping", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body, json!({"data": {"message": "pong"}, "meta": null, "error": null}));
    Ok(())
}

#[tokio::test]
async fn e2e_service_and_version_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // Create service
    let res = c.post(format!("{}/services", app.base_url))
        .json(&json!({"name": "Catalog", "description": "x"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], Value::Null);
    assert_eq!(body["meta"], Value::Null);
    assert_eq!(body["data"]["version_count"], 0);
    assert_eq!(body["data"]["name"], "Catalog");
    let id = body["data"]["id"].as_str().unwrap_or_default().to_string();
    assert_eq!(id.len(), 26);

    // Create version
    let res = c.post(format!("{}/services/{}/versions", app.base_url, id))
        .json(&json!({"name": "v1.0.0"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"]["service_id"], id.as_str());

    // Counter reflects the version
    let res = c.get(format!("{}/services/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"]["version_count"], 1);

    // Versions listing
    let res = c.get(format!("{}/services/{}/versions?page_size_limit=10", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"].as_array().map(|a| a.len()), Some(1));
    assert_eq!(body["data"][0]["name"], "v1.0.0");
    assert_eq!(body["meta"], json!({"page_number": 1, "page_size": 1, "page_size_limit": 10}));
    Ok(())
}

#[tokio::test]
async fn e2e_list_services_meta_and_filter() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    for name in ["alpha", "beta", "gamma"] {
        create_service(&c, &app, name, "").await?;
    }

    let res = c.get(format!("{}/services?page_size_limit=2&page_number=2", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["meta"], json!({"page_number": 2, "page_size": 1, "page_size_limit": 2}));
    assert_eq!(body["data"][0]["name"], "gamma");

    let res = c.get(format!("{}/services?filter_field=name&filter_value=beta", app.base_url)).send().await?;
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"].as_array().map(|a| a.len()), Some(1));
    assert_eq!(body["data"][0]["name"], "beta");

    let res = c.get(format!("{}/services?sort=name&order=desc", app.base_url)).send().await?;
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"][0]["name"], "gamma");
    Ok(())
}

#[tokio::test]
async fn e2e_invalid_page_number() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/services?page_number=0", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"], Value::Null);
    let msg = body["error"]["message"].as_str().unwrap_or_default();
    assert!(msg.contains("invalid page number"), "{msg}");
    Ok(())
}

#[tokio::test]
async fn e2e_invalid_sort_and_size() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    for q in ["sort=description", "sort=DESCRIPTION", "page_size_limit=101", "order=sideways", "filter_field=user_id&filter_value=1"] {
        let res = c.get(format!("{}/services?{}", app.base_url, q)).send().await?;
        assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST, "{q}");
    }
    Ok(())
}

#[tokio::test]
async fn e2e_invalid_and_unknown_service_id() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.get(format!("{}/services/not-a-valid-id", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"]["message"], "invalid service id");

    let unknown = "01ARZ3NDEKTSV4RRFFQ69G5FAV";
    let res = c.get(format!("{}/services/{}", app.base_url, unknown)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = c.post(format!("{}/services/{}/versions", app.base_url, unknown))
        .json(&json!({"name": "v1"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = c.get(format!("{}/services/{}/versions", app.base_url, unknown)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"], json!([]));
    Ok(())
}

#[tokio::test]
async fn e2e_body_validation() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.post(format!("{}/services", app.base_url))
        .json(&json!({"name": "n".repeat(256)}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = c.post(format!("{}/services", app.base_url))
        .json(&json!({"name": "ok", "description": "d".repeat(1025)}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let svc = create_service(&c, &app, "Catalog", "").await?;
    let id = svc["id"].as_str().unwrap_or_default();
    let res = c.post(format!("{}/services/{}/versions", app.base_url, id))
        .json(&json!({"name": ""}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn e2e_huge_page_number_is_empty() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let svc = create_service(&c, &app, "Catalog", "").await?;
    let id = svc["id"].as_str().unwrap_or_default();

    for path in ["/services".to_string(), format!("/services/{id}/versions")] {
        let res = c.get(format!("{}{}?page_number=9223372036854775807&page_size_limit=100", app.base_url, path))
            .send().await?;
        assert_eq!(res.status(), HttpStatusCode::OK, "{path}");
        let body = res.json::<Value>().await?;
        assert_eq!(body["data"], json!([]), "{path}");
        assert_eq!(body["meta"]["page_number"], json!(9223372036854775807u64));
        assert_eq!(body["meta"]["page_size"], 0);
    }
    Ok(())
}

#[tokio::test]
async fn e2e_null_description_is_empty() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().post(format!("{}/services", app.base_url))
        .json(&json!({"name": "Catalog", "description": null}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"]["description"], "");
    Ok(())
}
