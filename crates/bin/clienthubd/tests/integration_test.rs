//! End-to-end tests for the full clienthubd stack.
//!
//! Each test writes a real JSON data file to a temp path, wires the real
//! store, services and axum router, and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use clienthub_adapter_http_axum::router;
use clienthub_adapter_http_axum::state::AppState;
use clienthub_adapter_storage_json_file::Config;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Data file under the system temp dir, removed on drop.
struct DataFile(PathBuf);

impl DataFile {
    async fn with(content: &Value) -> Self {
        let path = std::env::temp_dir().join(format!("clienthubd-{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, serde_json::to_vec_pretty(content).unwrap())
            .await
            .expect("temp data file should be writable");
        Self(path)
    }

    async fn empty() -> Self {
        Self::with(&json!({"clientes": [], "interacciones": []})).await
    }

    async fn read(&self) -> Value {
        let bytes = tokio::fs::read(&self.0).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn app(&self) -> axum::Router {
        let store = Config {
            path: self.0.clone(),
        }
        .build();
        router::build(AppState::from_store(store))
    }
}

impl Drop for DataFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

async fn call(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let resp = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let data = DataFile::empty().await;
    let resp = data
        .app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Customers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_persist_created_customer_to_file() {
    let data = DataFile::empty().await;
    let app = data.app();

    let (status, created) = call(
        &app,
        "POST",
        "/clientes",
        Some(json!({"nombre": "Ana", "telefono": "555-0101"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, fetched) = call(&app, "GET", "/clientes/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
    assert_eq!(fetched["nombre"], "Ana");
    assert_eq!(fetched["telefono"], "555-0101");
    assert_eq!(fetched["activo"], true);

    let stored = data.read().await;
    assert_eq!(stored["clientes"], json!([created]));
    assert_eq!(stored["interacciones"], json!([]));
}

#[tokio::test]
async fn should_page_twenty_five_customers() {
    let clientes: Vec<Value> = (1..=25)
        .map(|id| json!({"id": id, "nombre": format!("cliente {id}"), "activo": true}))
        .collect();
    let data = DataFile::with(&json!({"clientes": clientes, "interacciones": []})).await;
    let app = data.app();

    let (status, body) = call(&app, "GET", "/clientes?page=3&limit=10", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 25);
    assert_eq!(body["page"], 3);
    assert_eq!(body["limit"], 10);
    assert_eq!(body["clientes"], Value::from(clientes[20..25].to_vec()));
}

#[tokio::test]
async fn should_return_404_for_page_past_the_end() {
    let clientes: Vec<Value> = (1..=5).map(|id| json!({"id": id, "activo": true})).collect();
    let data = DataFile::with(&json!({"clientes": clientes, "interacciones": []})).await;

    let (status, body) = call(&data.app(), "GET", "/clientes?page=2&limit=10", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["mensaje"], "Página fuera de rango");
}

#[tokio::test]
async fn should_persist_activation_changes() {
    let data = DataFile::empty().await;
    let app = data.app();
    call(&app, "POST", "/clientes", Some(json!({"nombre": "Ana"}))).await;

    call(&app, "PUT", "/clientes/1/activar", None).await;
    call(&app, "PUT", "/clientes/1/activar", None).await;
    assert_eq!(data.read().await["clientes"][0]["activo"], true);

    call(&app, "PUT", "/clientes/1/desactivar", None).await;
    assert_eq!(data.read().await["clientes"][0]["activo"], false);
}

#[tokio::test]
async fn should_keep_orphaned_interactions_after_delete() {
    let data = DataFile::empty().await;
    let app = data.app();
    call(&app, "POST", "/clientes", Some(json!({"nombre": "Ana"}))).await;
    call(&app, "POST", "/clientes", Some(json!({"nombre": "Luis"}))).await;
    let (status, _) = call(
        &app,
        "POST",
        "/clientes/1/interacciones",
        Some(json!({"tipo": "visita"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call(&app, "DELETE", "/clientes/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mensaje"], "Cliente eliminado exitosamente");

    let (status, _) = call(&app, "GET", "/clientes/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = call(&app, "GET", "/clientes/1/interacciones", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let stored = data.read().await;
    assert_eq!(stored["clientes"].as_array().unwrap().len(), 1);
    assert_eq!(stored["clientes"][0]["nombre"], "Luis");
    assert_eq!(stored["interacciones"][0]["clienteId"], 1);
}

// ---------------------------------------------------------------------------
// Interactions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_not_append_interaction_for_unknown_customer() {
    let data = DataFile::empty().await;
    let app = data.app();

    let (status, body) = call(
        &app,
        "POST",
        "/clientes/7/interacciones",
        Some(json!({"tipo": "email"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["mensaje"], "Cliente no encontrado");
    assert_eq!(data.read().await["interacciones"], json!([]));
}

#[tokio::test]
async fn should_stamp_interactions_with_iso_date() {
    let data = DataFile::empty().await;
    let app = data.app();
    call(&app, "POST", "/clientes", Some(json!({"nombre": "Ana"}))).await;

    let (status, created) = call(
        &app,
        "POST",
        "/clientes/1/interacciones",
        Some(json!({"tipo": "llamada", "fecha": "ayer"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let fecha = created["fecha"].as_str().unwrap();
    assert_ne!(fecha, "ayer");
    assert_eq!(fecha.len(), "2024-01-01T00:00:00.000Z".len());
    assert!(fecha.ends_with('Z'));

    let (_, listed) = call(&app, "GET", "/clientes/1/interacciones", None).await;
    assert_eq!(listed, json!([created]));
    assert_eq!(data.read().await["interacciones"], json!([created]));
}

// ---------------------------------------------------------------------------
// Storage faults
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_500_when_data_file_is_corrupt() {
    let data = DataFile::with(&json!({"clientes": []})).await;

    let (status, body) = call(&data.app(), "GET", "/clientes/1", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["mensaje"], "Error interno del servidor");
}

#[tokio::test]
async fn should_serialize_concurrent_creates() {
    let data = DataFile::empty().await;
    let app = data.app();

    let calls: Vec<_> = (0..20)
        .map(|n| {
            let app = app.clone();
            tokio::spawn(async move {
                call(&app, "POST", "/clientes", Some(json!({"n": n}))).await.0
            })
        })
        .collect();
    for handle in calls {
        assert_eq!(handle.await.unwrap(), StatusCode::CREATED);
    }

    let stored = data.read().await;
    assert_eq!(stored["clientes"].as_array().unwrap().len(), 20);
}
