//! HTTP server of the prediction stub.
//!
//! # API Endpoints
//!
//! | Method | Path       | Description                            |
//! |--------|------------|----------------------------------------|
//! | GET    | `/health`  | Health check                           |
//! | POST   | `/predict` | Multipart image upload, scripted verdict |

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::{header, Method},
    response::Json,
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::CorsLayer;

use super::types::{HealthResponse, UPLOAD_FIELD};
use crate::config::StubConfig;
use crate::error::{ServerError, StubError, StubResult};
use crate::verdict::{sniff_image, Verdict};

/// Largest accepted request body (16 MB).
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Build the application router.
pub fn router(config: StubConfig) -> Router {
    // The frontend dev server runs on another origin.
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/predict", post(predict))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors)
        .with_state(Arc::new(config))
}

/// Start the HTTP server
pub async fn start_server(port: u16, config: StubConfig) -> Result<(), ServerError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("🚀 Prediction stub running on http://localhost:{}", port);
    tracing::info!("   POST /predict - Upload an image (field `file`)");
    tracing::info!("   GET  /health  - Health check");
    tracing::info!(
        score = config.score,
        fail_status = ?config.fail_status,
        latency_ms = config.latency.as_millis() as u64,
        "scripted behaviour"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(config)).await?;

    Ok(())
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Prediction endpoint
async fn predict(
    State(config): State<Arc<StubConfig>>,
    mut multipart: Multipart,
) -> StubResult<Json<Verdict>> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        // A part without a filename is a plain form value, not a file.
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let bytes = field.bytes().await?;
        upload = Some((file_name, bytes.to_vec()));
    }

    let (file_name, bytes) = upload.ok_or(StubError::NoFilePart)?;
    if file_name.is_empty() {
        return Err(StubError::NoSelectedFile);
    }

    if !config.latency.is_zero() {
        tokio::time::sleep(config.latency).await;
    }

    if let Some(status) = config.fail_status {
        return Err(StubError::Forced {
            status,
            message: "Model not loaded".to_string(),
        });
    }

    let format = sniff_image(&bytes).ok_or(StubError::NotAnImage)?;
    let verdict = Verdict::from_score(config.score);

    tracing::info!(
        file = %file_name,
        size = bytes.len(),
        ?format,
        class = ?verdict.class,
        confidence = verdict.confidence,
        "prediction served"
    );

    Ok(Json(verdict))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::PetClass;
    use reqwest::multipart::{Form, Part};
    use serde_json::Value;

    const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

    /// Serve `config` on an ephemeral port and return its base URL.
    async fn spawn_stub(config: StubConfig) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(config)).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn image_form(file_name: &str, bytes: &[u8]) -> Form {
        let part = Part::bytes(bytes.to_vec())
            .file_name(file_name.to_string())
            .mime_str("image/jpeg")
            .unwrap();
        Form::new().part(UPLOAD_FIELD, part)
    }

    async fn post(base: &str, form: Form) -> (u16, Value) {
        let response = reqwest::Client::new()
            .post(format!("{}/predict", base))
            .multipart(form)
            .send()
            .await
            .unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let base = spawn_stub(StubConfig::default()).await;
        let health: HealthResponse = reqwest::get(format!("{}/health", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(health.status, "ok");
        assert_eq!(health.service, "predict-stub");
    }

    #[tokio::test]
    async fn test_predict_cat() {
        let base = spawn_stub(StubConfig::new(0.13, None, 0).unwrap()).await;
        let (status, body) = post(&base, image_form("kitty.jpg", JPEG)).await;

        assert_eq!(status, 200);
        let verdict: Verdict = serde_json::from_value(body).unwrap();
        assert_eq!(verdict.class, PetClass::Cat);
        assert!((verdict.confidence - 0.87).abs() < 1e-9);
        assert_eq!(verdict.score, 0.13);
    }

    #[tokio::test]
    async fn test_predict_dog() {
        let base = spawn_stub(StubConfig::new(0.91, None, 0).unwrap()).await;
        let (status, body) = post(&base, image_form("rex.jpg", JPEG)).await;

        assert_eq!(status, 200);
        assert_eq!(body["class"], "Dog");
        assert_eq!(body["confidence"], 0.91);
    }

    #[tokio::test]
    async fn test_missing_file_part() {
        let base = spawn_stub(StubConfig::default()).await;
        let form = Form::new().text("other", "value");
        let (status, body) = post(&base, form).await;

        assert_eq!(status, 400);
        assert_eq!(body["error"], "No file part");
    }

    #[tokio::test]
    async fn test_file_part_without_filename_is_not_a_file() {
        let base = spawn_stub(StubConfig::default()).await;
        let form = Form::new().text(UPLOAD_FIELD, "not a file");
        let (status, body) = post(&base, form).await;

        assert_eq!(status, 400);
        assert_eq!(body["error"], "No file part");
    }

    #[tokio::test]
    async fn test_empty_filename() {
        let base = spawn_stub(StubConfig::default()).await;
        let (status, body) = post(&base, image_form("", JPEG)).await;

        assert_eq!(status, 400);
        assert_eq!(body["error"], "No selected file");
    }

    #[tokio::test]
    async fn test_not_an_image() {
        let base = spawn_stub(StubConfig::default()).await;
        let (status, body) = post(&base, image_form("notes.jpg", b"hello world")).await;

        assert_eq!(status, 500);
        assert!(body["error"].as_str().unwrap().contains("image"));
    }

    #[tokio::test]
    async fn test_forced_failure() {
        let base = spawn_stub(StubConfig::new(0.9, Some(503), 0).unwrap()).await;
        let (status, body) = post(&base, image_form("kitty.jpg", JPEG)).await;

        assert_eq!(status, 503);
        assert_eq!(body["error"], "Model not loaded");
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let base = spawn_stub(StubConfig::default()).await;
        let response = reqwest::Client::new()
            .request(reqwest::Method::OPTIONS, format!("{}/predict", base))
            .header("Origin", "http://localhost:8080")
            .header("Access-Control-Request-Method", "POST")
            .send()
            .await
            .unwrap();

        assert!(response.status().is_success());
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
    }
}
