use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use backend::app::create_app;
use backend::config::settings::AppConfig;
use backend::infrastructure::storage::local::PdfStorage;
use backend::modules::transcript::error::TranscriptError;
use backend::modules::transcript::fetcher::TranscriptFetcher;
use backend::modules::transcript::model::TranscriptSegment;
use backend::state::AppState;

enum Stub {
    Segments(Vec<TranscriptSegment>),
    Disabled,
    Unavailable,
    Fail(&'static str),
}

struct StubFetcher(Stub);

#[async_trait]
impl TranscriptFetcher for StubFetcher {
    async fn fetch(&self, _video_id: &str) -> Result<Vec<TranscriptSegment>, TranscriptError> {
        match &self.0 {
            Stub::Segments(segments) => Ok(segments.clone()),
            Stub::Disabled => Err(TranscriptError::SubtitlesDisabled),
            Stub::Unavailable => Err(TranscriptError::VideoUnavailable),
            Stub::Fail(msg) => Err(TranscriptError::Other(msg.to_string())),
        }
    }
}

fn segment(text: &str, start: f64) -> TranscriptSegment {
    TranscriptSegment {
        text: text.to_string(),
        start,
        duration: 1.0,
    }
}

async fn test_app(stub: Stub) -> (Router, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let config = AppConfig {
        server_port: 0,
        public_base_url: "http://localhost:5000".to_string(),
        pdf_output_dir: tmp.path().to_string_lossy().into_owned(),
        fetch_timeout_secs: 5,
    };
    let storage = PdfStorage::init(tmp.path()).await.unwrap();
    let state = AppState::new(config, Arc::new(StubFetcher(stub)), storage);
    (create_app(state).await, tmp)
}

fn post_generate(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/generate-pdf")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn generates_pdf_and_serves_it_statically() {
    let segments = vec![segment("Hello", 0.0), segment("World", 1.0)];
    let (app, tmp) = test_app(Stub::Segments(segments)).await;

    let response = app
        .clone()
        .oneshot(post_generate(
            json!({ "video_link": "https://www.youtube.com/watch?v=abcDEFghiJK" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["message"], "PDF generated successfully");

    let path = body["path"].as_str().unwrap();
    assert!(path.starts_with("http://localhost:5000/static/pdfs/abcDEFghiJK_"));
    assert!(path.ends_with(".pdf"));

    let filename = path.rsplit('/').next().unwrap();
    let suffix = filename
        .strip_prefix("abcDEFghiJK_")
        .and_then(|s| s.strip_suffix(".pdf"))
        .unwrap();
    assert_eq!(suffix.len(), 6);
    assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));

    // The file landed in the output directory as a PDF.
    let on_disk = std::fs::read(tmp.path().join(filename)).unwrap();
    assert!(on_disk.starts_with(b"%PDF"));

    // And is retrievable through the static route.
    let served = app
        .oneshot(
            Request::builder()
                .uri(format!("/static/pdfs/{filename}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(served.status(), StatusCode::OK);
    let served_bytes = to_bytes(served.into_body(), usize::MAX).await.unwrap();
    assert_eq!(served_bytes.as_ref(), on_disk.as_slice());
}

#[tokio::test]
async fn repeated_requests_produce_distinct_files() {
    let (app, tmp) = test_app(Stub::Segments(vec![segment("Hello", 0.0)])).await;
    let link = json!({ "video_link": "https://www.youtube.com/watch?v=abcDEFghiJK" });

    let first = json_body(app.clone().oneshot(post_generate(link.clone())).await.unwrap()).await;
    let second = json_body(app.oneshot(post_generate(link)).await.unwrap()).await;

    assert_ne!(first["path"], second["path"]);
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 2);
}

#[tokio::test]
async fn missing_video_link_is_rejected() {
    let (app, _tmp) = test_app(Stub::Segments(vec![])).await;

    let response = app.oneshot(post_generate(json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "No video link provided");
}

#[tokio::test]
async fn empty_video_link_is_rejected() {
    let (app, _tmp) = test_app(Stub::Segments(vec![])).await;

    let response = app
        .oneshot(post_generate(json!({ "video_link": "" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "No video link provided");
}

#[tokio::test]
async fn whitespace_only_link_is_treated_as_invalid_not_missing() {
    let (app, tmp) = test_app(Stub::Segments(vec![])).await;

    let response = app
        .oneshot(post_generate(json!({ "video_link": "   " })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "Invalid YouTube link");
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn link_without_video_id_is_rejected() {
    let (app, tmp) = test_app(Stub::Segments(vec![])).await;

    let response = app
        .oneshot(post_generate(json!({ "video_link": "https://example.com" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "Invalid YouTube link");
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn disabled_subtitles_yield_400_and_no_file() {
    let (app, tmp) = test_app(Stub::Disabled).await;

    let response = app
        .oneshot(post_generate(
            json!({ "video_link": "https://youtu.be/abcDEFghiJK" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await["error"],
        "Subtitles are disabled for this video"
    );
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn unavailable_video_yields_400_and_no_file() {
    let (app, tmp) = test_app(Stub::Unavailable).await;

    let response = app
        .oneshot(post_generate(
            json!({ "video_link": "https://youtu.be/abcDEFghiJK" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await["error"],
        "Video is unavailable or deleted"
    );
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn unclassified_failure_yields_500_with_message() {
    let (app, _tmp) = test_app(Stub::Fail("rate limited")).await;

    let response = app
        .oneshot(post_generate(
            json!({ "video_link": "https://youtu.be/abcDEFghiJK" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await["error"],
        "An error occurred: rate limited"
    );
}

#[tokio::test]
async fn unknown_static_file_is_404() {
    let (app, _tmp) = test_app(Stub::Segments(vec![])).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/static/pdfs/missing.pdf")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
