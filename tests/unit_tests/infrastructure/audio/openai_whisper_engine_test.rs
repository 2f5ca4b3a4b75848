use std::time::Duration;

use axum::Router;
use axum::extract::Multipart;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::routing::post;
use bytes::Bytes;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use scribe_gateway::application::ports::{
    TranscriptionEngine, TranscriptionError, TranscriptionRequest,
};
use scribe_gateway::domain::{ApiKey, LanguageHint};
use scribe_gateway::infrastructure::audio::OpenAiWhisperEngine;

static FAKE_AUDIO: Bytes = Bytes::from_static(b"fake audio bytes");

async fn serve(app: Router) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}/v1", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

async fn start_mock_openai_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let app = Router::new().route(
        "/v1/audio/transcriptions",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );
    serve(app).await
}

/// Answers with a transcript describing what the server received.
async fn echo_request(headers: HeaderMap, mut multipart: Multipart) -> impl IntoResponse {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let mut parts = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or("").to_string();
        if name == "file" {
            let file_name = field.file_name().unwrap_or("").to_string();
            let content_type = field.content_type().unwrap_or("").to_string();
            let len = field.bytes().await.unwrap().len();
            parts.push(format!("file={}|{}|{}", file_name, content_type, len));
        } else {
            let value = field.text().await.unwrap();
            parts.push(format!("{}={}", name, value));
        }
    }
    parts.sort();

    axum::Json(serde_json::json!({ "text": format!("{} {}", auth, parts.join(";")) }))
}

fn request<'a>(api_key: Option<&'a ApiKey>, language: Option<LanguageHint>) -> TranscriptionRequest<'a> {
    TranscriptionRequest {
        audio: &FAKE_AUDIO,
        file_name: "clip.wav",
        mime_type: "audio/wav",
        model: "whisper-1",
        language,
        api_key,
    }
}

#[tokio::test]
async fn given_valid_audio_when_openai_transcribes_then_returns_trimmed_text() {
    let (base_url, shutdown_tx) =
        start_mock_openai_server(200, r#"{"text": "  hello world \n"}"#).await;
    let engine = OpenAiWhisperEngine::new(reqwest::Client::new(), Some(base_url));
    let key = ApiKey::new("sk-test").unwrap();

    let result = engine.transcribe(request(Some(&key), None)).await;

    assert_eq!(result.unwrap(), "hello world");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_request_when_sent_then_carries_bearer_key_model_language_and_file() {
    let app = Router::new().route("/v1/audio/transcriptions", post(echo_request));
    let (base_url, shutdown_tx) = serve(app).await;
    let engine = OpenAiWhisperEngine::new(reqwest::Client::new(), Some(base_url));
    let key = ApiKey::new("sk-test").unwrap();

    let text = engine
        .transcribe(request(Some(&key), Some("zh".parse().unwrap())))
        .await
        .unwrap();

    assert!(text.starts_with("Bearer sk-test "));
    assert!(text.contains("file=clip.wav|audio/wav|16"));
    assert!(text.contains("language=zh"));
    assert!(text.contains("model=whisper-1"));
    assert!(text.contains("response_format=json"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_no_language_hint_when_sent_then_language_field_is_omitted() {
    let app = Router::new().route("/v1/audio/transcriptions", post(echo_request));
    let (base_url, shutdown_tx) = serve(app).await;
    let engine = OpenAiWhisperEngine::new(reqwest::Client::new(), Some(base_url));
    let key = ApiKey::new("sk-test").unwrap();

    let text = engine.transcribe(request(Some(&key), None)).await.unwrap();

    assert!(!text.contains("language="));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unauthorized_status_when_transcribing_then_returns_authentication_error() {
    let body = r#"{"error": {"message": "Incorrect API key provided: sk-wrong"}}"#;
    let (base_url, shutdown_tx) = start_mock_openai_server(401, body).await;
    let engine = OpenAiWhisperEngine::new(reqwest::Client::new(), Some(base_url));
    let key = ApiKey::new("sk-wrong").unwrap();

    let result = engine.transcribe(request(Some(&key), None)).await;

    match result {
        Err(TranscriptionError::AuthenticationFailed(detail)) => {
            assert!(detail.contains("401"));
            assert!(!detail.contains("sk-wrong"));
        }
        other => panic!("expected authentication error, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_missing_api_key_when_transcribing_then_fails_before_any_request() {
    let engine = OpenAiWhisperEngine::new(
        reqwest::Client::new(),
        Some("http://127.0.0.1:9/v1".to_string()),
    );

    let result = engine.transcribe(request(None, None)).await;

    assert!(matches!(
        result,
        Err(TranscriptionError::AuthenticationFailed(_))
    ));
}

#[tokio::test]
async fn given_server_error_status_when_transcribing_then_returns_api_error() {
    let (base_url, shutdown_tx) = start_mock_openai_server(503, "upstream overloaded").await;
    let engine = OpenAiWhisperEngine::new(reqwest::Client::new(), Some(base_url));
    let key = ApiKey::new("sk-test").unwrap();

    let result = engine.transcribe(request(Some(&key), None)).await;

    assert!(matches!(
        result,
        Err(TranscriptionError::ApiRequestFailed(_))
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_non_json_success_body_when_transcribing_then_returns_invalid_response() {
    let (base_url, shutdown_tx) = start_mock_openai_server(200, "<html>gateway</html>").await;
    let engine = OpenAiWhisperEngine::new(reqwest::Client::new(), Some(base_url));
    let key = ApiKey::new("sk-test").unwrap();

    let result = engine.transcribe(request(Some(&key), None)).await;

    assert!(matches!(
        result,
        Err(TranscriptionError::InvalidResponse(_))
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_slow_upstream_when_client_timeout_elapses_then_returns_timeout() {
    let app = Router::new().route(
        "/v1/audio/transcriptions",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            r#"{"text": "too late"}"#
        }),
    );
    let (base_url, shutdown_tx) = serve(app).await;
    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let engine = OpenAiWhisperEngine::new(client, Some(base_url));
    let key = ApiKey::new("sk-test").unwrap();

    let result = engine.transcribe(request(Some(&key), None)).await;

    assert!(matches!(result, Err(TranscriptionError::Timeout(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_upstream_when_transcribing_then_returns_api_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let engine = OpenAiWhisperEngine::new(
        reqwest::Client::new(),
        Some(format!("http://{}/v1", addr)),
    );
    let key = ApiKey::new("sk-test").unwrap();

    let result = engine.transcribe(request(Some(&key), None)).await;

    assert!(matches!(
        result,
        Err(TranscriptionError::ApiRequestFailed(_))
    ));
}
