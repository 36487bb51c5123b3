//! OpenRouterProbe の結合テスト
//!
//! 実行方法:
//! ```bash
//! cargo test -p doky-infra --test openrouter_probe_test
//! ```

use std::time::Duration;

use doky_domain::api_key::ApiKeyCandidate;
use doky_infra::{InfraErrorKind, KeyProbe, OpenRouterProbe, ProbeReply};
use pretty_assertions::assert_eq;
use wiremock::{
    Mock,
    MockServer,
    ResponseTemplate,
    matchers::{header, method, path},
};

const KEY: &str = "sk-or-v1-0123456789abcdef0123456789abcdef";

fn key() -> ApiKeyCandidate {
    ApiKeyCandidate::new(KEY).unwrap()
}

#[tokio::test]
async fn test_キーをベアラー認証に使ってgetする() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/key"))
        .and(header("authorization", format!("Bearer {KEY}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {"label": "sk-or-v1-012...def", "usage": 0}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let sut = OpenRouterProbe::new(&format!("{}/api/v1/", server.uri()), Duration::from_secs(2));

    let reply = sut.probe(&key()).await.unwrap();

    assert_eq!(
        reply,
        ProbeReply {
            status:  200,
            message: None,
        }
    );
}

#[tokio::test]
async fn test_401のステータスをそのまま返す() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/key"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": {"message": "No auth credentials found", "code": 401}
        })))
        .mount(&server)
        .await;

    let sut = OpenRouterProbe::new(&server.uri(), Duration::from_secs(2));

    let reply = sut.probe(&key()).await.unwrap();

    assert_eq!(reply.status, 401);
    assert_eq!(reply.message.as_deref(), Some("No auth credentials found"));
}

#[tokio::test]
async fn test_エラーボディがjsonでなければメッセージはnone() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/key"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let sut = OpenRouterProbe::new(&server.uri(), Duration::from_secs(2));

    let reply = sut.probe(&key()).await.unwrap();

    assert_eq!(reply.status, 502);
    assert_eq!(reply.message, None);
}

#[tokio::test]
async fn test_タイムアウトを超えるとtimeoutエラーを返す() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/key"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let sut = OpenRouterProbe::new(&server.uri(), Duration::from_millis(100));

    let err = sut.probe(&key()).await.unwrap_err();

    assert!(matches!(err.kind(), InfraErrorKind::Timeout(_)));
    assert!(err.is_timeout());
    assert_eq!(sut.timeout(), Duration::from_millis(100));
}

#[tokio::test]
async fn test_接続できなければhttpエラーを返す() {
    // ポート 1 は待ち受けていないため接続が拒否される
    let sut = OpenRouterProbe::new("http://127.0.0.1:1", Duration::from_secs(2));

    let err = sut.probe(&key()).await.unwrap_err();

    assert!(matches!(err.kind(), InfraErrorKind::Http(_)));
    assert!(!err.is_timeout());
}
