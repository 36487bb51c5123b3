//! # アカウント削除エンドポイントの結合テスト
//!
//! 本番と同じルーター（CORS・Request ID レイヤー込み）と Supabase クライアントを使い、
//! Supabase を wiremock で置き換えて検証する。
//!
//! 実行方法:
//! ```bash
//! cargo test -p doky-account-service --test delete_user_test
//! ```

use std::{sync::Arc, time::Duration};

use axum::{Router, body::Body};
use doky_account_service::{
    app::{DELETE_USER_PATH, build_router},
    handler::{ACCOUNT_DELETED_MESSAGE, AccountState},
    usecase::DeleteAccountUseCaseImpl,
};
use doky_domain::deletion::{CleanupPolicy, DeletionTargets};
use doky_infra::{SupabaseClient, SupabaseIdentityClient, deletion::DeletionRegistry};
use http::{Method, Request, StatusCode};
use pretty_assertions::assert_eq;
use tower::ServiceExt;
use wiremock::{
    Mock,
    MockServer,
    ResponseTemplate,
    matchers::{method, path, path_regex},
};

const USER_ID: &str = "9a8b7c6d-5e4f-4a3b-8c2d-1e0f9a8b7c6d";
const TOKEN: &str = "user-access-token";

fn app(server: &MockServer, policy: CleanupPolicy) -> Router {
    let supabase =
        SupabaseClient::new(&server.uri(), "service-role-key", Duration::from_secs(2)).unwrap();
    let usecase = DeleteAccountUseCaseImpl::new(
        Arc::new(SupabaseIdentityClient::new(supabase.clone())),
        Arc::new(DeletionRegistry::with_all_deleters(supabase)),
        policy,
    );
    build_router(Arc::new(AccountState {
        usecase: Arc::new(usecase),
    }))
}

fn delete_request() -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(DELETE_USER_PATH)
        .header("authorization", format!("Bearer {TOKEN}"))
        .body(Body::empty())
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn mount_user(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": USER_ID,
            "aud": "authenticated",
            "role": "authenticated",
            "email": "someone@example.com"
        })))
        .mount(server)
        .await;
}

/// 全テーブルへの DELETE に 0 件で応答する
async fn mount_tables(server: &MockServer) {
    Mock::given(method("DELETE"))
        .and(path_regex(r"^/rest/v1/[a-z_]+$"))
        .respond_with(ResponseTemplate::new(204).insert_header("content-range", "*/0"))
        .mount(server)
        .await;
}

async fn mount_identity_delete(server: &MockServer, expected_calls: u64) {
    Mock::given(method("DELETE"))
        .and(path(format!("/auth/v1/admin/users/{USER_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_アカウントと全ユーザーデータを削除する() {
    let server = MockServer::start().await;
    mount_user(&server).await;
    mount_tables(&server).await;
    mount_identity_delete(&server, 1).await;

    let response = app(&server, CleanupPolicy::BestEffort)
        .oneshot(delete_request())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
    assert_eq!(
        json_body(response).await,
        serde_json::json!({"success": true, "message": ACCOUNT_DELETED_MESSAGE})
    );

    let table_requests = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.url.path().starts_with("/rest/v1/"))
        .count();
    assert_eq!(table_requests, DeletionTargets::tables().len());
}

#[tokio::test]
async fn test_テーブル削除の失敗はベストエフォートで無視される() {
    let server = MockServer::start().await;
    mount_user(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/user_activities"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "message": "relation \"user_activities\" does not exist"
        })))
        .with_priority(1)
        .mount(&server)
        .await;
    mount_tables(&server).await;
    mount_identity_delete(&server, 1).await;

    let response = app(&server, CleanupPolicy::BestEffort)
        .oneshot(delete_request())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_strictポリシーではテーブル削除失敗を報告しアイデンティティを残す() {
    let server = MockServer::start().await;
    mount_user(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/user_activities"))
        .respond_with(ResponseTemplate::new(500))
        .with_priority(1)
        .mount(&server)
        .await;
    mount_tables(&server).await;
    mount_identity_delete(&server, 0).await;

    let response = app(&server, CleanupPolicy::Strict)
        .oneshot(delete_request())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        serde_json::json!({
            "success": false,
            "error": "Failed to delete user data: user_activities"
        })
    );
}

#[tokio::test]
async fn test_アイデンティティ削除の失敗メッセージを返す() {
    let server = MockServer::start().await;
    mount_user(&server).await;
    mount_tables(&server).await;
    Mock::given(method("DELETE"))
        .and(path(format!("/auth/v1/admin/users/{USER_ID}")))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "code": 500,
            "error_code": "unexpected_failure",
            "msg": "Database error deleting user"
        })))
        .mount(&server)
        .await;

    let response = app(&server, CleanupPolicy::BestEffort)
        .oneshot(delete_request())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await["error"],
        "Failed to delete user account: Database error deleting user"
    );
}

#[tokio::test]
async fn test_削除済みユーザーで再実行するとinvalid_tokenを返す() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "code": 403,
            "error_code": "user_not_found",
            "msg": "User from sub claim in JWT does not exist"
        })))
        .mount(&server)
        .await;
    mount_identity_delete(&server, 0).await;

    let response = app(&server, CleanupPolicy::BestEffort)
        .oneshot(delete_request())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        serde_json::json!({"success": false, "error": "Invalid or expired token"})
    );
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "トークン解決以外のリクエストを送らないこと");
}

#[tokio::test]
async fn test_プリフライトはcorsヘッダー付きの200を返す() {
    let server = MockServer::start().await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri(DELETE_USER_PATH)
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "authorization, content-type")
        .body(Body::empty())
        .unwrap();

    let response = app(&server, CleanupPolicy::BestEffort)
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
    let allow_headers = headers
        .get("access-control-allow-headers")
        .unwrap()
        .to_str()
        .unwrap();
    for expected in ["authorization", "x-client-info", "apikey", "content-type"] {
        assert!(
            allow_headers.contains(expected),
            "{expected} が許可されること: {allow_headers}"
        );
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_ヘルスチェックが200を返す() {
    let server = MockServer::start().await;

    let response = app(&server, CleanupPolicy::BestEffort)
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(json_body(response).await["status"], "healthy");
}
