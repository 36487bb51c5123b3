//! # アカウント削除ハンドラ
//!
//! ## エンドポイント
//!
//! - `* /functions/v1/delete-user` - 呼び出し元のアカウントと全ユーザーデータを削除
//!
//! メソッドは問わない（`OPTIONS` のみプリフライトとして空の 200 を返す）。

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, Method, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
};
use doky_shared::MessageResponse;

use crate::{error::AccountError, usecase::AccountUseCase};

/// 削除成功時のメッセージ
pub const ACCOUNT_DELETED_MESSAGE: &str =
    "User account and all associated data deleted successfully";

/// アカウント削除ハンドラの共有状態
pub struct AccountState {
    pub usecase: Arc<dyn AccountUseCase>,
}

/// `* /functions/v1/delete-user`
pub async fn delete_user(
    State(state): State<Arc<AccountState>>,
    method: Method,
    headers: HeaderMap,
) -> Result<Response, AccountError> {
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }

    let token = bearer_token(&headers)?;
    let deletion = state.usecase.delete_account(token).await?;

    tracing::info!(
        user.id = %deletion.user_id,
        rows_deleted = deletion.rows_deleted,
        failed_tables = ?deletion.failed_tables,
        "アカウントを削除しました"
    );

    Ok(Json(MessageResponse::new(ACCOUNT_DELETED_MESSAGE)).into_response())
}

/// Authorization ヘッダーからトークンを取り出す
///
/// `Bearer ` が付いていなければ値全体をトークンとみなす。
/// トークンの検証は認証サービスに任せる。
fn bearer_token(headers: &HeaderMap) -> Result<&str, AccountError> {
    let value = headers
        .get(AUTHORIZATION)
        .filter(|v| !v.is_empty())
        .ok_or(AccountError::MissingAuthorization)?
        .to_str()
        .map_err(|_| AccountError::InvalidToken)?;

    Ok(value.strip_prefix("Bearer ").unwrap_or(value).trim())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use axum::{Router, body::Body, http::Request, routing::any};
    use doky_domain::user::UserId;
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;
    use crate::usecase::AccountDeletion;

    // テスト用スタブ
    struct StubAccountUseCase {
        result:         fn() -> Result<AccountDeletion, AccountError>,
        received_token: Mutex<Option<String>>,
    }

    impl StubAccountUseCase {
        fn new(result: fn() -> Result<AccountDeletion, AccountError>) -> Arc<Self> {
            Arc::new(Self {
                result,
                received_token: Mutex::new(None),
            })
        }

        fn deleted() -> Result<AccountDeletion, AccountError> {
            Ok(AccountDeletion {
                user_id:       UserId::new("user-1").unwrap(),
                rows_deleted:  4,
                failed_tables: vec!["user_feedback"],
            })
        }

        fn identity_failed() -> Result<AccountDeletion, AccountError> {
            Err(AccountError::IdentityDeletionFailed(
                "User not allowed".to_string(),
            ))
        }
    }

    #[async_trait]
    impl AccountUseCase for StubAccountUseCase {
        async fn delete_account(&self, token: &str) -> Result<AccountDeletion, AccountError> {
            *self.received_token.lock().unwrap() = Some(token.to_string());
            (self.result)()
        }
    }

    fn create_test_app(usecase: Arc<StubAccountUseCase>) -> Router {
        let state = Arc::new(AccountState { usecase });
        Router::new()
            .route("/functions/v1/delete-user", any(delete_user))
            .with_state(state)
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_delete_user_削除成功() {
        // Given
        let usecase = StubAccountUseCase::new(StubAccountUseCase::deleted);
        let sut = create_test_app(usecase.clone());

        let request = Request::builder()
            .method(Method::POST)
            .uri("/functions/v1/delete-user")
            .header("authorization", "Bearer user-jwt")
            .body(Body::empty())
            .unwrap();

        // When
        let response = sut.oneshot(request).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({"success": true, "message": ACCOUNT_DELETED_MESSAGE})
        );
        assert_eq!(
            usecase.received_token.lock().unwrap().as_deref(),
            Some("user-jwt")
        );
    }

    #[tokio::test]
    async fn test_delete_user_メソッドを問わず受け付ける() {
        let sut = create_test_app(StubAccountUseCase::new(StubAccountUseCase::deleted));

        let request = Request::builder()
            .method(Method::DELETE)
            .uri("/functions/v1/delete-user")
            .header("authorization", "Bearer user-jwt")
            .body(Body::empty())
            .unwrap();

        let response = sut.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_delete_user_authorizationヘッダーなし() {
        // Given
        let usecase = StubAccountUseCase::new(StubAccountUseCase::deleted);
        let sut = create_test_app(usecase.clone());

        let request = Request::builder()
            .method(Method::POST)
            .uri("/functions/v1/delete-user")
            .body(Body::empty())
            .unwrap();

        // When
        let response = sut.oneshot(request).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({"success": false, "error": "Authorization header is required"})
        );
        assert!(usecase.received_token.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_user_アイデンティティ削除失敗() {
        let sut = create_test_app(StubAccountUseCase::new(
            StubAccountUseCase::identity_failed,
        ));

        let request = Request::builder()
            .method(Method::POST)
            .uri("/functions/v1/delete-user")
            .header("authorization", "Bearer user-jwt")
            .body(Body::empty())
            .unwrap();

        let response = sut.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["error"],
            "Failed to delete user account: User not allowed"
        );
    }

    #[tokio::test]
    async fn test_delete_user_optionsは空の200を返しユースケースを呼ばない() {
        let usecase = StubAccountUseCase::new(StubAccountUseCase::deleted);
        let sut = create_test_app(usecase.clone());

        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/functions/v1/delete-user")
            .body(Body::empty())
            .unwrap();

        let response = sut.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
        assert!(usecase.received_token.lock().unwrap().is_none());
    }

    #[test]
    fn test_bearer_tokenはbearerプレフィックスを除去する() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer abc.def.ghi".parse().unwrap());

        assert_eq!(bearer_token(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_bearer_tokenはプレフィックスなしの値をそのまま使う() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "abc.def.ghi".parse().unwrap());

        assert_eq!(bearer_token(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_bearer_tokenは空のヘッダーを未指定として扱う() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "".parse().unwrap());

        assert!(matches!(
            bearer_token(&headers),
            Err(AccountError::MissingAuthorization)
        ));
    }
}
