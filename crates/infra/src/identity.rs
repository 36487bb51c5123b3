//! # 認証サービスクライアント
//!
//! Supabase Auth（GoTrue 互換 API）に対して、ベアラートークンからのユーザー解決と
//! 管理者権限でのユーザー削除を行う。
//!
//! ## エンドポイント
//!
//! - `GET /auth/v1/user` - トークンの持ち主を取得
//! - `DELETE /auth/v1/admin/users/{id}` - ユーザーを削除

use async_trait::async_trait;
use doky_domain::user::{AuthenticatedUser, UserId};
use reqwest::{Method, StatusCode};

use crate::{error::InfraError, response::error_message, supabase::SupabaseClient};

/// 認証サービスクライアントトレイト
///
/// テスト時にスタブを使用できるようトレイトで定義。
#[async_trait]
pub trait IdentityClient: Send + Sync {
    /// ベアラートークンからユーザーを解決する
    ///
    /// トークンが無効・期限切れ・ユーザー削除済みの場合は `Ok(None)` を返す。
    async fn resolve_user(&self, token: &str) -> Result<Option<AuthenticatedUser>, InfraError>;

    /// ユーザー（アイデンティティ）を削除する
    async fn delete_user(&self, user_id: &UserId) -> Result<(), InfraError>;
}

/// Supabase Auth を使った [`IdentityClient`] 実装
#[derive(Debug, Clone)]
pub struct SupabaseIdentityClient {
    client: SupabaseClient,
}

impl SupabaseIdentityClient {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IdentityClient for SupabaseIdentityClient {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn resolve_user(&self, token: &str) -> Result<Option<AuthenticatedUser>, InfraError> {
        let response = self
            .client
            .user_request(Method::GET, "/auth/v1/user", token)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await?;
                let user = serde_json::from_str::<AuthenticatedUser>(&body)?;
                Ok(Some(user))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => {
                tracing::debug!(status = %response.status(), "トークンに対応するユーザーが存在しない");
                Ok(None)
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(InfraError::upstream(
                    status.as_u16(),
                    error_message(&body),
                ))
            }
        }
    }

    #[tracing::instrument(skip_all, level = "debug", fields(user.id = %user_id))]
    async fn delete_user(&self, user_id: &UserId) -> Result<(), InfraError> {
        let path = format!(
            "/auth/v1/admin/users/{}",
            urlencoding::encode(user_id.as_str())
        );
        let response = self
            .client
            .admin_request(Method::DELETE, &path)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(InfraError::upstream(
            status.as_u16(),
            error_message(&body),
        ))
    }
}
