//! # Key Service エラー定義
//!
//! Key Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! 各バリアントが HTTP ステータスを持つ。メッセージ文字列からステータスを
//! 推測することはしない。失敗レスポンスには常に `valid: false` を含める。

use std::time::Duration;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use doky_domain::DomainError;
use doky_shared::ErrorResponse;
use thiserror::Error;

/// Key Service で発生するエラー
#[derive(Debug, Error)]
pub enum KeyError {
    /// POST 以外のメソッド
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Authorization ヘッダーがない
    #[error("Authorization header is required")]
    MissingAuthorization,

    /// リクエストボディを読み込めない（サイズ上限超過など）
    #[error("Failed to read request body: {0}")]
    UnreadableBody(String),

    /// リクエストボディが空
    #[error("Request body is empty")]
    EmptyBody,

    /// リクエストボディが JSON として解釈できない
    #[error("Invalid JSON in request body: {0}")]
    MalformedBody(String),

    /// 入力値がドメインルールに違反している
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// プロバイダのレート制限に達した
    #[error("Rate limit exceeded while verifying API key. Please try again later.")]
    RateLimited,

    /// プローブがタイムアウトした
    #[error("API key verification timed out after {} seconds", .0.as_secs())]
    Timeout(Duration),

    /// プロバイダがエラーメッセージ付きでエラーステータスを返した
    #[error("{0}")]
    Provider(String),

    /// プロバイダがメッセージなしでエラーステータスを返した
    #[error("API key verification failed with status {0}")]
    UpstreamStatus(u16),
}

impl KeyError {
    /// HTTP ステータスコード
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingAuthorization => StatusCode::UNAUTHORIZED,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::MethodNotAllowed
            | Self::UnreadableBody(_)
            | Self::EmptyBody
            | Self::MalformedBody(_)
            | Self::Domain(_)
            | Self::Timeout(_)
            | Self::Provider(_)
            | Self::UpstreamStatus(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for KeyError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::RateLimited | Self::Timeout(_) | Self::Provider(_) | Self::UpstreamStatus(_) => {
                tracing::warn!(error = %self, status = status.as_u16(), "API キー検証に失敗");
            }
            _ => {
                tracing::info!(error = %self, status = status.as_u16(), "API キー検証リクエストを拒否");
            }
        }

        (
            status,
            Json(ErrorResponse::new(self.to_string()).with_valid(false)),
        )
            .into_response()
    }
}
