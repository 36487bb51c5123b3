//! # Account Service エラー定義
//!
//! Account Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! メッセージはそのままクライアントに返すため英語で定義する。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use doky_shared::ErrorResponse;
use thiserror::Error;

/// Account Service で発生するエラー
#[derive(Debug, Error)]
pub enum AccountError {
    /// Authorization ヘッダーがない
    #[error("Authorization header is required")]
    MissingAuthorization,

    /// トークンからユーザーを解決できない
    ///
    /// 削除済みユーザーのトークンで再度呼び出した場合もこれになる。
    #[error("Invalid or expired token")]
    InvalidToken,

    /// ユーザーデータ削除に失敗した（`CleanupPolicy::Strict` のときのみ）
    #[error("Failed to delete user data: {}", .0.join(", "))]
    CleanupFailed(Vec<&'static str>),

    /// アイデンティティの削除に失敗した
    #[error("Failed to delete user account: {0}")]
    IdentityDeletionFailed(String),
}

impl AccountError {
    /// HTTP ステータスコード
    ///
    /// 呼び出し元の Edge Function 互換クライアントは全エラーを 400 として扱う。
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingAuthorization
            | Self::InvalidToken
            | Self::CleanupFailed(_)
            | Self::IdentityDeletionFailed(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        match &self {
            Self::CleanupFailed(_) | Self::IdentityDeletionFailed(_) => {
                tracing::error!(error = %self, "アカウント削除に失敗");
            }
            Self::MissingAuthorization | Self::InvalidToken => {
                tracing::info!(error = %self, "アカウント削除リクエストを拒否");
            }
        }

        (self.status(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
