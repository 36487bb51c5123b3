//! # エラーレスポンスエンベロープ
//!
//! 全サービスで共通の失敗レスポンス `{ "success": false, "error": ... }` を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - HTTP ステータスはエンベロープに含めない。各サービスのエラー型がバリアントごとに
//!   ステータスを保持し、axum の `IntoResponse` 変換時に付与する
//! - API キー検証のように `valid` フィールドを併記するエンドポイントは
//!   [`with_valid`](ErrorResponse::with_valid) で付加する

use serde::{Deserialize, Serialize};

/// 失敗レスポンス
///
/// `valid` は未設定の場合シリアライズされない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error:   String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid:   Option<bool>,
}

impl ErrorResponse {
    /// エラーメッセージから失敗レスポンスを作成する
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error:   error.into(),
            valid:   None,
        }
    }

    /// `valid` フィールドを付加する
    pub fn with_valid(mut self, valid: bool) -> Self {
        self.valid = Some(valid);
        self
    }
}
