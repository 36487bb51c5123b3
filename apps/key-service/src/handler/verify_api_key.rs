//! # API キー検証ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /functions/v1/verify-api-key` - API キーをプロバイダに問い合わせて検証
//!
//! ## チェック順序
//!
//! 1. `OPTIONS` → 空の 200（プリフライト）
//! 2. POST 以外 → 400
//! 3. Authorization ヘッダーなし → 401（値の検証はしない）
//! 4. ボディが読めない（サイズ超過など）/ 空 / JSON オブジェクトでない → 400
//! 5. 以降はユースケースに委譲

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{HeaderMap, Method, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
};
use doky_domain::api_key::Provider;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{error::KeyError, usecase::KeyUseCase};

/// API キー検証ハンドラの共有状態
pub struct KeyState {
    pub usecase: Arc<dyn KeyUseCase>,
}

// --- リクエスト/レスポンス型 ---

/// API キー検証リクエスト
///
/// 型の違いを「必須項目がない」と区別して報告するため、各フィールドは
/// `Value` のまま受け取る。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyApiKeyRequest {
    #[serde(default)]
    pub api_key:  Option<Value>,
    #[serde(default)]
    pub provider: Option<Value>,
}

/// API キー検証レスポンス
#[derive(Debug, Serialize)]
pub struct VerifyApiKeyResponse {
    pub success:  bool,
    pub valid:    bool,
    pub provider: Provider,
}

// --- ハンドラ ---

/// `POST /functions/v1/verify-api-key`
pub async fn verify_api_key(
    State(state): State<Arc<KeyState>>,
    method: Method,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, KeyError> {
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }
    if method != Method::POST {
        return Err(KeyError::MethodNotAllowed);
    }
    if headers.get(AUTHORIZATION).is_none_or(|v| v.is_empty()) {
        return Err(KeyError::MissingAuthorization);
    }

    // 読み込み失敗はメソッド・認証チェックの後で報告する
    let body = body.map_err(|rejection| KeyError::UnreadableBody(rejection.body_text()))?;
    let request = parse_body(&body)?;
    let provider = match &request.provider {
        None | Some(Value::Null) => None,
        Some(Value::String(name)) => Some(name.clone()),
        Some(other) => Some(other.to_string()),
    };

    let verification = state
        .usecase
        .verify(
            request.api_key.as_ref().and_then(Value::as_str),
            provider.as_deref(),
        )
        .await?;

    Ok(Json(VerifyApiKeyResponse {
        success:  true,
        valid:    verification.outcome.is_valid(),
        provider: verification.provider,
    })
    .into_response())
}

/// リクエストボディを JSON オブジェクトとして解釈する
///
/// derive した `Deserialize` は配列を位置指定のフィールドとして受け付けてしまうため、
/// オブジェクトであることを先に確認する。
fn parse_body(body: &[u8]) -> Result<VerifyApiKeyRequest, KeyError> {
    if body.trim_ascii().is_empty() {
        return Err(KeyError::EmptyBody);
    }
    let value: Value =
        serde_json::from_slice(body).map_err(|e| KeyError::MalformedBody(e.to_string()))?;
    if !value.is_object() {
        return Err(KeyError::MalformedBody("expected a JSON object".to_string()));
    }
    serde_json::from_value(value).map_err(|e| KeyError::MalformedBody(e.to_string()))
}
