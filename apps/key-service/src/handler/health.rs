//! # ヘルスチェックハンドラ

use axum::Json;
use doky_shared::HealthResponse;

/// Key Service のヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
