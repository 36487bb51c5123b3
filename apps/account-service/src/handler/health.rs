//! # ヘルスチェックハンドラ
//!
//! レスポンス型は [`doky_shared::HealthResponse`] を参照。

use axum::Json;
use doky_shared::HealthResponse;

/// Account Service のヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
