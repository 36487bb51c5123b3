//! # ルーター構築
//!
//! レイヤー構成は Account Service と同じ（外側から CORS、許可ヘッダー付与、
//! Request ID とリクエストスパン、Canonical Log Line）。

use std::sync::Arc;

use axum::{
    Router,
    routing::{any, get},
};
use doky_shared::{
    canonical_log::CanonicalLogLineLayer,
    cors::{allow_headers_layer, cors_layer},
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::handler::{KeyState, health_check, verify_api_key};

/// API キー検証エンドポイントのパス
pub const VERIFY_API_KEY_PATH: &str = "/functions/v1/verify-api-key";

/// ルーターを構築する
///
/// POST 以外のメソッドもハンドラで `Method not allowed` を返すため、
/// ルートは全メソッドで受け付ける。
pub fn build_router(state: Arc<KeyState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(VERIFY_API_KEY_PATH, any(verify_api_key))
        .with_state(state)
        .layer(CanonicalLogLineLayer)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(allow_headers_layer())
        .layer(cors_layer())
}
