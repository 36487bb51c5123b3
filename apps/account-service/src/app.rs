//! # ルーター構築
//!
//! ルート定義とレイヤー構成を担当する。依存コンポーネントの初期化は `main.rs` で行う。
//!
//! ## レイヤー構成（外側から）
//!
//! 1. CORS（プリフライト応答 + `Access-Control-Allow-Origin`）
//! 2. `Access-Control-Allow-Headers` の付与
//! 3. Request ID の生成・伝播とリクエストスパン
//! 4. Canonical Log Line

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

use crate::handler::{AccountState, delete_user, health_check};

/// アカウント削除エンドポイントのパス
pub const DELETE_USER_PATH: &str = "/functions/v1/delete-user";

/// ルーターを構築する
pub fn build_router(state: Arc<AccountState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(DELETE_USER_PATH, any(delete_user))
        .with_state(state)
        .layer(CanonicalLogLineLayer)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(allow_headers_layer())
        .layer(cors_layer())
}
