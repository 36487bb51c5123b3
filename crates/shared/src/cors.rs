//! # CORS レイヤー
//!
//! モバイルクライアント（Flutter Web を含む）から Edge Function 互換エンドポイントを
//! 呼び出すための CORS ヘッダーを付与する。
//!
//! ## 付与されるヘッダー
//!
//! | ヘッダー | 値 | 対象 |
//! |---------|----|------|
//! | `Access-Control-Allow-Origin` | `*` | 全レスポンス |
//! | `Access-Control-Allow-Headers` | [`ALLOWED_HEADERS`] | 全レスポンス |
//! | `Access-Control-Allow-Methods` | GET, POST, DELETE, OPTIONS | プリフライト |
//!
//! `OPTIONS` リクエストは [`cors_layer`] がハンドラに到達する前に空の 200 で応答する。

use http::{
    HeaderName,
    HeaderValue,
    Method,
    header::{ACCESS_CONTROL_ALLOW_HEADERS, AUTHORIZATION, CONTENT_TYPE},
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};

/// 許可するリクエストヘッダー（`Access-Control-Allow-Headers` の値）
pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// プリフライト応答とオリジン許可を担当する CORS レイヤーを生成する
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            CONTENT_TYPE,
        ])
}

/// プリフライト以外のレスポンスにも `Access-Control-Allow-Headers` を付与するレイヤー
///
/// tower-http の `CorsLayer` は許可ヘッダーをプリフライト応答にしか付与しないため、
/// 通常レスポンスには本レイヤーで補う。
pub fn allow_headers_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    )
}
