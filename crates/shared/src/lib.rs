//! # Doky 共有ユーティリティ
//!
//! このクレートは、Doky バックエンド全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, infra, apps）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum への依存は持たない（`IntoResponse` 変換は各サービスの責務）
//!
//! 環境変数の読み込み（[`config`]）は全サービス共通のため feature なしで提供する。
//!
//! ## Feature
//!
//! - `cors`: CORS ヘッダーを付与する tower-http レイヤー
//! - `observability`: トレーシング初期化、Request ID、Canonical Log Line

pub mod api_response;
#[cfg(feature = "observability")]
pub mod canonical_log;
pub mod config;
#[cfg(feature = "cors")]
pub mod cors;
pub mod error_response;
pub mod health;
pub mod observability;

pub use api_response::MessageResponse;
pub use error_response::ErrorResponse;
pub use health::HealthResponse;
