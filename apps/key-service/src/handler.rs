//! # HTTP リクエストハンドラ
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `verify_api_key`: API キー検証

pub mod health;
pub mod verify_api_key;

pub use health::health_check;
pub use verify_api_key::{KeyState, VerifyApiKeyRequest, VerifyApiKeyResponse, verify_api_key};
