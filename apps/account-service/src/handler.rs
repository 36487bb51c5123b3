//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `delete_user`: アカウント削除

pub mod delete_user;
pub mod health;

pub use delete_user::{ACCOUNT_DELETED_MESSAGE, AccountState, delete_user};
pub use health::health_check;
