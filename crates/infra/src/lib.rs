//! # Doky インフラ層
//!
//! 外部システムとの通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **認証サービス**: ベアラートークンからのユーザー解決、ユーザー削除（Supabase Auth）
//! - **行ストア**: ユーザーデータのテーブル単位削除（Supabase REST）
//! - **キープローブ**: サードパーティ API キーの疎通確認（OpenRouter）
//!
//! ## 依存関係
//!
//! ```text
//! apps → infra → domain
//! ```
//!
//! インフラ層は HTTP ステータスやレスポンスボディをそのまま返し、
//! それをどう解釈するか（有効/無効/エラー）はアプリ層のユースケースが決める。
//!
//! ## モジュール構成
//!
//! - [`deletion`] - ユーザーデータ削除基盤（`DeletionRegistry`）
//! - [`error`] - インフラ層エラー定義
//! - [`identity`] - 認証サービスクライアント
//! - [`probe`] - API キープローブ
//! - [`supabase`] - Supabase への共通 HTTP クライアント

pub mod deletion;
pub mod error;
pub mod identity;
pub mod probe;
mod response;
pub mod supabase;

pub use error::{InfraError, InfraErrorKind};
pub use identity::{IdentityClient, SupabaseIdentityClient};
pub use probe::{KeyProbe, OpenRouterProbe, ProbeReply};
pub use supabase::SupabaseClient;
