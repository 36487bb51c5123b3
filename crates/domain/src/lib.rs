//! # Doky ドメイン層
//!
//! アカウント削除と API キー検証のビジネスルールを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! apps → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（Supabase、外部プロバイダ）には一切依存しない。
//! HTTP やネットワークの概念を持ち込まず、値オブジェクトと検証ルールのみを扱う。
//!
//! ## モジュール構成
//!
//! - [`api_key`] - API キー候補、プロバイダ、検証結果
//! - [`deletion`] - 削除対象テーブルとクリーンアップポリシー
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`user`] - 呼び出し元ユーザーの識別子
//!
//! ## 使用例
//!
//! ```rust
//! use doky_domain::api_key::{ApiKeyCandidate, Provider};
//!
//! let provider = Provider::from_request(None)?;
//! let key = ApiKeyCandidate::new("  sk-or-v1-0123456789abcdef  ")?;
//! provider.validate_format(&key)?;
//! # Ok::<(), doky_domain::DomainError>(())
//! ```

pub mod api_key;
pub mod deletion;
pub mod error;
pub mod user;

pub use error::DomainError;
