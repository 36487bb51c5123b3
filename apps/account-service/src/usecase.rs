//! # ユースケース層
//!
//! Account Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **トレイトベースの設計**: ハンドラのテストでスタブに差し替えられるようにする
//! - **依存性注入**: 認証サービスクライアントと削除レジストリを外部から注入

pub mod delete_account;

use async_trait::async_trait;
pub use delete_account::{AccountDeletion, DeleteAccountUseCaseImpl};

use crate::error::AccountError;

/// アカウント削除ユースケーストレイト
#[async_trait]
pub trait AccountUseCase: Send + Sync {
    /// ベアラートークンの持ち主のアカウントを削除する
    ///
    /// ## 引数
    ///
    /// - `token`: `Bearer ` を除いたアクセストークン
    ///
    /// ## 戻り値
    ///
    /// - `Ok(AccountDeletion)`: アイデンティティまで削除できた
    /// - `Err(AccountError)`: トークンが無効、またはアイデンティティ削除に失敗
    async fn delete_account(&self, token: &str) -> Result<AccountDeletion, AccountError>;
}

#[async_trait]
impl AccountUseCase for DeleteAccountUseCaseImpl {
    async fn delete_account(&self, token: &str) -> Result<AccountDeletion, AccountError> {
        self.delete_account(token).await
    }
}
