//! # ユースケース層
//!
//! Key Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **トレイトベースの設計**: ハンドラのテストでスタブに差し替えられるようにする
//! - **依存性注入**: プローブを外部から注入し、テストではネットワークを使わない

pub mod verify_key;

use async_trait::async_trait;
pub use verify_key::{KeyVerification, VerifyKeyUseCaseImpl};

use crate::error::KeyError;

/// API キー検証ユースケーストレイト
#[async_trait]
pub trait KeyUseCase: Send + Sync {
    /// API キーを検証する
    ///
    /// ## 引数
    ///
    /// - `api_key`: リクエストの `apiKey`（文字列でなければ `None`）
    /// - `provider`: リクエストの `provider`（未指定なら `None`）
    ///
    /// ## 戻り値
    ///
    /// - `Ok(KeyVerification)`: 有効/無効の判定結果
    /// - `Err(KeyError)`: 入力不正、レート制限、タイムアウト、プロバイダエラー
    async fn verify(
        &self,
        api_key: Option<&str>,
        provider: Option<&str>,
    ) -> Result<KeyVerification, KeyError>;
}

#[async_trait]
impl KeyUseCase for VerifyKeyUseCaseImpl {
    async fn verify(
        &self,
        api_key: Option<&str>,
        provider: Option<&str>,
    ) -> Result<KeyVerification, KeyError> {
        self.verify(api_key, provider).await
    }
}
