//! # アカウント削除ユースケース
//!
//! 1. トークンからユーザーを解決
//! 2. 全削除対象テーブルからユーザーデータを削除（1テーブルの失敗で止めない）
//! 3. 認証サービス上のユーザーを削除
//!
//! 手順 3 の成否がリクエストの結果を決める。手順 2 の失敗は
//! [`CleanupPolicy::Strict`] のときだけ手順 3 を中断させる。

use std::sync::Arc;

use doky_domain::{deletion::CleanupPolicy, user::UserId};
use doky_infra::{IdentityClient, deletion::DeletionRegistry};

use crate::error::AccountError;

/// アカウント削除の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDeletion {
    pub user_id:       UserId,
    /// 削除できた行の総数
    pub rows_deleted:  u64,
    /// 削除に失敗したテーブル（ベストエフォート時のみ非空になりうる）
    pub failed_tables: Vec<&'static str>,
}

/// アカウント削除ユースケースの実装
pub struct DeleteAccountUseCaseImpl {
    identity_client: Arc<dyn IdentityClient>,
    registry:        Arc<DeletionRegistry>,
    cleanup_policy:  CleanupPolicy,
}

impl DeleteAccountUseCaseImpl {
    /// 新しいユースケースインスタンスを作成
    pub fn new(
        identity_client: Arc<dyn IdentityClient>,
        registry: Arc<DeletionRegistry>,
        cleanup_policy: CleanupPolicy,
    ) -> Self {
        Self {
            identity_client,
            registry,
            cleanup_policy,
        }
    }

    /// ベアラートークンの持ち主のアカウントを削除する
    pub async fn delete_account(&self, token: &str) -> Result<AccountDeletion, AccountError> {
        let user = match self.identity_client.resolve_user(token).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(AccountError::InvalidToken),
            Err(e) => {
                tracing::warn!(error = %e, detail = %e.detail(), "トークンの解決に失敗");
                return Err(AccountError::InvalidToken);
            }
        };
        let user_id = user.id;

        let report = self.registry.delete_all(&user_id).await;
        tracing::info!(
            user.id = %user_id,
            tables.succeeded = report.succeeded.len(),
            tables.failed = report.failed.len(),
            rows_deleted = report.total_deleted(),
            "ユーザーデータの削除を完了"
        );

        if report.has_failures() && self.cleanup_policy.aborts_on_failure() {
            return Err(AccountError::CleanupFailed(report.failed_names()));
        }

        self.identity_client
            .delete_user(&user_id)
            .await
            .map_err(|e| AccountError::IdentityDeletionFailed(e.detail()))?;

        Ok(AccountDeletion {
            user_id,
            rows_deleted: report.total_deleted(),
            failed_tables: report.failed_names(),
        })
    }
}
