//! # DeletionRegistry
//!
//! 全テーブルの `UserDataDeleter` を集約し、一括削除を提供する。

use doky_domain::{deletion::DeletionTargets, user::UserId};

use super::{DeletionReport, RestTableDeleter, UserDataDeleter};
use crate::supabase::SupabaseClient;

/// ユーザーデータ削除レジストリ
pub struct DeletionRegistry {
    deleters: Vec<Box<dyn UserDataDeleter>>,
}

impl Default for DeletionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DeletionRegistry {
    /// 空のレジストリを生成する
    pub fn new() -> Self {
        Self {
            deleters: Vec::new(),
        }
    }

    /// Deleter を登録する
    pub fn register(&mut self, deleter: Box<dyn UserDataDeleter>) {
        self.deleters.push(deleter);
    }

    /// 全削除対象テーブルの Deleter を登録済みのレジストリを生成する
    ///
    /// 登録順は [`DeletionTargets::tables`] の順序に従う。
    pub fn with_all_deleters(client: SupabaseClient) -> Self {
        let mut registry = Self::new();
        for &table in DeletionTargets::tables() {
            registry.register(Box::new(RestTableDeleter::new(client.clone(), table)));
        }
        registry
    }

    /// 期待される Deleter 名の一覧を返す（登録漏れ検出テスト用）
    pub fn expected_deleter_names() -> Vec<&'static str> {
        DeletionTargets::tables().to_vec()
    }

    /// 登録済み Deleter の名前一覧を返す
    pub fn registered_names(&self) -> Vec<&'static str> {
        self.deleters.iter().map(|d| d.name()).collect()
    }

    /// 全 Deleter でユーザーデータを削除する
    ///
    /// 登録順に1件ずつ実行し、成功/失敗を分けて [`DeletionReport`] で返す。
    /// 個別の Deleter がエラーを返しても、残りの Deleter は実行を継続する。
    pub async fn delete_all(&self, user_id: &UserId) -> DeletionReport {
        let mut report = DeletionReport::default();

        for deleter in &self.deleters {
            match deleter.delete(user_id).await {
                Ok(result) => {
                    tracing::debug!(
                        table = deleter.name(),
                        deleted_count = result.deleted_count,
                        "ユーザーデータを削除"
                    );
                    report.succeeded.push((deleter.name(), result));
                }
                Err(error) => {
                    tracing::warn!(
                        table = deleter.name(),
                        error = %error,
                        "ユーザーデータ削除に失敗（続行）"
                    );
                    report.failed.push((deleter.name(), error));
                }
            }
        }

        report
    }
}
