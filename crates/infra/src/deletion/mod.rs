//! # ユーザーデータ削除基盤
//!
//! 退会時のユーザーデータ削除を、テーブルごとに独立した処理として実行する基盤モジュール。
//!
//! ## 概要
//!
//! 削除対象テーブルごとの `UserDataDeleter` 実装を `DeletionRegistry` に登録し、
//! 一括削除を行う。各テーブルの成否は [`DeletionReport`] に登録順で集約される。
//! 1テーブルの失敗は残りのテーブルの削除を妨げない。

mod registry;
mod rest_table;

use async_trait::async_trait;
use doky_domain::user::UserId;
pub use registry::DeletionRegistry;
pub use rest_table::RestTableDeleter;

use crate::error::InfraError;

/// 1テーブル分の削除結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionResult {
    /// 削除された件数（行ストアが件数を返さない場合は 0）
    pub deleted_count: u64,
}

/// ユーザーデータ一括削除の結果レポート
///
/// 全 Deleter の実行結果を登録順に集約する。部分失敗時も全 Deleter を実行し、
/// 成功/失敗を分けて報告する。
#[derive(Debug, Default)]
pub struct DeletionReport {
    /// 削除に成功した Deleter の名前と結果
    pub succeeded: Vec<(&'static str, DeletionResult)>,
    /// 削除に失敗した Deleter の名前とエラー
    pub failed:    Vec<(&'static str, InfraError)>,
}

impl DeletionReport {
    /// いずれかの Deleter が失敗したかどうか
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// 削除された総件数
    pub fn total_deleted(&self) -> u64 {
        self.succeeded
            .iter()
            .map(|(_, result)| result.deleted_count)
            .sum()
    }

    /// 失敗した Deleter の名前一覧
    pub fn failed_names(&self) -> Vec<&'static str> {
        self.failed.iter().map(|(name, _)| *name).collect()
    }
}

/// ユーザーデータ削除トレイト
///
/// 削除対象ごとにこのトレイトを実装し、退会時のデータ削除を提供する。
#[async_trait]
pub trait UserDataDeleter: Send + Sync {
    /// この Deleter の名前（削除対象のテーブル名）
    fn name(&self) -> &'static str;

    /// 指定ユーザーのデータを削除する
    async fn delete(&self, user_id: &UserId) -> Result<DeletionResult, InfraError>;
}
