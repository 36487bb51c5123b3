//! # アカウント削除
//!
//! 退会時に削除するユーザーデータの範囲と、削除失敗時の方針を定義する。
//!
//! ## 削除の順序
//!
//! 1. [`DeletionTargets`] の各テーブルから `user_id` 一致行を削除（リスト順）
//! 2. 認証サービス上のユーザー（アイデンティティ）を削除
//!
//! 手順 1 はクリーンアップであり、手順 2 の前提条件ではない。
//! 手順 1 の失敗をどう扱うかは [`CleanupPolicy`] で決まる。

/// ユーザーデータの所有者を示すカラム名
pub const OWNER_COLUMN: &str = "user_id";

/// ユーザーデータを保持するテーブル（削除順）
pub const USER_DATA_TABLES: [&str; 7] = [
    "user_preferences",
    "subscriptions",
    "user_stats",
    "user_feedback",
    "user_activities",
    "chat_conversations",
    "chat_messages",
];

/// 削除対象テーブルの固定リスト
///
/// 実行時に導出せず、静的な設定として扱う。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletionTargets;

impl DeletionTargets {
    /// 削除対象のテーブル名をリスト順に返す
    pub fn tables() -> &'static [&'static str] {
        &USER_DATA_TABLES
    }

    /// 所有者カラム名
    pub fn owner_column() -> &'static str {
        OWNER_COLUMN
    }
}

/// ユーザーデータ削除に失敗したときの方針
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum CleanupPolicy {
    /// 失敗をログに残して続行し、アイデンティティを削除する
    #[default]
    BestEffort,
    /// 1テーブルでも失敗したらアイデンティティを削除せずに中断する
    Strict,
}

impl CleanupPolicy {
    /// クリーンアップ失敗時にアイデンティティ削除を中断するかどうか
    pub fn aborts_on_failure(self) -> bool {
        matches!(self, Self::Strict)
    }
}
