//! # ユーザー
//!
//! 認証サービス（Supabase Auth）が発行した ID で呼び出し元を識別する。
//!
//! ID の形式（UUID など）は認証サービスの実装詳細であり、本サービスでは
//! 不透明な文字列として扱う。ベアラートークンから解決されたあとは
//! 1リクエストの間だけ保持し、永続化しない。

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// 認証サービス上のユーザー ID
///
/// 行ストアの各テーブルでは `user_id` カラムとして参照される。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// 文字列から ID を作成する
    ///
    /// 前後の空白は除去し、空文字列は拒否する。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("user id must not be empty".to_string()));
        }
        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// ベアラートークンから解決された呼び出し元
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticatedUser {
    pub id:    UserId,
    /// メールアドレス（匿名ユーザーなどでは存在しない）
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_user_idは前後の空白を除去する() {
        let id = UserId::new("  7f1c2a9e-5d4b-4c3a-9e8f-1a2b3c4d5e6f ").unwrap();
        assert_eq!(id.as_str(), "7f1c2a9e-5d4b-4c3a-9e8f-1a2b3c4d5e6f");
    }

    #[test]
    fn test_user_idは空文字列を拒否する() {
        assert!(UserId::new("   ").is_err());
    }

    #[test]
    fn test_authenticated_userは認証サービスのレスポンスからデシリアライズできる() {
        let json = r#"{"id": "user-1", "aud": "authenticated", "email": "a@example.com"}"#;
        let user: AuthenticatedUser = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, UserId::new("user-1").unwrap());
        assert_eq!(user.email.as_deref(), Some("a@example.com"));
    }

    #[test]
    fn test_authenticated_userはemailなしでもデシリアライズできる() {
        let json = r#"{"id": "anon-1", "is_anonymous": true}"#;
        let user: AuthenticatedUser = serde_json::from_str(json).unwrap();

        assert_eq!(user.email, None);
    }

    #[test]
    fn test_authenticated_userは空のidを拒否する() {
        let json = r#"{"id": ""}"#;
        assert!(serde_json::from_str::<AuthenticatedUser>(json).is_err());
    }
}
