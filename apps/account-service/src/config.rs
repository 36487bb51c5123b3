//! # Account Service 設定
//!
//! 環境変数から Account Service サーバーの設定を読み込む。

use std::{fmt, time::Duration};

use doky_domain::deletion::CleanupPolicy;
use doky_shared::config::{ConfigError, EnvReader};

/// バックエンド（Supabase）へのリクエストのデフォルトタイムアウト（秒）
const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 10;

/// Account Service サーバーの設定
#[derive(Clone)]
pub struct AccountConfig {
    /// バインドアドレス
    pub host:             String,
    /// ポート番号
    pub port:             u16,
    /// Supabase プロジェクト URL
    pub supabase_url:     String,
    /// Supabase service role キー
    pub service_role_key: String,
    /// テーブル削除・ユーザー削除の1リクエストあたりのタイムアウト
    pub backend_timeout:  Duration,
    /// ユーザーデータ削除に失敗したときの方針
    pub cleanup_policy:   CleanupPolicy,
}

impl fmt::Debug for AccountConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("supabase_url", &self.supabase_url)
            .field("service_role_key", &"[REDACTED]")
            .field("backend_timeout", &self.backend_timeout)
            .field("cleanup_policy", &self.cleanup_policy)
            .finish()
    }
}

impl AccountConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_reader(&EnvReader::system())
    }

    /// 任意の取得元から設定を読み込む
    pub fn from_reader<F>(env: &EnvReader<F>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host:             env.or_default("ACCOUNT_HOST", "0.0.0.0"),
            port:             env.parse("ACCOUNT_PORT")?,
            supabase_url:     env.required("SUPABASE_URL")?,
            service_role_key: env.required("SUPABASE_SERVICE_ROLE_KEY")?,
            backend_timeout:  Duration::from_secs(
                env.parse_or("BACKEND_TIMEOUT_SECS", DEFAULT_BACKEND_TIMEOUT_SECS)?,
            ),
            cleanup_policy:   env.parse_or("CLEANUP_POLICY", CleanupPolicy::default())?,
        })
    }
}
