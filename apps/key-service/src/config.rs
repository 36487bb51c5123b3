//! # Key Service 設定
//!
//! 環境変数から Key Service サーバーの設定を読み込む。

use std::time::Duration;

use doky_infra::probe::{DEFAULT_PROBE_TIMEOUT, OPENROUTER_DEFAULT_BASE_URL};
use doky_shared::config::{ConfigError, EnvReader};

/// Key Service サーバーの設定
#[derive(Debug, Clone)]
pub struct KeyConfig {
    /// バインドアドレス
    pub host:                String,
    /// ポート番号
    pub port:                u16,
    /// OpenRouter API のベース URL
    pub openrouter_base_url: String,
    /// プローブのタイムアウト
    pub probe_timeout:       Duration,
}

impl KeyConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_reader(&EnvReader::system())
    }

    /// 任意の取得元から設定を読み込む
    pub fn from_reader<F>(env: &EnvReader<F>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let probe_timeout_secs =
            env.parse_or("PROBE_TIMEOUT_SECS", DEFAULT_PROBE_TIMEOUT.as_secs())?;
        if probe_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                name:  "PROBE_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            host:                env.or_default("KEY_HOST", "0.0.0.0"),
            port:                env.parse("KEY_PORT")?,
            openrouter_base_url: env.or_default("OPENROUTER_BASE_URL", OPENROUTER_DEFAULT_BASE_URL),
            probe_timeout:       Duration::from_secs(probe_timeout_secs),
        })
    }
}
