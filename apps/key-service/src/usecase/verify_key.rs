//! # API キー検証ユースケース
//!
//! 1. `apiKey` の必須チェック
//! 2. プロバイダの決定（未対応ならエラー）
//! 3. プロバイダ固有の形式チェック（ここで弾かれたキーはプローブしない）
//! 4. プローブ結果の分類
//!
//! ## プローブ結果の分類
//!
//! | プローブ結果 | 結果 |
//! |-------------|------|
//! | 200 | 有効 |
//! | 401 | 無効（エラーではない） |
//! | 429 | [`KeyError::RateLimited`] |
//! | その他 400 以上 | [`KeyError::Provider`] / [`KeyError::UpstreamStatus`] |
//! | タイムアウト | [`KeyError::Timeout`] |
//! | 接続失敗、200 以外の 2xx/3xx | 無効 |

use std::sync::Arc;

use doky_domain::api_key::{ApiKeyCandidate, Provider, VerificationOutcome};
use doky_infra::{KeyProbe, ProbeReply};

use crate::error::KeyError;

/// API キー検証の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyVerification {
    pub provider: Provider,
    pub outcome:  VerificationOutcome,
}

/// API キー検証ユースケースの実装
pub struct VerifyKeyUseCaseImpl {
    openrouter: Arc<dyn KeyProbe>,
}

impl VerifyKeyUseCaseImpl {
    /// 新しいユースケースインスタンスを作成
    pub fn new(openrouter: Arc<dyn KeyProbe>) -> Self {
        Self { openrouter }
    }

    fn probe_for(&self, provider: Provider) -> &dyn KeyProbe {
        match provider {
            Provider::OpenRouter => self.openrouter.as_ref(),
        }
    }

    /// API キーを検証する
    pub async fn verify(
        &self,
        api_key: Option<&str>,
        provider: Option<&str>,
    ) -> Result<KeyVerification, KeyError> {
        let key = ApiKeyCandidate::new(api_key.unwrap_or_default())?;
        let provider = Provider::from_request(provider)?;
        provider.validate_format(&key)?;

        let probe = self.probe_for(provider);
        let outcome = match probe.probe(&key).await {
            Ok(reply) => classify(reply)?,
            Err(e) if e.is_timeout() => return Err(KeyError::Timeout(probe.timeout())),
            Err(e) => {
                tracing::warn!(%provider, error = %e, "プローブに失敗したため無効として扱う");
                VerificationOutcome::Invalid
            }
        };

        tracing::info!(%provider, valid = outcome.is_valid(), "API キーを検証しました");

        Ok(KeyVerification { provider, outcome })
    }
}

/// プローブの応答を検証結果に分類する
fn classify(reply: ProbeReply) -> Result<VerificationOutcome, KeyError> {
    match reply.status {
        200 => Ok(VerificationOutcome::Valid),
        401 => Ok(VerificationOutcome::Invalid),
        429 => Err(KeyError::RateLimited),
        status if status >= 400 => Err(match reply.message {
            Some(message) => KeyError::Provider(message),
            None => KeyError::UpstreamStatus(status),
        }),
        status => {
            tracing::debug!(status, "想定外のステータスのため無効として扱う");
            Ok(VerificationOutcome::Invalid)
        }
    }
}
