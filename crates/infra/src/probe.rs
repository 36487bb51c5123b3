//! # API キープローブ
//!
//! サードパーティプロバイダに1回だけ GET を送り、キーが受け付けられるかを確認する。
//!
//! ## 責務の分担
//!
//! プローブはステータスコードと（エラー時の）メッセージを返すだけで、
//! それを有効/無効/エラーのどれに分類するかはユースケースが決める。
//! タイムアウトのみ、呼び出しを中断する必要があるためここで扱う。

use std::time::Duration;

use async_trait::async_trait;
use doky_domain::api_key::ApiKeyCandidate;

use crate::{error::InfraError, response::error_message};

/// OpenRouter API のデフォルトのベース URL
pub const OPENROUTER_DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// プローブのデフォルトタイムアウト
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// プローブへの応答
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReply {
    /// HTTP ステータスコード
    pub status:  u16,
    /// ステータスが 400 以上のとき、ボディから抽出できたエラーメッセージ
    pub message: Option<String>,
}

/// キープローブトレイト
///
/// テスト時にスタブを使用できるようトレイトで定義。
#[async_trait]
pub trait KeyProbe: Send + Sync {
    /// キーをベアラー認証に使ってプロバイダにリクエストを送る
    ///
    /// # エラー
    ///
    /// - タイムアウト超過: `InfraErrorKind::Timeout`
    /// - 接続失敗など: `InfraErrorKind::Http`
    async fn probe(&self, key: &ApiKeyCandidate) -> Result<ProbeReply, InfraError>;

    /// 設定されたタイムアウト
    fn timeout(&self) -> Duration;
}

/// OpenRouter のキー情報エンドポイント（`GET /key`）を使うプローブ
///
/// クレジットを消費せず、無効なキーには 401 を返す。
#[derive(Debug, Clone)]
pub struct OpenRouterProbe {
    base_url: String,
    timeout:  Duration,
    client:   reqwest::Client,
}

impl OpenRouterProbe {
    /// 新しいプローブを作成する
    ///
    /// # 引数
    ///
    /// - `base_url`: API のベース URL（例: [`OPENROUTER_DEFAULT_BASE_URL`]）
    /// - `timeout`: リクエスト全体のタイムアウト
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            client: reqwest::Client::new(),
        }
    }

    async fn send(&self, key: &ApiKeyCandidate) -> Result<ProbeReply, InfraError> {
        let url = format!("{}/key", self.base_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(key.expose())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        let message = if status.is_client_error() || status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            error_message(&body)
        } else {
            None
        };

        Ok(ProbeReply {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl KeyProbe for OpenRouterProbe {
    #[tracing::instrument(skip_all, level = "debug", fields(timeout_secs = self.timeout.as_secs()))]
    async fn probe(&self, key: &ApiKeyCandidate) -> Result<ProbeReply, InfraError> {
        // 超過時は future をドロップし、送信中のリクエストごと中断する
        match tokio::time::timeout(self.timeout, self.send(key)).await {
            Ok(result) => result,
            Err(_elapsed) => Err(InfraError::timeout(self.timeout)),
        }
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}
