//! # インフラ層エラー定義
//!
//! 認証サービス・行ストア・外部プロバイダとの通信で発生するエラーを表現する。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別（Http, Timeout, Upstream 等）
//!
//! `Display` はログ向けの日本語メッセージ、[`InfraError::detail`] はクライアントに
//! そのまま返せる上流由来のメッセージを返す。

use std::{fmt, time::Duration};

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// `From<reqwest::Error>` 等の変換や convenience constructor でエラーを生成すると、
/// その時点のスパン情報が自動的にキャプチャされる。
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// HTTP 通信エラー
    ///
    /// 接続失敗、TLS エラー、reqwest 側のタイムアウトなど。
    #[error("HTTP 通信エラー: {0}")]
    Http(#[source] reqwest::Error),

    /// 呼び出し側で設定したタイムアウトの超過
    #[error("{}秒以内に応答がありませんでした", .0.as_secs())]
    Timeout(Duration),

    /// 上流サービスがエラーステータスを返した
    ///
    /// `message` はレスポンスボディから抽出できた場合のみ設定される。
    #[error("上流サービスがエラーを返しました: status={status}")]
    Upstream {
        /// HTTP ステータスコード
        status:  u16,
        /// 上流が返したエラーメッセージ
        message: Option<String>,
    },

    /// シリアライズ/デシリアライズエラー
    #[error("シリアライズエラー: {0}")]
    Serialization(#[source] serde_json::Error),

    /// 予期しないエラー
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}

// ===== InfraError のメソッド =====

impl InfraError {
    /// エラー種別を取得する
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// SpanTrace を取得する
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// タイムアウトに起因するエラーかどうか
    pub fn is_timeout(&self) -> bool {
        match &self.kind {
            InfraErrorKind::Timeout(_) => true,
            InfraErrorKind::Http(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// クライアントに返すためのメッセージ
    ///
    /// 上流サービスがメッセージを返していればそれを優先する。
    pub fn detail(&self) -> String {
        match &self.kind {
            InfraErrorKind::Http(e) => e.to_string(),
            InfraErrorKind::Timeout(timeout) => {
                format!("request timed out after {} seconds", timeout.as_secs())
            }
            InfraErrorKind::Upstream {
                message: Some(message),
                ..
            } => message.clone(),
            InfraErrorKind::Upstream {
                status,
                message: None,
            } => format!("upstream returned status {status}"),
            InfraErrorKind::Serialization(e) => e.to_string(),
            InfraErrorKind::Unexpected(msg) => msg.clone(),
        }
    }

    // ===== Convenience constructors =====

    /// タイムアウトエラーを生成する
    pub fn timeout(timeout: Duration) -> Self {
        Self {
            kind:       InfraErrorKind::Timeout(timeout),
            span_trace: SpanTrace::capture(),
        }
    }

    /// 上流ステータスエラーを生成する
    pub fn upstream(status: u16, message: Option<String>) -> Self {
        Self {
            kind:       InfraErrorKind::Upstream { status, message },
            span_trace: SpanTrace::capture(),
        }
    }

    /// 予期しないエラーを生成する
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self {
            kind:       InfraErrorKind::Unexpected(msg.into()),
            span_trace: SpanTrace::capture(),
        }
    }
}

// ===== トレイト実装 =====

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}

// ===== From 実装（SpanTrace 自動キャプチャ） =====

impl From<reqwest::Error> for InfraError {
    fn from(source: reqwest::Error) -> Self {
        Self {
            kind:       InfraErrorKind::Http(source),
            span_trace: SpanTrace::capture(),
        }
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(source: serde_json::Error) -> Self {
        Self {
            kind:       InfraErrorKind::Serialization(source),
            span_trace: SpanTrace::capture(),
        }
    }
}
