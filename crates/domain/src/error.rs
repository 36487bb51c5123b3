//! # ドメイン層エラー定義
//!
//! リクエスト内容がビジネスルールに違反している状態を表現するエラー型。
//!
//! `#[error(...)]` のメッセージはそのままクライアントに返されるため、
//! モバイルクライアントと合意済みの英語メッセージを使用する。
//! HTTP ステータスへの変換は各サービスのエラー型が担う（いずれも 400 Bad Request）。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// `apiKey` が未指定、文字列以外、または空白のみ
    #[error("apiKey is required and must be a non-empty string")]
    MissingApiKey,

    /// API キーがプロバイダ固有の形式に一致しない
    ///
    /// メッセージには期待されるプレフィックスを含める。
    #[error("{0}")]
    InvalidKeyFormat(String),

    /// 検証に対応していないプロバイダ
    #[error("Provider {0} not supported for verification")]
    UnsupportedProvider(String),

    /// その他の入力値検証エラー
    #[error("{0}")]
    Validation(String),
}
