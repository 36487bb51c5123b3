//! # API キー
//!
//! クライアントが持ち込んだサードパーティ API キーの形式検証と、
//! 疎通確認（プローブ）結果の表現を扱う。
//!
//! ## 検証の順序
//!
//! 1. [`ApiKeyCandidate::new`] で空白除去・必須チェック
//! 2. [`Provider::from_request`] でプロバイダを決定（未指定時は OpenRouter）
//! 3. [`Provider::validate_format`] で形式チェック
//!
//! 形式チェックを通過したキーだけがネットワーク越しのプローブに進む。

use serde::Serialize;

use crate::DomainError;

/// OpenRouter キーの最小文字数
pub const OPENROUTER_MIN_KEY_LENGTH: usize = 20;

/// OpenRouter キーとして認識するプレフィックス
///
/// `sk-or-v1-` が現行形式、`sk-or-` はバージョン表記のない旧形式。
pub const OPENROUTER_KEY_PREFIXES: [&str; 2] = ["sk-or-v1-", "sk-or-"];

/// 検証対象の API キー
///
/// 前後の空白を除去した値を保持する。
/// 秘匿情報のため `Debug` 出力はマスクし、`Display` は実装しない。
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKeyCandidate(String);

impl std::fmt::Debug for ApiKeyCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKeyCandidate")
            .field(&"[REDACTED]")
            .finish()
    }
}

impl ApiKeyCandidate {
    /// 空白除去 + 空チェックを行って作成する
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::MissingApiKey);
        }
        Ok(Self(value))
    }

    /// 平文のキーを取得する（プローブ時の Authorization ヘッダー用）
    pub fn expose(&self) -> &str {
        &self.0
    }
}

/// 検証に対応しているプロバイダ
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Provider {
    /// OpenRouter（<https://openrouter.ai>）
    #[default]
    OpenRouter,
}

impl Provider {
    /// リクエストの `provider` フィールドからプロバイダを決定する
    ///
    /// 未指定の場合は [`Provider::OpenRouter`] とする。
    pub fn from_request(name: Option<&str>) -> Result<Self, DomainError> {
        match name {
            None => Ok(Self::default()),
            Some(name) => name
                .trim()
                .parse()
                .map_err(|_| DomainError::UnsupportedProvider(name.to_string())),
        }
    }

    /// プロバイダ固有のキー形式を検証する
    pub fn validate_format(&self, key: &ApiKeyCandidate) -> Result<(), DomainError> {
        match self {
            Self::OpenRouter => {
                let expected = OPENROUTER_KEY_PREFIXES
                    .iter()
                    .map(|p| format!("'{p}'"))
                    .collect::<Vec<_>>()
                    .join(" or ");

                if key.expose().chars().count() < OPENROUTER_MIN_KEY_LENGTH {
                    return Err(DomainError::InvalidKeyFormat(format!(
                        "Invalid OpenRouter API key format: key must be at least {OPENROUTER_MIN_KEY_LENGTH} characters and start with {expected}"
                    )));
                }

                if !OPENROUTER_KEY_PREFIXES
                    .iter()
                    .any(|prefix| key.expose().starts_with(prefix))
                {
                    return Err(DomainError::InvalidKeyFormat(format!(
                        "Invalid OpenRouter API key format: key must start with {expected}"
                    )));
                }

                Ok(())
            }
        }
    }
}

/// プローブの結果、キーが有効と判定されたかどうか
///
/// 「無効なキー」はエラーではなく正常な検証結果として扱う。
/// レート制限やタイムアウトなど呼び出し元が別の対応を取るべきケースは
/// このenumではなく各サービスのエラー型で表現する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// プロバイダがキーを受け付けた
    Valid,
    /// プロバイダがキーを拒否した、または判定不能だった
    Invalid,
}

impl VerificationOutcome {
    /// レスポンスの `valid` フィールド値
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}
