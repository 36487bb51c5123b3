//! # 環境変数からの設定読み込み
//!
//! 各サービスの `Config::from_env` が共通で使う読み取りヘルパー。
//!
//! 値の取得元をクロージャで差し替えられるため、テストでプロセスの環境変数を
//! 書き換える必要がない。空文字列（空白のみを含む）は未設定として扱う。

use std::{env, str::FromStr};

use thiserror::Error;

/// 設定読み込みエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// 値をパースできない
    #[error("{name} の値が不正です: {value:?}")]
    Invalid {
        name:  &'static str,
        value: String,
    },
}

/// 環境変数リーダー
pub struct EnvReader<F> {
    lookup: F,
}

impl EnvReader<fn(&str) -> Option<String>> {
    /// プロセスの環境変数から読み取るリーダー
    pub fn system() -> Self {
        Self {
            lookup: |name| env::var(name).ok(),
        }
    }
}

impl<F> EnvReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// 任意の取得元から読み取るリーダー
    pub fn new(lookup: F) -> Self {
        Self { lookup }
    }

    fn get(&self, name: &str) -> Option<String> {
        (self.lookup)(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// 必須の値を読み取る
    pub fn required(&self, name: &'static str) -> Result<String, ConfigError> {
        self.get(name).ok_or(ConfigError::Missing(name))
    }

    /// 値を読み取る。未設定ならデフォルト値を使う
    pub fn or_default(&self, name: &str, default: &str) -> String {
        self.get(name).unwrap_or_else(|| default.to_string())
    }

    /// 必須の値を読み取ってパースする
    pub fn parse<T: FromStr>(&self, name: &'static str) -> Result<T, ConfigError> {
        let value = self.required(name)?;
        parse_value(name, value)
    }

    /// 値を読み取ってパースする。未設定ならデフォルト値を使う
    pub fn parse_or<T: FromStr>(&self, name: &'static str, default: T) -> Result<T, ConfigError> {
        match self.get(name) {
            Some(value) => parse_value(name, value),
            None => Ok(default),
        }
    }
}

fn parse_value<T: FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}
