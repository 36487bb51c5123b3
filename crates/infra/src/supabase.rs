//! # Supabase クライアント
//!
//! 認証サービス（`/auth/v1`）と行ストア（`/rest/v1`）に共通する接続情報を保持する。
//!
//! 管理操作（ユーザー削除、RLS を越えた行削除）を行うため、
//! service role キーを `apikey` と `Authorization` の両方に付与する。

use std::{fmt, time::Duration};

use reqwest::RequestBuilder;

use crate::error::InfraError;

/// Supabase への共通 HTTP クライアント
///
/// `reqwest::Client` は内部で接続プールを共有するため、clone は安価。
#[derive(Clone)]
pub struct SupabaseClient {
    base_url:         String,
    service_role_key: String,
    http:             reqwest::Client,
}

impl fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("base_url", &self.base_url)
            .field("service_role_key", &"[REDACTED]")
            .finish()
    }
}

impl SupabaseClient {
    /// 新しいクライアントを作成する
    ///
    /// # 引数
    ///
    /// - `base_url`: プロジェクト URL（例: `https://xyzcompany.supabase.co`）
    /// - `service_role_key`: service role キー
    /// - `timeout`: 1リクエストあたりのタイムアウト
    pub fn new(
        base_url: &str,
        service_role_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, InfraError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            service_role_key: service_role_key.into(),
            http,
        })
    }

    /// プロジェクト URL にパスを連結する
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// service role 権限のリクエストを組み立てる
    pub(crate) fn admin_request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
    }

    /// 呼び出し元のトークンでリクエストを組み立てる
    ///
    /// `apikey` はプロジェクトの識別に必要なため service role キーを付与し、
    /// `Authorization` には呼び出し元のトークンを付与する。
    pub(crate) fn user_request(&self, method: reqwest::Method, path: &str, token: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header("apikey", &self.service_role_key)
            .bearer_auth(token)
    }
}
