//! # RestTableDeleter
//!
//! 行ストア（Supabase REST / PostgREST）の1テーブルから、
//! `user_id` が一致する行を削除する。
//!
//! `Prefer: count=exact` を付与すると削除件数が `Content-Range: */N` で返るため、
//! それを [`DeletionResult::deleted_count`] に使う。

use async_trait::async_trait;
use doky_domain::{deletion::DeletionTargets, user::UserId};
use reqwest::{Method, header::CONTENT_RANGE};

use super::{DeletionResult, UserDataDeleter};
use crate::{error::InfraError, response::error_message, supabase::SupabaseClient};

/// 1テーブル分の Deleter
pub struct RestTableDeleter {
    client: SupabaseClient,
    table:  &'static str,
}

impl RestTableDeleter {
    pub fn new(client: SupabaseClient, table: &'static str) -> Self {
        Self { client, table }
    }
}

#[async_trait]
impl UserDataDeleter for RestTableDeleter {
    fn name(&self) -> &'static str {
        self.table
    }

    #[tracing::instrument(skip_all, level = "debug", fields(table = self.table))]
    async fn delete(&self, user_id: &UserId) -> Result<DeletionResult, InfraError> {
        let filter = format!("eq.{}", user_id.as_str());
        let response = self
            .client
            .admin_request(Method::DELETE, &format!("/rest/v1/{}", self.table))
            .query(&[(DeletionTargets::owner_column(), filter.as_str())])
            .header("Prefer", "count=exact")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InfraError::upstream(status.as_u16(), error_message(&body)));
        }

        let deleted_count = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_total_count)
            .unwrap_or(0);

        Ok(DeletionResult { deleted_count })
    }
}

/// `Content-Range` ヘッダー（`0-2/3`、`*/3` など）から総件数を取り出す
fn parse_total_count(content_range: &str) -> Option<u64> {
    content_range.rsplit_once('/')?.1.parse().ok()
}
