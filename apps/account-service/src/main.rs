//! # Account Service サーバー
//!
//! 退会（アカウント削除）を担当する API サーバー。
//!
//! ## 処理の流れ
//!
//! ```text
//! ┌────────┐  Bearer  ┌─────────────────┐  GET /auth/v1/user             ┌──────────┐
//! │ Client │─────────→│ Account Service │───────────────────────────────→│          │
//! └────────┘          │                 │  DELETE /rest/v1/{table} × 7   │ Supabase │
//!                     │                 │───────────────────────────────→│          │
//!                     │                 │  DELETE /auth/v1/admin/users   │          │
//!                     └─────────────────┘───────────────────────────────→└──────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `ACCOUNT_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `ACCOUNT_PORT` | **Yes** | ポート番号 |
//! | `SUPABASE_URL` | **Yes** | Supabase プロジェクト URL |
//! | `SUPABASE_SERVICE_ROLE_KEY` | **Yes** | service role キー |
//! | `BACKEND_TIMEOUT_SECS` | No | Supabase への1リクエストのタイムアウト（デフォルト: `10`） |
//! | `CLEANUP_POLICY` | No | `best-effort`（デフォルト）または `strict` |
//!
//! ## 起動方法
//!
//! ```bash
//! ACCOUNT_PORT=18101 SUPABASE_URL=https://... SUPABASE_SERVICE_ROLE_KEY=... \
//!   cargo run -p doky-account-service
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use doky_account_service::{
    app::build_router,
    config::AccountConfig,
    handler::AccountState,
    usecase::DeleteAccountUseCaseImpl,
};
use doky_infra::{
    IdentityClient,
    SupabaseClient,
    SupabaseIdentityClient,
    deletion::DeletionRegistry,
};
use doky_shared::observability::TracingConfig;
use tokio::net::TcpListener;

/// Account Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("account-service");
    doky_shared::observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "account-service").entered();

    // 設定読み込み
    let config = AccountConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        cleanup_policy = %config.cleanup_policy,
        backend_timeout_secs = config.backend_timeout.as_secs(),
        "Account Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // 依存コンポーネントを初期化
    let supabase = SupabaseClient::new(
        &config.supabase_url,
        config.service_role_key.clone(),
        config.backend_timeout,
    )
    .context("Supabase クライアントの初期化に失敗しました")?;
    let identity_client: Arc<dyn IdentityClient> =
        Arc::new(SupabaseIdentityClient::new(supabase.clone()));
    let registry = Arc::new(DeletionRegistry::with_all_deleters(supabase));
    let usecase = DeleteAccountUseCaseImpl::new(identity_client, registry, config.cleanup_policy);
    let state = Arc::new(AccountState {
        usecase: Arc::new(usecase),
    });

    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Account Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
