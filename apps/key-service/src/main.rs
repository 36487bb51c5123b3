//! # Key Service サーバー
//!
//! クライアントが持ち込んだサードパーティ API キー（OpenRouter）を検証する API サーバー。
//!
//! キーは保存しない。形式チェックを通過したキーで1回だけプロバイダに
//! リクエストを送り、その応答で有効/無効を判定する。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `KEY_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `KEY_PORT` | **Yes** | ポート番号 |
//! | `OPENROUTER_BASE_URL` | No | OpenRouter API のベース URL（デフォルト: `https://openrouter.ai/api/v1`） |
//! | `PROBE_TIMEOUT_SECS` | No | プローブのタイムアウト（デフォルト: `10`） |
//!
//! ## 起動方法
//!
//! ```bash
//! KEY_PORT=18102 cargo run -p doky-key-service
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use doky_infra::{KeyProbe, OpenRouterProbe};
use doky_key_service::{
    app::build_router,
    config::KeyConfig,
    handler::KeyState,
    usecase::VerifyKeyUseCaseImpl,
};
use doky_shared::observability::TracingConfig;
use tokio::net::TcpListener;

/// Key Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("key-service");
    doky_shared::observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "key-service").entered();

    // 設定読み込み
    let config = KeyConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        openrouter_base_url = %config.openrouter_base_url,
        probe_timeout_secs = config.probe_timeout.as_secs(),
        "Key Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // 依存コンポーネントを初期化
    let openrouter: Arc<dyn KeyProbe> = Arc::new(OpenRouterProbe::new(
        &config.openrouter_base_url,
        config.probe_timeout,
    ));
    let state = Arc::new(KeyState {
        usecase: Arc::new(VerifyKeyUseCaseImpl::new(openrouter)),
    });

    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Key Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
