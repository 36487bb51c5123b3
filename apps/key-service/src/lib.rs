//! # Key Service ライブラリ
//!
//! サードパーティ API キー検証エンドポイントのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app`: ルーターとレイヤー構成
//! - `config`: 環境変数からの設定読み込み
//! - `error`: エラー定義と HTTP レスポンスへの変換
//! - `handler`: HTTP ハンドラ
//! - `usecase`: キー検証のビジネスロジック（プローブ結果の分類）

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
