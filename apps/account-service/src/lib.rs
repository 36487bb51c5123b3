//! # Account Service ライブラリ
//!
//! 退会（アカウント削除）エンドポイントのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app`: ルーターとレイヤー構成
//! - `config`: 環境変数からの設定読み込み
//! - `error`: エラー定義と HTTP レスポンスへの変換
//! - `handler`: HTTP ハンドラ
//! - `usecase`: アカウント削除のビジネスロジック

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
