//! # 成功レスポンスエンベロープ
//!
//! Edge Function 互換の成功レスポンス `{ "success": true, "message": ... }` を提供する。
//!
//! 失敗時のエンベロープは [`ErrorResponse`](crate::ErrorResponse) を参照。

use serde::{Deserialize, Serialize};

/// メッセージ付きの成功レスポンス
///
/// 処理結果を人間可読なメッセージで返すエンドポイント（アカウント削除など）で使用する。
///
/// ## 使用例
///
/// ```
/// use doky_shared::MessageResponse;
///
/// let response = MessageResponse::new("deleted");
/// assert!(response.success);
/// assert_eq!(response.message, "deleted");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    /// 新しい成功レスポンスを作成する
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
