//! 上流サービスのエラーレスポンスからメッセージを取り出す。
//!
//! Supabase Auth は `{"msg": ..}` / `{"message": ..}`、PostgREST は `{"message": ..}`、
//! OpenRouter は `{"error": {"message": ..}}` を返すため、既知の形を順に探す。

use serde_json::Value;

/// レスポンスボディからエラーメッセージを抽出する
///
/// JSON でない、または既知のフィールドがない場合は `None`。
pub(crate) fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    let candidates = [
        value.pointer("/error/message"),
        value.get("error").filter(|v| v.is_string()),
        value.get("message"),
        value.get("msg"),
        value.get("error_description"),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}
