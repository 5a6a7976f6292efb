// 呼び出し応答ドキュメント
//
// このモジュールはAPI Gateway形式の固定応答レコードの構造を定義する。
// 応答は呼び出しごとに新規作成され、構築後は変更されない。

use std::collections::HashMap;

use serde::Serialize;

/// Content-Typeヘッダーの固定値
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// 呼び出し応答レコード
///
/// Lambdaランタイムに返却するAPI Gateway形式の応答。
/// JSONシリアライズ時のフィールド名はプラットフォーム規約に従う
/// （`statusCode`はキャメルケース）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvocationResponse {
    /// HTTPステータスコード（常に200）
    #[serde(rename = "statusCode")]
    pub status_code: u16,

    /// 応答ヘッダー（Content-Typeの1エントリのみ）
    pub headers: HashMap<String, String>,

    /// JSON文字列化された応答本文（`{"message": <固定文字列>}`）
    pub body: String,
}

impl InvocationResponse {
    /// 固定メッセージを持つ200応答を作成する
    ///
    /// # Arguments
    /// * `message` - 本文の`message`フィールドに入る固定文字列
    pub fn ok_with_message(message: &str) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string());

        Self {
            status_code: 200,
            headers,
            body: serde_json::json!({ "message": message }).to_string(),
        }
    }
}
