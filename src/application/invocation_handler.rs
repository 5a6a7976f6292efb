/// 呼び出しハンドラー
///
/// Lambdaが呼び出された際の処理を実行する。
/// イベントをログに記録し、固定メッセージの200応答を返却する。
use serde_json::Value;
use tracing::info;

use crate::domain::InvocationResponse;

/// 固定メッセージ応答を返す呼び出しハンドラー
///
/// foo/bar両関数で共有される唯一のハンドラー実装。
/// 関数ごとの違いは応答メッセージの文字列のみであるため、
/// メッセージをパラメーターとして受け取る。
pub struct InvocationHandler {
    /// 応答本文に入る固定メッセージ
    message: String,
}

impl InvocationHandler {
    /// 新しいInvocationHandlerを作成
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// 呼び出しイベントを処理
    ///
    /// # 処理フロー
    /// 1. 受信イベントをログ出力（診断用）
    /// 2. 固定メッセージの200応答を構築して返却
    ///
    /// イベントの内容は参照しないため、どんな入力でも必ず成功する。
    pub fn handle(&self, event: &Value) -> InvocationResponse {
        // 受信イベントを記録（形式・出力先はログ基盤が管理）
        info!(event = %event, "イベント受信");

        InvocationResponse::ok_with_message(&self.message)
    }
}
