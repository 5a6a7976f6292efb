/// Bar Lambdaエントリポイント
///
/// 呼び出しイベントをログに記録し、
/// 固定メッセージ「Bar was called!」の200応答を返却する。
use functions::application::InvocationHandler;
use functions::infrastructure::init_logging;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

/// Bar関数が返す固定メッセージ
const MESSAGE: &str = "Bar was called!";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("Bar Lambda関数を初期化");

    // Lambda関数を初期化して実行
    let func = service_fn(handler);
    lambda_runtime::run(func).await?;
    Ok(())
}

/// Lambda関数のメインハンドラー
///
/// # 処理フロー
/// 1. InvocationHandlerを使用してイベントを処理
/// 2. 固定応答をシリアライズして返却
async fn handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let response = InvocationHandler::new(MESSAGE).handle(&event.payload);
    Ok(serde_json::to_value(response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use functions::infrastructure::init_logging;
    use lambda_runtime::Context;
    use serde_json::json;

    /// 任意のフィールドを持つ入力で応答全体が規定の形になる
    #[tokio::test]
    async fn test_handler_returns_fixed_response_for_any_event() {
        init_logging();

        let event = LambdaEvent::new(json!({ "any": "value" }), Context::default());
        let response = handler(event).await.unwrap();

        assert_eq!(
            response,
            json!({
                "statusCode": 200,
                "headers": { "Content-Type": "application/json" },
                "body": "{\"message\":\"Bar was called!\"}"
            })
        );
    }

    /// Content-Typeヘッダーは常にapplication/json
    #[tokio::test]
    async fn test_handler_returns_json_content_type() {
        init_logging();

        let event = LambdaEvent::new(json!({}), Context::default());
        let response = handler(event).await.unwrap();

        assert_eq!(response["headers"]["Content-Type"], "application/json");
        assert_eq!(response["headers"].as_object().unwrap().len(), 1);
    }

    /// null入力でも失敗せず200とBarメッセージを返す
    #[tokio::test]
    async fn test_handler_accepts_null_event() {
        init_logging();

        let event = LambdaEvent::new(Value::Null, Context::default());
        let response = handler(event).await.unwrap();

        assert_eq!(response["statusCode"], 200);

        let body: Value = serde_json::from_str(response["body"].as_str().unwrap()).unwrap();
        assert_eq!(body["message"], "Bar was called!");
    }
}
