/// Foo Lambdaエントリポイント
///
/// 呼び出しイベントをログに記録し、
/// 固定メッセージ「Foo was called!」の200応答を返却する。
use functions::application::InvocationHandler;
use functions::infrastructure::init_logging;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

/// Foo関数が返す固定メッセージ
const MESSAGE: &str = "Foo was called!";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("Foo Lambda関数を初期化");

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
