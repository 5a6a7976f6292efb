// アプリケーション層モジュール
pub mod invocation_handler;

// 再エクスポート
pub use invocation_handler::InvocationHandler;
