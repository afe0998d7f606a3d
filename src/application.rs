// アプリケーション層モジュール
pub mod request_router;
pub mod transaction_builder;

// 再エクスポート
pub use request_router::{ApiResponse, CreatedTransaction, RequestRouter};
pub use transaction_builder::{CreateTransactionError, TransactionBuilder};
