/// リクエストルーター
///
/// Lambdaイベントを操作に変換して実行し、結果をレスポンスエンベロープに変換する。
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{error, info};

use crate::application::TransactionBuilder;
use crate::domain::{Operation, RequestError, TransactionInput};
use crate::infrastructure::TransactionRepository;

/// レスポンスエンベロープ
///
/// `{"statusCode": <n>, "body": "<JSON文字列>"}`としてシリアライズされる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl ApiResponse {
    /// 200 OK
    pub fn ok<T: Serialize>(body: &T) -> Self {
        match serde_json::to_string(body) {
            Ok(body) => Self {
                status_code: 200,
                body,
            },
            Err(err) => Self::internal_error(&err.to_string()),
        }
    }

    /// 400 Bad Request
    pub fn bad_request(message: &str) -> Self {
        Self::error(400, message)
    }

    /// 500 Internal Server Error
    pub fn internal_error(message: &str) -> Self {
        Self::error(500, message)
    }

    fn error(status_code: u16, message: &str) -> Self {
        Self {
            status_code,
            body: json!({ "error": message }).to_string(),
        }
    }

    /// Lambdaの戻り値に変換
    pub fn into_value(self) -> Value {
        json!({
            "statusCode": self.status_code,
            "body": self.body,
        })
    }
}

/// 取引作成成功時のレスポンスボディ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedTransaction {
    pub transaction_id: String,
    pub delivery_id: String,
}

/// Lambdaイベントを処理するルーター
pub struct RequestRouter<TR>
where
    TR: TransactionRepository,
{
    /// 取引レコードビルダー
    builder: TransactionBuilder<TR>,
}

impl<TR> RequestRouter<TR>
where
    TR: TransactionRepository,
{
    /// 新しいRequestRouterを作成
    pub fn new(repository: TR) -> Self {
        Self {
            builder: TransactionBuilder::new(repository),
        }
    }

    /// Lambdaイベントを処理
    ///
    /// 失敗もすべてレスポンスとして返す。
    /// * 操作名が欠落・未対応: 400 `{"error": "Invalid operation"}`
    /// * その他の失敗: 500 `{"error": "<メッセージ>"}`
    pub async fn route(&self, event: &Value) -> ApiResponse {
        let operation = match Operation::from_event(event) {
            Ok(operation) => operation,
            Err(RequestError::InvalidOperation) => {
                info!("未対応の操作");
                return ApiResponse::bad_request(&RequestError::InvalidOperation.to_string());
            }
            Err(err) => return Self::internal_error(&err.to_string()),
        };

        info!(operation = operation.name(), "リクエスト受信");

        match operation {
            Operation::CreateTransaction(input) => self.create_transaction(&input).await,
        }
    }

    async fn create_transaction(&self, input: &TransactionInput) -> ApiResponse {
        match self.builder.create(input).await {
            Ok(record) => {
                let created = CreatedTransaction {
                    transaction_id: record.transaction_id().to_string(),
                    delivery_id: record.delivery_id().to_string(),
                };
                info!(
                    transaction_id = %created.transaction_id,
                    delivery_id = %created.delivery_id,
                    "取引作成完了"
                );
                ApiResponse::ok(&created)
            }
            Err(err) => Self::internal_error(&err.to_string()),
        }
    }

    /// エラーをログ出力して500を返す
    fn internal_error(message: &str) -> ApiResponse {
        error!(error = message, "リクエスト処理エラー");
        ApiResponse::internal_error(message)
    }
}
