/// 操作種別
///
/// Lambdaイベントの`body`を解決し、対応している操作に変換する。
/// `body`はJSON文字列または構造化済みのオブジェクトのどちらでもよい。
use serde_json::{Map, Value};
use thiserror::Error;

use super::{InputError, TransactionInput};

/// 取引作成の操作名
pub const CREATE_TRANSACTION: &str = "create_transaction";

/// リクエスト解析エラー
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RequestError {
    /// bodyのJSONパースに失敗
    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    /// bodyがJSONオブジェクトでない
    #[error("Request body must be a JSON object")]
    BodyNotObject,

    /// 未対応または欠落した操作名
    #[error("Invalid operation")]
    InvalidOperation,

    /// dataの内容が不正
    #[error(transparent)]
    Input(#[from] InputError),
}

/// サポートする操作
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// 取引レコードの作成
    CreateTransaction(TransactionInput),
}

impl Operation {
    /// Lambdaイベントから操作を解析
    ///
    /// # 処理フロー
    /// 1. `body`を解決（文字列ならJSONパース、欠落時は空オブジェクト）
    /// 2. `operation`で操作を判定
    /// 3. `data`（欠落時は空オブジェクト）を操作ごとの入力に変換
    ///
    /// # 戻り値
    /// * `Ok(Operation)` - 解析成功時
    /// * `Err(RequestError::InvalidOperation)` - 操作名が欠落・未対応の場合
    /// * `Err(RequestError)` - その他の解析失敗時
    pub fn from_event(event: &Value) -> Result<Self, RequestError> {
        let body = resolve_body(event)?;
        let body = body.as_object().ok_or(RequestError::BodyNotObject)?;

        match body.get("operation").and_then(Value::as_str) {
            Some(CREATE_TRANSACTION) => {
                let input = TransactionInput::from_data(&data_of(body))?;
                Ok(Operation::CreateTransaction(input))
            }
            _ => Err(RequestError::InvalidOperation),
        }
    }

    /// 操作名を取得
    pub fn name(&self) -> &'static str {
        match self {
            Operation::CreateTransaction(_) => CREATE_TRANSACTION,
        }
    }
}

/// イベントからbodyを取り出す
fn resolve_body(event: &Value) -> Result<Value, RequestError> {
    match event.get("body") {
        None => Ok(Value::Object(Map::new())),
        Some(Value::String(text)) => {
            serde_json::from_str(text).map_err(|e| RequestError::InvalidJson(e.to_string()))
        }
        Some(other) => Ok(other.clone()),
    }
}

/// bodyからdataを取り出す（欠落時は空オブジェクト）
fn data_of(body: &Map<String, Value>) -> Value {
    body.get("data")
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()))
}
