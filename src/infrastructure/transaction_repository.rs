/// DynamoDBに取引レコードを保存するためのリポジトリ
use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;
use thiserror::Error;

use crate::domain::TransactionRecord;

/// リポジトリ操作のエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RepositoryError {
    /// DynamoDBへの書き込みに失敗
    #[error("Write error: {0}")]
    WriteError(String),

    /// レコードからアイテムへの変換に失敗
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// 取引レコード永続化用トレイト
///
/// 実際のDynamoDBとテスト用モックを差し替えられるようにする。
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// 取引レコードを1件保存
    ///
    /// 条件なしのputで、既存行の確認や冪等性チェックは行わない。
    ///
    /// # 戻り値
    /// * 成功時は`Ok(())`
    /// * 失敗時は`Err(RepositoryError)`
    async fn put(&self, record: &TransactionRecord) -> Result<(), RepositoryError>;
}

/// TransactionRepositoryのDynamoDB実装
#[derive(Debug, Clone)]
pub struct DynamoTransactionRepository {
    /// DynamoDBクライアント
    client: DynamoDbClient,
    /// 取引テーブル名
    table_name: String,
}

impl DynamoTransactionRepository {
    /// 新しいDynamoTransactionRepositoryを作成
    ///
    /// # 引数
    /// * `client` - DynamoDBクライアント
    /// * `table_name` - 取引テーブルの名前
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// 取引レコードをDynamoDBアイテムに変換
    pub(crate) fn to_item(
        record: &TransactionRecord,
    ) -> Result<HashMap<String, AttributeValue>, RepositoryError> {
        serde_dynamo::to_item(record)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))
    }
}

#[async_trait]
impl TransactionRepository for DynamoTransactionRepository {
    async fn put(&self, record: &TransactionRecord) -> Result<(), RepositoryError> {
        let item = Self::to_item(record)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|err| RepositoryError::WriteError(sdk_error_message(err)))?;

        Ok(())
    }
}

/// SDKエラーからメッセージを組み立てる
///
/// サービスエラーはDynamoDBのエラー本文を、接続失敗・タイムアウトなどは
/// エラーチェーン全体を使う。
fn sdk_error_message<E, R>(err: SdkError<E, R>) -> String
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    match err {
        SdkError::ServiceError(service_error) => service_error.into_err().to_string(),
        other => DisplayErrorContext(&other).to_string(),
    }
}
