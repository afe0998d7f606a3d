/// 取引レコードビルダー
///
/// 取引IDと配送IDを生成し、作成日時を付与したレコードを保存する。
use chrono::Utc;
use thiserror::Error;
use tracing::{debug, error};
use uuid::Uuid;

use crate::domain::{TransactionInput, TransactionRecord};
use crate::infrastructure::{RepositoryError, TransactionRepository};

/// 取引作成のエラー型
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CreateTransactionError {
    /// 保存に失敗（リトライしない）
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// 取引レコードを構築して保存するビルダー
pub struct TransactionBuilder<TR>
where
    TR: TransactionRepository,
{
    /// 取引リポジトリ
    repository: TR,
}

impl<TR> TransactionBuilder<TR>
where
    TR: TransactionRepository,
{
    /// 新しいTransactionBuilderを作成
    pub fn new(repository: TR) -> Self {
        Self { repository }
    }

    /// 取引レコードを作成して保存
    ///
    /// # 処理フロー
    /// 1. 取引IDを新規生成
    /// 2. 配送IDは入力になければ新規生成
    /// 3. 現在時刻（UTC）を一度だけ取得してレコードを構築
    /// 4. リポジトリに保存
    ///
    /// 同じ入力で2回呼ぶと別々のレコードが2件保存される。
    ///
    /// # 戻り値
    /// * 成功時は保存済みの`TransactionRecord`
    /// * 保存失敗時は`Err(CreateTransactionError)`
    pub async fn create(
        &self,
        input: &TransactionInput,
    ) -> Result<TransactionRecord, CreateTransactionError> {
        let transaction_id = Uuid::new_v4().to_string();
        let generated_delivery_id = Uuid::new_v4().to_string();
        let record =
            TransactionRecord::new(input, &transaction_id, &generated_delivery_id, Utc::now());

        debug!(
            transaction_id = record.transaction_id(),
            customer_id = %record.customer_id,
            "取引レコード保存開始"
        );

        if let Err(err) = self.repository.put(&record).await {
            error!(
                transaction_id = record.transaction_id(),
                error = %err,
                "取引レコード保存失敗"
            );
            return Err(err.into());
        }

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::init_test_logging;
    use crate::infrastructure::transaction_repository::tests::MockTransactionRepository;

    fn create_test_builder() -> (
        TransactionBuilder<MockTransactionRepository>,
        MockTransactionRepository,
    ) {
        init_test_logging();
        let repository = MockTransactionRepository::new();
        let builder = TransactionBuilder::new(repository.clone());
        (builder, repository)
    }

    #[tokio::test]
    async fn test_create_persists_one_record() {
        let (builder, repository) = create_test_builder();

        let record = builder.create(&TransactionInput::new("123")).await.unwrap();

        assert_eq!(repository.records(), vec![record.clone()]);
        assert_eq!(record.customer_id, "CUST#123");
        assert_eq!(record.status, "PENDING");
        assert_eq!(record.entity_type, "TRANSACTION");
    }

    #[tokio::test]
    async fn test_create_generates_uuid_identifiers() {
        let (builder, _) = create_test_builder();

        let record = builder.create(&TransactionInput::new("c")).await.unwrap();

        assert!(Uuid::parse_str(record.transaction_id()).is_ok());
        assert!(Uuid::parse_str(record.delivery_id()).is_ok());
        assert_ne!(record.transaction_id(), record.delivery_id());
    }

    #[tokio::test]
    async fn test_create_twice_produces_distinct_records() {
        let (builder, repository) = create_test_builder();
        let input = TransactionInput::new("same-customer");

        let first = builder.create(&input).await.unwrap();
        let second = builder.create(&input).await.unwrap();

        assert_eq!(repository.record_count(), 2);
        assert_ne!(first.transaction_id(), second.transaction_id());
        assert_ne!(first.delivery_id(), second.delivery_id());
    }

    #[tokio::test]
    async fn test_create_reuses_supplied_delivery_id() {
        let (builder, _) = create_test_builder();
        let mut input = TransactionInput::new("c");
        input.delivery_id = Some("delivery-abc".to_string());

        let record = builder.create(&input).await.unwrap();

        assert_eq!(record.delivery_id, "DEL#delivery-abc");
        assert_eq!(record.delivery_id(), "delivery-abc");
    }

    #[tokio::test]
    async fn test_create_timestamp_shared_by_creation_time_and_gsi1_sk() {
        let (builder, _) = create_test_builder();

        let record = builder.create(&TransactionInput::new("c")).await.unwrap();

        assert_eq!(record.gsi1_sk, format!("TRANS#{}", record.creation_time));
        assert!(chrono::DateTime::parse_from_rfc3339(&record.creation_time).is_ok());
    }

    #[tokio::test]
    async fn test_create_propagates_repository_error() {
        let (builder, repository) = create_test_builder();
        repository.set_next_error(RepositoryError::WriteError(
            "ProvisionedThroughputExceededException".to_string(),
        ));

        let result = builder.create(&TransactionInput::new("c")).await;

        assert_eq!(
            result,
            Err(CreateTransactionError::Repository(
                RepositoryError::WriteError("ProvisionedThroughputExceededException".to_string())
            ))
        );
        assert_eq!(repository.record_count(), 0);
    }

    #[test]
    fn test_create_transaction_error_display_is_transparent() {
        let error = CreateTransactionError::from(RepositoryError::WriteError("denied".to_string()));
        assert_eq!(error.to_string(), "Write error: denied");
    }
}
