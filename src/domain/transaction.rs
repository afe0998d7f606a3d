/// 取引レコード
///
/// 単一テーブル設計のDynamoDBテーブルに保存する取引メタデータ行。
/// パーティションキーは`TRANS#<取引ID>`、ソートキーは`METADATA`固定。
/// GSI1で顧客ごとの取引を作成日時順に引けるようにする。
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

use super::TransactionInput;

/// 取引IDのプレフィックス
pub const TRANSACTION_PREFIX: &str = "TRANS#";
/// 配送IDのプレフィックス
pub const DELIVERY_PREFIX: &str = "DEL#";
/// 顧客IDのプレフィックス
pub const CUSTOMER_PREFIX: &str = "CUST#";
/// メタデータ行のソートキー
pub const METADATA_SORT_KEY: &str = "METADATA";
/// エンティティ種別タグ
pub const TRANSACTION_ENTITY_TYPE: &str = "TRANSACTION";
/// ステータス未指定時の既定値
pub const DEFAULT_STATUS: &str = "PENDING";

/// DynamoDBに保存される取引レコード
///
/// フィールド名は保存時の属性名にリネームされる。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    #[serde(rename = "PK")]
    pub pk: String,
    #[serde(rename = "SK")]
    pub sk: String,
    #[serde(rename = "customerId")]
    pub customer_id: String,
    /// 入力値の型のまま保存
    pub status: Value,
    #[serde(rename = "creationTime")]
    pub creation_time: String,
    /// 未指定の場合はNULL属性として保存
    #[serde(rename = "transactionType")]
    pub transaction_type: Option<Value>,
    #[serde(rename = "deliveryId")]
    pub delivery_id: String,
    #[serde(rename = "entityType")]
    pub entity_type: String,
    #[serde(rename = "GSI1PK")]
    pub gsi1_pk: String,
    #[serde(rename = "GSI1SK")]
    pub gsi1_sk: String,
}

impl TransactionRecord {
    /// 入力値と生成済みの識別子・時刻から取引レコードを構築
    ///
    /// 配送IDは入力に`delivery_id`があればそれを、なければ`generated_delivery_id`を使う。
    /// `created_at`は`creationTime`とGSI1SKの両方に同じ値で使われる。
    pub fn new(
        input: &TransactionInput,
        transaction_id: &str,
        generated_delivery_id: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        let timestamp = format_timestamp(created_at);
        let delivery_id = input
            .delivery_id
            .as_deref()
            .unwrap_or(generated_delivery_id);
        let customer_key = format!("{}{}", CUSTOMER_PREFIX, input.customer_id);

        Self {
            pk: format!("{}{}", TRANSACTION_PREFIX, transaction_id),
            sk: METADATA_SORT_KEY.to_string(),
            customer_id: customer_key.clone(),
            status: input
                .status
                .clone()
                .unwrap_or_else(|| Value::from(DEFAULT_STATUS)),
            creation_time: timestamp.clone(),
            transaction_type: input.transaction_type.clone(),
            delivery_id: format!("{}{}", DELIVERY_PREFIX, delivery_id),
            entity_type: TRANSACTION_ENTITY_TYPE.to_string(),
            gsi1_pk: customer_key,
            gsi1_sk: format!("{}{}", TRANSACTION_PREFIX, timestamp),
        }
    }

    /// プレフィックスを除いた取引ID
    pub fn transaction_id(&self) -> &str {
        self.pk
            .strip_prefix(TRANSACTION_PREFIX)
            .unwrap_or(&self.pk)
    }

    /// プレフィックスを除いた配送ID
    pub fn delivery_id(&self) -> &str {
        self.delivery_id
            .strip_prefix(DELIVERY_PREFIX)
            .unwrap_or(&self.delivery_id)
    }
}

/// UTC時刻をマイクロ秒精度のRFC 3339文字列に変換
fn format_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Micros, true)
}
