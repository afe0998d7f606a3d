/// 取引作成リクエストの入力データ
///
/// リクエストボディの`data`マッピングから取引作成に必要な値を取り出す。
/// 検証するのは`customer_id`キーの有無だけで、値の型は問わない。
/// 未知のキーは無視する。
use serde_json::{Map, Value};
use thiserror::Error;

/// 入力データのパースエラー
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputError {
    /// 必須フィールドが欠落
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// dataがJSONオブジェクトでない
    #[error("data must be a JSON object")]
    DataNotObject,
}

/// 取引作成の入力値
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionInput {
    /// 顧客ID（必須、文字列以外はJSONテキストとして扱う）
    pub customer_id: String,
    /// ステータス（省略時は既定値、値はそのまま保存）
    pub status: Option<Value>,
    /// 取引種別（値はそのまま保存）
    pub transaction_type: Option<Value>,
    /// 呼び出し元が指定した配送ID
    pub delivery_id: Option<String>,
}

impl TransactionInput {
    /// 顧客IDのみを指定して入力値を作成
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            status: None,
            transaction_type: None,
            delivery_id: None,
        }
    }

    /// `data`の値から入力値をパース
    ///
    /// # 引数
    /// * `data` - リクエストボディの`data`フィールド
    ///
    /// # 戻り値
    /// * `Ok(TransactionInput)` - パース成功時
    /// * `Err(InputError)` - dataがオブジェクトでない、または`customer_id`キーがない場合
    pub fn from_data(data: &Value) -> Result<Self, InputError> {
        let map = data.as_object().ok_or(InputError::DataNotObject)?;

        let customer_id = map
            .get("customer_id")
            .map(render_text)
            .ok_or(InputError::MissingField("customer_id"))?;

        Ok(Self {
            customer_id,
            status: optional_value(map, "status"),
            transaction_type: optional_value(map, "transaction_type"),
            delivery_id: optional_value(map, "delivery_id").as_ref().map(render_text),
        })
    }
}

/// 任意フィールドを取得（nullは未指定と同じ扱い）
fn optional_value(map: &Map<String, Value>, key: &str) -> Option<Value> {
    map.get(key).filter(|value| !value.is_null()).cloned()
}

/// キーに埋め込む値をテキスト化（文字列はそのまま、それ以外はJSONテキスト）
fn render_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
