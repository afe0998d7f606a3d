/// DynamoDB接続設定
use aws_sdk_dynamodb::Client as DynamoDbClient;
use thiserror::Error;

/// テーブル名を指定する環境変数
pub const TABLE_NAME_ENV: &str = "DYNAMODB_TABLE_NAME";

/// 設定読み込みのエラー型
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// テーブル名とクライアントを持つ設定
///
/// プロセス起動時に一度だけ構築し、リポジトリに渡して使い回す。
/// テーブル名は環境変数`DYNAMODB_TABLE_NAME`で設定する。
#[derive(Debug, Clone)]
pub struct TransactionsConfig {
    /// DynamoDBクライアントインスタンス
    client: DynamoDbClient,
    /// 取引テーブル名
    table_name: String,
}

impl TransactionsConfig {
    /// 環境からAWS設定を読み込み、環境変数からテーブル名を読み取って新しい設定を作成
    ///
    /// 環境変数:
    /// - AWS認証情報: aws-configにより自動読み込み
    /// - DYNAMODB_TABLE_NAME: 取引用DynamoDBテーブル名
    pub async fn from_env() -> Result<Self, ConfigError> {
        // テーブル名がなければAWS設定の読み込みより先に失敗させる
        let table_name = table_name_from_env(TABLE_NAME_ENV)?;

        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = DynamoDbClient::new(&aws_config);

        Ok(Self { client, table_name })
    }

    /// 明示的な値で新しい設定を作成（テスト用）
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// DynamoDBクライアントへの参照を取得
    pub fn client(&self) -> &DynamoDbClient {
        &self.client
    }

    /// テーブル名を取得
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

/// 環境変数からテーブル名を読み込む（空文字列は未設定扱い）
fn table_name_from_env(var: &str) -> Result<String, ConfigError> {
    std::env::var(var)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}
