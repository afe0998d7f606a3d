/// 取引作成Lambdaエントリポイント
///
/// 起動時に設定とDynamoDBクライアントを一度だけ構築し、
/// 各リクエストをRequestRouterに委譲する。
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tracing::{error, info};
use transactions::application::RequestRouter;
use transactions::infrastructure::{
    DynamoTransactionRepository, TransactionsConfig, init_logging,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    // テーブル名がなければ起動失敗
    let config = TransactionsConfig::from_env().await.map_err(|err| {
        error!(error = %err, "設定読み込み失敗");
        err
    })?;

    info!(table_name = config.table_name(), "取引Lambda関数を初期化");

    let repository =
        DynamoTransactionRepository::new(config.client().clone(), config.table_name().to_string());
    let router = RequestRouter::new(repository);
    let router = &router;

    // warm start時もクライアントを再利用する
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        let response = router.route(&event.payload).await;
        Ok::<Value, Error>(response.into_value())
    }))
    .await
}
