// Infrastructure layer modules
pub mod config;
pub mod logging;
pub mod transaction_repository;

// Re-exports
pub use config::{ConfigError, TransactionsConfig};
#[cfg(test)]
pub use logging::init_test_logging;
pub use logging::init_logging;
pub use transaction_repository::{
    DynamoTransactionRepository, RepositoryError, TransactionRepository,
};
