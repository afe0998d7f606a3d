// Domain layer modules
pub mod operation;
pub mod transaction;
pub mod transaction_input;

// Re-exports
pub use operation::{Operation, RequestError};
pub use transaction::TransactionRecord;
pub use transaction_input::{InputError, TransactionInput};
