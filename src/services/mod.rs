// Service exports
pub mod affinity;
pub mod postgres;
pub mod storage;
pub mod users;

pub use affinity::{AffinityLedger, LedgerError};
pub use postgres::PostgresError;
pub use storage::{StorageClient, StorageError};
pub use users::{DirectoryError, UserDirectory};
