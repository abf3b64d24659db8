//! In-memory bulk copy collaborator.
//!
//! [`InMemoryConnection`] implements [`BulkCopyConnection`](crate::bulk_copy::BulkCopyConnection)
//! over tables kept in memory. It is used by the test suites and is handy for
//! exercising entity mappings without a database server.

mod bulk_copy;
mod connection;
mod table;

pub use bulk_copy::*;
pub use connection::*;
pub use table::*;
