use crate::bulk_copy::BulkCopyConfig;
use crate::common::Row;
use crate::errors::BulkWriterResult;

/// A database connection able to allocate bulk copies.
///
/// # Purpose
/// The seam to the database client. Row encoding, network transfer, batching
/// and transaction semantics all live behind this trait; this crate only
/// decides what to ask for.
///
/// # Characteristics
/// - The connection and transaction are owned by the caller; the factory only
///   borrows them
/// - Failures are reported as [`BulkWriterError`](crate::errors::BulkWriterError)s,
///   conventionally of kind [`ErrorKind::BulkCopyError`](crate::errors::ErrorKind::BulkCopyError),
///   and are passed to the caller unchanged
pub trait BulkCopyConnection {
    /// Transaction type the bulk copy can enlist in.
    type Transaction;

    /// Bulk copy resource allocated by this connection.
    type BulkCopy: BulkCopy;

    /// Allocates a bulk copy bound to this connection and, if given, to
    /// `transaction`, configured by `config`.
    fn create_bulk_copy(
        &self,
        transaction: Option<&Self::Transaction>,
        config: BulkCopyConfig,
    ) -> BulkWriterResult<Self::BulkCopy>;
}

/// An allocated bulk copy resource.
///
/// Dropping the value releases the resource. Rows written but not yet flushed
/// by [`BulkCopy::finish`] may be discarded at that point, depending on the
/// implementation.
pub trait BulkCopy {
    /// Submits one row laid out by source ordinal.
    fn write_row(&mut self, row: Row) -> BulkWriterResult<()>;

    /// Flushes every row submitted so far to the destination.
    fn finish(&mut self) -> BulkWriterResult<()>;
}
