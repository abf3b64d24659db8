use crate::bulk_copy::{BulkCopy, BulkCopyConfig};
use crate::common::{Atomic, Row, Value, WriteExecutor};
use crate::errors::{BulkWriterError, BulkWriterResult, ErrorKind};
use crate::memory::InMemoryTable;
use std::collections::HashMap;

/// Bulk copy allocated by an [`InMemoryConnection`](crate::memory::InMemoryConnection).
///
/// Rows are re-laid out from source to destination ordinals as they are
/// written, buffered, and appended to the table every `batch_size` rows and on
/// [`finish`](BulkCopy::finish). Rows still buffered when the bulk copy is
/// dropped are discarded.
pub struct InMemoryBulkCopy {
    tables: Atomic<HashMap<String, InMemoryTable>>,
    config: BulkCopyConfig,
    column_count: usize,
    transaction_id: Option<u64>,
    pending: Vec<Row>,
    rows_copied: usize,
}

impl InMemoryBulkCopy {
    pub(crate) fn new(
        tables: Atomic<HashMap<String, InMemoryTable>>,
        config: BulkCopyConfig,
        column_count: usize,
        transaction_id: Option<u64>,
    ) -> Self {
        InMemoryBulkCopy {
            tables,
            config,
            column_count,
            transaction_id,
            pending: Vec::new(),
            rows_copied: 0,
        }
    }

    /// The configuration the bulk copy was allocated with.
    pub fn config(&self) -> &BulkCopyConfig {
        &self.config
    }

    pub fn transaction_id(&self) -> Option<u64> {
        self.transaction_id
    }

    /// Rows appended to the destination table so far.
    pub fn rows_copied(&self) -> usize {
        self.rows_copied
    }

    /// Rows written but not yet flushed.
    pub fn pending_rows(&self) -> usize {
        self.pending.len()
    }

    fn to_destination(&self, row: Row) -> BulkWriterResult<Row> {
        let mut values = vec![Value::Null; self.column_count];
        for mapping in self.config.column_mappings() {
            match row.get(mapping.source_ordinal()) {
                Some(value) => values[mapping.destination_ordinal()] = value.clone(),
                None => {
                    log::error!(
                        "Row with {} values has no source ordinal {}",
                        row.len(),
                        mapping.source_ordinal()
                    );
                    return Err(BulkWriterError::new(
                        &format!(
                            "The given value for source ordinal {} is missing from the row",
                            mapping.source_ordinal()
                        ),
                        ErrorKind::BulkCopyError,
                    ));
                }
            }
        }
        Ok(Row::new(values))
    }

    fn flush(&mut self) -> BulkWriterResult<()> {
        if self.pending.is_empty() {
            return Ok(());
        }

        let batch = std::mem::take(&mut self.pending);
        let count = batch.len();
        let keep_identity = self.config.options().keep_identity();
        let table_name = self.config.destination_table_name();

        self.tables.write_with(|tables| match tables.get_mut(table_name) {
            Some(table) => {
                for row in batch {
                    table.append(row, keep_identity)?;
                }
                Ok(())
            }
            None => {
                log::error!("Table {} disappeared during bulk copy", table_name);
                Err(BulkWriterError::new(
                    &format!("Cannot access destination table '{}'", table_name),
                    ErrorKind::BulkCopyError,
                ))
            }
        })?;

        self.rows_copied += count;
        log::debug!("Flushed {} rows into {}", count, table_name);
        Ok(())
    }
}

impl BulkCopy for InMemoryBulkCopy {
    fn write_row(&mut self, row: Row) -> BulkWriterResult<()> {
        let row = self.to_destination(row)?;
        self.pending.push(row);
        if self.pending.len() >= self.config.batch_size() {
            self.flush()?;
        }
        Ok(())
    }

    fn finish(&mut self) -> BulkWriterResult<()> {
        self.flush()
    }
}

impl Drop for InMemoryBulkCopy {
    fn drop(&mut self) {
        if !self.pending.is_empty() {
            log::warn!(
                "Discarding {} unflushed rows for {}",
                self.pending.len(),
                self.config.destination_table_name()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::bulk_copy::{BulkCopy, BulkCopyConfig, BulkCopyConnection, BulkCopyOptions};
    use crate::common::{Row, Value};
    use crate::errors::ErrorKind;
    use crate::mapping::ColumnMapping;
    use crate::memory::InMemoryConnection;

    fn orders(connection: &InMemoryConnection, options: BulkCopyOptions) -> super::InMemoryBulkCopy {
        connection.create_table("Orders", 3, Some(0)).unwrap();
        let mut config = BulkCopyConfig::new("Orders", options);
        config.add_column_mapping(ColumnMapping::new(0, 2));
        config.add_column_mapping(ColumnMapping::new(1, 0));
        connection.create_bulk_copy(None, config).unwrap()
    }

    fn row(name: &str, id: i64) -> Row {
        Row::new(vec![Value::from(name), Value::I64(id)])
    }

    #[test]
    fn test_rows_are_laid_out_by_destination_ordinal() {
        let connection = InMemoryConnection::new();
        let mut bulk_copy = orders(&connection, BulkCopyOptions::KeepIdentity);

        bulk_copy.write_row(row("widget", 10)).unwrap();
        bulk_copy.finish().unwrap();

        let rows = connection.rows("Orders").unwrap();
        assert_eq!(
            rows,
            vec![Row::new(vec![Value::I64(10), Value::Null, Value::from("widget")])]
        );
    }

    #[test]
    fn test_kept_identity_at_upper_bound() {
        let connection = InMemoryConnection::new();
        let mut bulk_copy = orders(&connection, BulkCopyOptions::KeepIdentity);

        bulk_copy.write_row(row("last", i64::MAX)).unwrap();
        bulk_copy.finish().unwrap();

        let rows = connection.rows("Orders").unwrap();
        assert_eq!(rows[0][0], Value::I64(i64::MAX));
        assert_eq!(bulk_copy.rows_copied(), 1);
    }

    #[test]
    fn test_identity_generated_without_keep_identity() {
        let connection = InMemoryConnection::new();
        let mut bulk_copy = orders(&connection, BulkCopyOptions::Default);

        bulk_copy.write_row(row("a", 10)).unwrap();
        bulk_copy.write_row(row("b", 10)).unwrap();
        bulk_copy.finish().unwrap();

        let rows = connection.rows("Orders").unwrap();
        assert_eq!(rows[0][0], Value::I64(1));
        assert_eq!(rows[1][0], Value::I64(2));
    }

    #[test]
    fn test_rows_buffer_until_batch_size() {
        let connection = InMemoryConnection::new();
        let mut bulk_copy = orders(&connection, BulkCopyOptions::Default);
        let batch_size = bulk_copy.config().batch_size();

        for i in 0..batch_size - 1 {
            bulk_copy.write_row(row("x", i as i64)).unwrap();
        }
        assert_eq!(connection.row_count("Orders").unwrap(), 0);
        assert_eq!(bulk_copy.pending_rows(), batch_size - 1);

        bulk_copy.write_row(row("x", 0)).unwrap();
        assert_eq!(connection.row_count("Orders").unwrap(), batch_size);
        assert_eq!(bulk_copy.pending_rows(), 0);

        bulk_copy.write_row(row("y", 0)).unwrap();
        bulk_copy.finish().unwrap();
        assert_eq!(bulk_copy.rows_copied(), batch_size + 1);
        assert_eq!(connection.row_count("Orders").unwrap(), batch_size + 1);
    }

    #[test]
    fn test_short_row_is_rejected() {
        let connection = InMemoryConnection::new();
        let mut bulk_copy = orders(&connection, BulkCopyOptions::Default);

        let err = bulk_copy.write_row(Row::new(vec![Value::from("a")])).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::BulkCopyError);
        assert_eq!(bulk_copy.pending_rows(), 0);
    }

    #[test]
    fn test_drop_discards_unflushed_rows() {
        let connection = InMemoryConnection::new();
        let mut bulk_copy = orders(&connection, BulkCopyOptions::Default);

        bulk_copy.write_row(row("a", 1)).unwrap();
        drop(bulk_copy);

        assert_eq!(connection.row_count("Orders").unwrap(), 0);
    }
}
