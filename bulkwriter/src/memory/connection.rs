use crate::bulk_copy::{BulkCopyConfig, BulkCopyConnection};
use crate::common::{atomic, Atomic, ReadExecutor, Row, WriteExecutor};
use crate::errors::{BulkWriterError, BulkWriterResult, ErrorKind};
use crate::memory::{InMemoryBulkCopy, InMemoryTable};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A [`BulkCopyConnection`] backed by tables held in memory.
///
/// # Purpose
/// Stands in for a database client in tests and demos. It checks a bulk copy
/// the way a server would (table exists, destination ordinals are in range and
/// mapped once) and stores copied rows so they can be inspected afterwards.
///
/// # Characteristics
/// - Cheap to clone; clones share the same tables
/// - Transactions are markers only: a bulk copy records which transaction it
///   was enlisted in, nothing is rolled back
///
/// # Usage
/// ```text
/// let connection = InMemoryConnection::new();
/// connection.create_table("Orders", 4, Some(0))?;
/// let transaction = connection.begin_transaction();
/// let factory = BulkCopyFactory::new(&connection, Some(&transaction));
/// ```
#[derive(Clone)]
pub struct InMemoryConnection {
    inner: Arc<InMemoryConnectionInner>,
}

impl Default for InMemoryConnection {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryConnection {
    pub fn new() -> Self {
        InMemoryConnection {
            inner: Arc::new(InMemoryConnectionInner::new()),
        }
    }

    /// Creates an empty table with `column_count` columns and an optional
    /// identity column.
    pub fn create_table(
        &self,
        name: &str,
        column_count: usize,
        identity_ordinal: Option<usize>,
    ) -> BulkWriterResult<()> {
        self.inner.create_table(name, column_count, identity_ordinal)
    }

    pub fn has_table(&self, name: &str) -> bool {
        self.inner.tables.read_with(|tables| tables.contains_key(name))
    }

    /// Snapshot of the rows stored in `name`, in destination layout.
    pub fn rows(&self, name: &str) -> BulkWriterResult<Vec<Row>> {
        self.inner.with_table(name, |table| table.rows().to_vec())
    }

    pub fn row_count(&self, name: &str) -> BulkWriterResult<usize> {
        self.inner.with_table(name, |table| table.rows().len())
    }

    pub fn begin_transaction(&self) -> InMemoryTransaction {
        let id = self.inner.next_transaction_id.fetch_add(1, Ordering::Relaxed);
        InMemoryTransaction { id }
    }
}

impl BulkCopyConnection for InMemoryConnection {
    type Transaction = InMemoryTransaction;
    type BulkCopy = InMemoryBulkCopy;

    fn create_bulk_copy(
        &self,
        transaction: Option<&InMemoryTransaction>,
        config: BulkCopyConfig,
    ) -> BulkWriterResult<InMemoryBulkCopy> {
        let table_name = config.destination_table_name().to_string();
        let column_count = self.inner.with_table(&table_name, |table| table.column_count())?;

        if let Some(mapping) = config
            .column_mappings()
            .iter()
            .find(|m| m.destination_ordinal() >= column_count)
        {
            log::error!(
                "Destination ordinal {} is out of range for table {} with {} columns",
                mapping.destination_ordinal(),
                table_name,
                column_count
            );
            return Err(BulkWriterError::new(
                &format!(
                    "The given column mapping {} does not match any column in the destination table '{}'",
                    mapping, table_name
                ),
                ErrorKind::BulkCopyError,
            ));
        }

        let duplicates = config.duplicate_destination_ordinals();
        if !duplicates.is_empty() {
            log::error!(
                "Destination ordinals {:?} of table {} are mapped more than once",
                duplicates,
                table_name
            );
            return Err(BulkWriterError::new(
                &format!(
                    "Destination columns {:?} of table '{}' are mapped more than once",
                    duplicates, table_name
                ),
                ErrorKind::BulkCopyError,
            ));
        }

        Ok(InMemoryBulkCopy::new(
            self.inner.tables.clone(),
            config,
            column_count,
            transaction.map(|t| t.id()),
        ))
    }
}

/// Transaction marker handed out by [`InMemoryConnection::begin_transaction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InMemoryTransaction {
    id: u64,
}

impl InMemoryTransaction {
    pub fn id(&self) -> u64 {
        self.id
    }
}

struct InMemoryConnectionInner {
    tables: Atomic<HashMap<String, InMemoryTable>>,
    next_transaction_id: AtomicU64,
}

impl InMemoryConnectionInner {
    fn new() -> Self {
        InMemoryConnectionInner {
            tables: atomic(HashMap::new()),
            next_transaction_id: AtomicU64::new(1),
        }
    }

    fn create_table(
        &self,
        name: &str,
        column_count: usize,
        identity_ordinal: Option<usize>,
    ) -> BulkWriterResult<()> {
        if let Some(ordinal) = identity_ordinal {
            if ordinal >= column_count {
                log::error!(
                    "Identity ordinal {} is out of range for table {} with {} columns",
                    ordinal,
                    name,
                    column_count
                );
                return Err(BulkWriterError::new(
                    &format!("Identity column {} does not exist in table '{}'", ordinal, name),
                    ErrorKind::BulkCopyError,
                ));
            }
        }

        self.tables.write_with(|tables| {
            if tables.contains_key(name) {
                log::error!("Table {} already exists", name);
                return Err(BulkWriterError::new(
                    &format!("Table '{}' already exists", name),
                    ErrorKind::BulkCopyError,
                ));
            }
            tables.insert(
                name.to_string(),
                InMemoryTable::new(column_count, identity_ordinal),
            );
            Ok(())
        })
    }

    fn with_table<R>(&self, name: &str, f: impl FnOnce(&InMemoryTable) -> R) -> BulkWriterResult<R> {
        self.tables.read_with(|tables| match tables.get(name) {
            Some(table) => Ok(f(table)),
            None => {
                log::error!("Table {} does not exist", name);
                Err(BulkWriterError::new(
                    &format!("Cannot access destination table '{}'", name),
                    ErrorKind::BulkCopyError,
                ))
            }
        })
    }
}
