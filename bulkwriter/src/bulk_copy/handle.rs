use crate::bulk_copy::{BulkCopy, BulkCopyConfig, BulkCopyOptions};
use crate::common::Row;
use crate::errors::{BulkWriterError, BulkWriterResult, ErrorKind};
use crate::mapping::ColumnMapping;
use std::fmt::{Debug, Formatter};

/// Handle to an allocated bulk copy, returned by
/// [`BulkCopyFactory::create`](crate::bulk_copy::BulkCopyFactory::create).
///
/// The handle owns the underlying resource. It is released by
/// [`close`](BulkCopyHandle::close) or when the handle is dropped, so every exit
/// path gives it back.
pub struct BulkCopyHandle<B: BulkCopy> {
    bulk_copy: Option<B>,
    config: BulkCopyConfig,
}

impl<B: BulkCopy> BulkCopyHandle<B> {
    pub(crate) fn new(bulk_copy: B, config: BulkCopyConfig) -> Self {
        BulkCopyHandle {
            bulk_copy: Some(bulk_copy),
            config,
        }
    }

    pub fn destination_table_name(&self) -> &str {
        self.config.destination_table_name()
    }

    pub fn options(&self) -> BulkCopyOptions {
        self.config.options()
    }

    pub fn column_mappings(&self) -> &[ColumnMapping] {
        self.config.column_mappings()
    }

    pub fn config(&self) -> &BulkCopyConfig {
        &self.config
    }

    pub fn is_closed(&self) -> bool {
        self.bulk_copy.is_none()
    }

    /// The underlying bulk copy, or `None` once closed.
    pub fn get_ref(&self) -> Option<&B> {
        self.bulk_copy.as_ref()
    }

    pub fn write_row(&mut self, row: Row) -> BulkWriterResult<()> {
        self.open_bulk_copy()?.write_row(row)
    }

    /// Writes every row and returns how many were written.
    pub fn write_rows<I: IntoIterator<Item = Row>>(&mut self, rows: I) -> BulkWriterResult<usize> {
        let bulk_copy = self.open_bulk_copy()?;
        let mut count = 0;
        for row in rows {
            bulk_copy.write_row(row)?;
            count += 1;
        }
        Ok(count)
    }

    pub fn finish(&mut self) -> BulkWriterResult<()> {
        self.open_bulk_copy()?.finish()
    }

    /// Releases the underlying bulk copy. Closing twice is a no-op.
    pub fn close(&mut self) {
        if let Some(bulk_copy) = self.bulk_copy.take() {
            log::debug!(
                "Releasing bulk copy into {}",
                self.config.destination_table_name()
            );
            drop(bulk_copy);
        }
    }

    fn open_bulk_copy(&mut self) -> BulkWriterResult<&mut B> {
        match self.bulk_copy.as_mut() {
            Some(bulk_copy) => Ok(bulk_copy),
            None => {
                log::error!(
                    "Bulk copy into {} has already been closed",
                    self.config.destination_table_name()
                );
                Err(BulkWriterError::new(
                    "The bulk copy has already been closed",
                    ErrorKind::InvalidOperation,
                ))
            }
        }
    }
}

impl<B: BulkCopy> Debug for BulkCopyHandle<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BulkCopyHandle")
            .field("config", &self.config)
            .field("closed", &self.is_closed())
            .finish()
    }
}
