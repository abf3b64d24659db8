use crate::bulk_copy::BulkCopyOptions;
use crate::common::{DEFAULT_BATCH_SIZE, DEFAULT_BULK_COPY_TIMEOUT, DEFAULT_ENABLE_STREAMING};
use crate::mapping::ColumnMapping;
use itertools::Itertools;
use std::time::Duration;

/// Everything a bulk copy collaborator needs to allocate a bulk copy.
///
/// # Purpose
/// Built by [`BulkCopyFactory`](crate::bulk_copy::BulkCopyFactory) from an
/// entity's metadata and handed to
/// [`BulkCopyConnection::create_bulk_copy`](crate::bulk_copy::BulkCopyConnection::create_bulk_copy).
///
/// # Characteristics
/// - Batch size, timeout and streaming are fixed at 4096 rows, no timeout and
///   enabled
/// - Column mappings keep the order in which they were added
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BulkCopyConfig {
    destination_table_name: String,
    options: BulkCopyOptions,
    batch_size: usize,
    timeout: Option<Duration>,
    enable_streaming: bool,
    column_mappings: Vec<ColumnMapping>,
}

impl BulkCopyConfig {
    pub fn new(destination_table_name: &str, options: BulkCopyOptions) -> Self {
        BulkCopyConfig {
            destination_table_name: destination_table_name.to_string(),
            options,
            batch_size: DEFAULT_BATCH_SIZE,
            timeout: DEFAULT_BULK_COPY_TIMEOUT,
            enable_streaming: DEFAULT_ENABLE_STREAMING,
            column_mappings: Vec::new(),
        }
    }

    pub fn destination_table_name(&self) -> &str {
        &self.destination_table_name
    }

    pub fn options(&self) -> BulkCopyOptions {
        self.options
    }

    /// Number of rows sent to the destination per batch.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// `None` means the operation never times out.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn enable_streaming(&self) -> bool {
        self.enable_streaming
    }

    pub fn column_mappings(&self) -> &[ColumnMapping] {
        &self.column_mappings
    }

    pub fn add_column_mapping(&mut self, mapping: ColumnMapping) {
        self.column_mappings.push(mapping);
    }

    /// Destination ordinals targeted by more than one column mapping.
    ///
    /// These are not rejected here; whether they are acceptable is up to the
    /// collaborator.
    pub fn duplicate_destination_ordinals(&self) -> Vec<usize> {
        self.column_mappings
            .iter()
            .map(|m| m.destination_ordinal())
            .duplicates()
            .sorted()
            .collect()
    }
}
