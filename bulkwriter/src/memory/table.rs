use crate::common::{Row, Value};
use crate::errors::{BulkWriterError, BulkWriterResult, ErrorKind};

/// A destination table held in memory.
///
/// Rows are stored in destination layout (one value per column). When the
/// table has an identity column it generates values for it, starting at 1,
/// unless the bulk copy asks to keep the supplied ones.
#[derive(Debug, Clone)]
pub struct InMemoryTable {
    column_count: usize,
    identity_ordinal: Option<usize>,
    // None once the identity range is used up
    next_identity: Option<i64>,
    rows: Vec<Row>,
}

impl InMemoryTable {
    pub(crate) fn new(column_count: usize, identity_ordinal: Option<usize>) -> Self {
        InMemoryTable {
            column_count,
            identity_ordinal,
            next_identity: Some(1),
            rows: Vec::new(),
        }
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn identity_ordinal(&self) -> Option<usize> {
        self.identity_ordinal
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub(crate) fn append(&mut self, row: Row, keep_identity: bool) -> BulkWriterResult<()> {
        let mut values = row.into_values();
        if let Some(ordinal) = self.identity_ordinal {
            if keep_identity {
                // supplied identities move the seed past them
                if let Some(supplied) = values[ordinal].as_i64() {
                    self.next_identity = match supplied.checked_add(1) {
                        Some(next) => self.next_identity.map(|seed| seed.max(next)),
                        None => None,
                    };
                }
            } else {
                match self.next_identity {
                    Some(identity) => {
                        values[ordinal] = Value::I64(identity);
                        self.next_identity = identity.checked_add(1);
                    }
                    None => {
                        log::error!("Identity column {} has no values left", ordinal);
                        return Err(BulkWriterError::new(
                            "Arithmetic overflow while generating an identity value",
                            ErrorKind::BulkCopyError,
                        ));
                    }
                }
            }
        }
        self.rows.push(Row::new(values));
        Ok(())
    }
}
