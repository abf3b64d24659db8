use crate::bulk_copy::{BulkCopyConnection, BulkCopyFactory};
use crate::errors::BulkWriterResult;
use crate::mapping::BulkCopyEntity;

/// Writes a sequence of entities to their destination table in one bulk copy.
///
/// The first entity is used as the sample for
/// [`BulkCopyFactory::create`]; every entity, the first included, is then
/// turned into a row through the resulting ordinal table. The handle is
/// finished and released before returning, and released on error as well.
pub struct BulkWriter<'a, C: BulkCopyConnection> {
    factory: BulkCopyFactory<'a, C>,
}

impl<'a, C: BulkCopyConnection> BulkWriter<'a, C> {
    pub fn new(factory: BulkCopyFactory<'a, C>) -> Self {
        BulkWriter { factory }
    }

    /// Returns the number of rows written. Nothing is allocated for an empty
    /// input.
    pub fn write_to_database<E, I>(&self, items: I) -> BulkWriterResult<usize>
    where
        E: BulkCopyEntity,
        I: IntoIterator<Item = E>,
    {
        let mut items = items.into_iter().peekable();
        let (mut handle, mappings) = match items.peek() {
            Some(first) => self.factory.create(Some(first))?,
            None => {
                log::debug!("Nothing to write for {}", std::any::type_name::<E>());
                return Ok(0);
            }
        };

        let mut written = 0;
        for item in items {
            handle.write_row(mappings.to_row(&item))?;
            written += 1;
        }
        handle.finish()?;

        log::debug!(
            "Wrote {} rows into {}",
            written,
            handle.destination_table_name()
        );
        handle.close();
        Ok(written)
    }
}
