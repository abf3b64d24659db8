use crate::bulk_copy::{BulkCopyConfig, BulkCopyConnection, BulkCopyHandle};
use crate::errors::{BulkWriterError, BulkWriterResult, ErrorKind};
use crate::mapping::{
    identity_preservation, map_properties, table_name_of, BulkCopyEntity,
    PropertyToOrdinalMappings,
};

/// Creates configured bulk copies for entity types.
///
/// # Purpose
/// Combines the entity metadata of a sample instance into a [`BulkCopyConfig`],
/// allocates the bulk copy through the borrowed connection and hands back the
/// ordinal table needed to turn entities of that type into rows.
///
/// # Characteristics
/// - Borrows the connection and the optional transaction; it never opens,
///   commits or closes them
/// - Holds no state between calls: every [`create`](BulkCopyFactory::create)
///   builds a fresh handle and ordinal table
///
/// # Usage
/// ```text
/// let factory = BulkCopyFactory::new(&connection, Some(&transaction));
/// let (mut handle, mappings) = factory.create(Some(&first_order))?;
/// for order in &orders {
///     handle.write_row(mappings.to_row(order))?;
/// }
/// handle.finish()?;
/// handle.close();
/// ```
pub struct BulkCopyFactory<'a, C: BulkCopyConnection> {
    connection: &'a C,
    transaction: Option<&'a C::Transaction>,
}

impl<'a, C: BulkCopyConnection> BulkCopyFactory<'a, C> {
    pub fn new(connection: &'a C, transaction: Option<&'a C::Transaction>) -> Self {
        BulkCopyFactory {
            connection,
            transaction,
        }
    }

    /// Creates a bulk copy for the type of `item`.
    ///
    /// # Arguments
    /// * `item` - A sample instance of the entity type to copy
    ///
    /// # Returns
    /// The bulk copy handle and the ordinal table built for the type.
    ///
    /// # Errors
    /// - [`ErrorKind::NullArgument`] if `item` is `None`
    /// - [`ErrorKind::ConfigurationError`] if the type has no table mapping
    /// - any error the connection raises while allocating the bulk copy
    pub fn create<E: BulkCopyEntity>(
        &self,
        item: Option<&E>,
    ) -> BulkWriterResult<(BulkCopyHandle<C::BulkCopy>, PropertyToOrdinalMappings<E>)> {
        let item = match item {
            Some(item) => item,
            None => {
                log::error!("No item supplied to create a bulk copy");
                return Err(BulkWriterError::new(
                    "item must not be null",
                    ErrorKind::NullArgument,
                ));
            }
        };

        let table_name = table_name_of(item)?;
        let properties = item.properties();
        let options = identity_preservation(&properties);

        let mut config = BulkCopyConfig::new(&table_name, options);
        let mut mappings = PropertyToOrdinalMappings::with_capacity(properties.len());
        map_properties(&properties, &mut config, &mut mappings);

        let duplicates = config.duplicate_destination_ordinals();
        if !duplicates.is_empty() {
            log::warn!(
                "Destination ordinals {:?} of {} are mapped by more than one property",
                duplicates,
                table_name
            );
        }

        let bulk_copy = self
            .connection
            .create_bulk_copy(self.transaction, config.clone())?;

        log::debug!(
            "Created bulk copy into {} with {} column mappings ({})",
            table_name,
            mappings.len(),
            options
        );
        Ok((BulkCopyHandle::new(bulk_copy, config), mappings))
    }
}
