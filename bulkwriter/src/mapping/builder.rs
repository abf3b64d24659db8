use crate::bulk_copy::BulkCopyConfig;
use crate::mapping::{ColumnMapping, PropertyInfo, PropertyToOrdinalMappings};

/// Fills `config`'s column mappings and the ordinal table in one pass.
///
/// Each mapped property gets the next source ordinal (0-based, in the order
/// `properties` lists them) and one column mapping from that ordinal to its
/// declared destination ordinal. Unmapped properties are skipped.
pub fn map_properties<E>(
    properties: &[PropertyInfo<E>],
    config: &mut BulkCopyConfig,
    mappings: &mut PropertyToOrdinalMappings<E>,
) {
    for property in properties {
        if let Some(column) = property.column() {
            let ordinal = mappings.add(*property);
            let mapping = ColumnMapping::new(ordinal, column.ordinal());
            log::debug!(
                "Mapped property '{}' of {} as {}",
                property.name(),
                config.destination_table_name(),
                mapping
            );
            config.add_column_mapping(mapping);
        }
    }
}
