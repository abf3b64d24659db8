use crate::bulk_copy::BulkCopyOptions;
use crate::errors::{BulkWriterError, BulkWriterResult, ErrorKind};
use crate::mapping::{BulkCopyEntity, PropertyInfo};

/// Resolves the destination table of `item`'s type.
///
/// Fails with [`ErrorKind::ConfigurationError`] when the type carries no table
/// mapping. The name itself is passed on as declared.
pub fn table_name_of<E: BulkCopyEntity>(item: &E) -> BulkWriterResult<String> {
    match item.table_name() {
        Some(name) => Ok(name),
        None => {
            log::error!(
                "Type {} is not decorated with a bulk copy table mapping",
                std::any::type_name::<E>()
            );
            Err(BulkWriterError::new(
                "The type is not decorated with the [map_to_table] attribute",
                ErrorKind::ConfigurationError,
            ))
        }
    }
}

/// Decides the transfer options for `item`'s type.
pub fn bulk_copy_options_of<E: BulkCopyEntity>(item: &E) -> BulkCopyOptions {
    identity_preservation(&item.properties())
}

/// `KeepIdentity` if any mapped property asks to insert identity values,
/// `Default` otherwise.
pub fn identity_preservation<E>(properties: &[PropertyInfo<E>]) -> BulkCopyOptions {
    let preserving_identity = properties
        .iter()
        .filter_map(|p| p.column())
        .any(|c| c.insert_identity());

    if preserving_identity {
        BulkCopyOptions::KeepIdentity
    } else {
        BulkCopyOptions::Default
    }
}
