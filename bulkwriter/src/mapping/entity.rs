use crate::common::Value;
use std::fmt::{Debug, Formatter};

/// Trait that describes how a type is laid out in a bulk copy destination.
///
/// # Purpose
/// Replaces runtime attribute inspection with metadata generated at compile
/// time. It names the destination table and lists the type's properties, in
/// declaration order, with their optional column association.
///
/// # Characteristics
/// - `table_name()` returning `None` means the type was never marked for bulk
///   copy; the factory rejects it with a configuration error
/// - Properties are reported in a stable order; source ordinals are assigned
///   from that order
/// - Typically implemented via `#[derive(BulkCopyEntity)]`, but hand-written
///   implementations are equally valid
///
/// # Usage
/// ```ignore
/// #[derive(BulkCopyEntity)]
/// #[map_to_table(name = "dbo.Orders")]
/// pub struct Order {
///     #[map_to_column(ordinal = 0, insert_identity)]
///     id: i64,
///     #[map_to_column(ordinal = 2)]
///     customer: String,
///     // not mapped, never copied
///     cached_total: f64,
/// }
/// ```
pub trait BulkCopyEntity: Sized {
    /// Returns the destination table name, or `None` if the type carries no
    /// table mapping.
    fn table_name(&self) -> Option<String>;

    /// Returns every property of the type in declaration order, mapped or not.
    fn properties(&self) -> Vec<PropertyInfo<Self>>;
}

/// Column association of a single property.
///
/// `ordinal` is the zero-based position of the destination column.
/// `insert_identity` asks the destination to keep the supplied value instead of
/// generating one; a single property setting it switches the whole bulk copy to
/// identity-preserving mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapToColumn {
    ordinal: usize,
    insert_identity: bool,
}

impl MapToColumn {
    pub fn new(ordinal: usize) -> Self {
        MapToColumn {
            ordinal,
            insert_identity: false,
        }
    }

    pub fn with_insert_identity(mut self, insert_identity: bool) -> Self {
        self.insert_identity = insert_identity;
        self
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn insert_identity(&self) -> bool {
        self.insert_identity
    }
}

/// Descriptor of one property of a [`BulkCopyEntity`].
///
/// Holds the property name, its optional [`MapToColumn`] and an accessor that
/// reads the property value from an instance.
pub struct PropertyInfo<E> {
    name: &'static str,
    column: Option<MapToColumn>,
    accessor: fn(&E) -> Value,
}

impl<E> PropertyInfo<E> {
    /// A property copied to the destination column described by `column`.
    pub fn mapped(name: &'static str, column: MapToColumn, accessor: fn(&E) -> Value) -> Self {
        PropertyInfo {
            name,
            column: Some(column),
            accessor,
        }
    }

    /// A property that takes no part in the bulk copy.
    pub fn unmapped(name: &'static str, accessor: fn(&E) -> Value) -> Self {
        PropertyInfo {
            name,
            column: None,
            accessor,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn column(&self) -> Option<&MapToColumn> {
        self.column.as_ref()
    }

    pub fn is_mapped(&self) -> bool {
        self.column.is_some()
    }

    /// Reads this property from `item`.
    pub fn value_of(&self, item: &E) -> Value {
        (self.accessor)(item)
    }
}

// manual impls: derive would require `E: Clone`
impl<E> Clone for PropertyInfo<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for PropertyInfo<E> {}

impl<E> Debug for PropertyInfo<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyInfo")
            .field("name", &self.name)
            .field("column", &self.column)
            .finish()
    }
}
