//! Entity metadata and the mapping from entity properties to bulk copy columns.
//!
//! A type takes part in a bulk copy by implementing [`BulkCopyEntity`], usually
//! through `#[derive(BulkCopyEntity)]` from the `bulkwriter_derive` crate:
//!
//! ```rust,ignore
//! use bulkwriter_derive::BulkCopyEntity;
//!
//! #[derive(BulkCopyEntity)]
//! #[map_to_table(name = "dbo.Customers")]
//! pub struct Customer {
//!     #[map_to_column(ordinal = 0, insert_identity)]
//!     pub id: i32,
//!     #[map_to_column(ordinal = 1)]
//!     pub name: String,
//! }
//! ```
//!
//! The resolver reads the table name and identity mode from that metadata and
//! the builder turns mapped properties into [`ColumnMapping`]s plus a
//! [`PropertyToOrdinalMappings`] table.

mod builder;
mod column_mapping;
mod entity;
mod ordinal_mappings;
mod resolver;

pub use builder::*;
pub use column_mapping::*;
pub use entity::*;
pub use ordinal_mappings::*;
pub use resolver::*;
