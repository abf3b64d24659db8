//! # BulkWriter - Attribute-driven bulk copy configuration
//!
//! BulkWriter prepares bulk inserts into relational tables from plain Rust
//! types. It reads the metadata attached to a type (destination table, the
//! destination column of each property, identity preservation), builds the
//! column mappings for the database client's bulk copy and returns an ordinal
//! table that turns instances of the type into positional rows.
//!
//! Moving rows over the wire, transactions and connections belong to the
//! database client, reached through the [`bulk_copy::BulkCopyConnection`] trait.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bulkwriter::bulk_copy::{BulkCopyFactory, BulkWriter};
//! use bulkwriter::memory::InMemoryConnection;
//! use bulkwriter_derive::BulkCopyEntity;
//!
//! #[derive(BulkCopyEntity)]
//! #[map_to_table(name = "dbo.Orders")]
//! pub struct Order {
//!     #[map_to_column(ordinal = 0, insert_identity)]
//!     pub id: i64,
//!     #[map_to_column(ordinal = 1)]
//!     pub customer: String,
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let connection = InMemoryConnection::new();
//! connection.create_table("dbo.Orders", 2, Some(0))?;
//!
//! let writer = BulkWriter::new(BulkCopyFactory::new(&connection, None));
//! let written = writer.write_to_database(vec![
//!     Order { id: 1, customer: "Ada".into() },
//!     Order { id: 2, customer: "Grace".into() },
//! ])?;
//! assert_eq!(written, 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`bulk_copy`] - Bulk copy configuration, collaborator traits, factory and writer
//! - [`common`] - Values, rows and constants
//! - [`errors`] - Error types and result definitions
//! - [`mapping`] - Entity metadata, resolver and column mapping builder
//! - [`memory`] - In-memory bulk copy collaborator

pub mod bulk_copy;
pub mod common;
pub mod errors;
pub mod mapping;
pub mod memory;
