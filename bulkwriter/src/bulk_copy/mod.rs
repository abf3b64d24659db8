//! Bulk copy configuration, the collaborator traits and the factory tying them
//! to entity metadata.
//!
//! # Components
//!
//! - [`BulkCopyConnection`] / [`BulkCopy`] - the database client seam
//! - [`BulkCopyConfig`] - table, options, column mappings and fixed parameters
//! - [`BulkCopyFactory`] - builds a config from a sample entity and allocates
//!   a [`BulkCopyHandle`]
//! - [`BulkWriter`] - writes a whole sequence of entities through one handle

mod config;
mod connection;
mod factory;
mod handle;
mod options;
mod writer;

pub use config::*;
pub use connection::*;
pub use factory::*;
pub use handle::*;
pub use options::*;
pub use writer::*;
