#![recursion_limit = "128"]
//! # BulkWriter Derive Macros
//!
//! This crate provides the procedural macro that implements
//! `bulkwriter::mapping::BulkCopyEntity` from attributes on a struct.
//!
//! ## `BulkCopyEntity`
//!
//! - **Supported for**: Structs with named fields only
//! - **Struct attribute**: `#[map_to_table(name = "...")]` names the destination
//!   table. Without it the type compiles, but creating a bulk copy for it fails
//!   with a configuration error.
//! - **Field attribute**: `#[map_to_column(ordinal = N)]` maps the field to the
//!   destination column at zero-based position `N`. Add `insert_identity` (or
//!   `insert_identity = true`) to keep the supplied value for an identity column.
//!   Fields without the attribute are not copied.
//!
//! Every mapped field type must implement `bulkwriter::common::ToValue`; unmapped
//! fields may have any type.
//!
//! # Examples
//!
//! ```rust,ignore
//! use bulkwriter_derive::BulkCopyEntity;
//!
//! #[derive(BulkCopyEntity)]
//! #[map_to_table(name = "dbo.Products")]
//! pub struct Product {
//!     #[map_to_column(ordinal = 0, insert_identity)]
//!     pub id: i32,
//!     #[map_to_column(ordinal = 1)]
//!     pub name: String,
//!     #[map_to_column(ordinal = 3)]
//!     pub price: f64,
//!     pub in_cart: bool,
//! }
//! ```

extern crate proc_macro;
mod bulk_copy_entity;

use crate::bulk_copy_entity::generate_entity_for_struct;
use proc_macro::TokenStream;
use syn::{Data, DeriveInput};

/// Derives the `BulkCopyEntity` trait.
///
/// Properties are reported in field declaration order, so source ordinals
/// follow the order fields are declared in.
///
/// # Attributes
///
/// - `#[map_to_table(name = "table")]` - Destination table (struct level)
/// - `#[map_to_column(ordinal = 0, insert_identity)]` - Destination column (field level)
///
/// # Errors
///
/// Returns a compile error if:
/// - Applied to an enum, a union, a tuple struct or a unit struct
/// - An attribute is repeated, misspelled or missing its required value
#[proc_macro_derive(BulkCopyEntity, attributes(map_to_table, map_to_column))]
pub fn derive_bulk_copy_entity(input: TokenStream) -> TokenStream {
    let ast = syn::parse_macro_input!(input as DeriveInput);

    match ast.data {
        Data::Struct(ref data) => match generate_entity_for_struct(&ast, data) {
            Ok(token_stream) => token_stream,
            Err(e) => e.to_compile_error().into(),
        },
        Data::Enum(_) => {
            let error = syn::Error::new_spanned(
                &ast,
                "Cannot derive BulkCopyEntity for enums. Only structs are supported.",
            );
            error.to_compile_error().into()
        }
        Data::Union(_) => {
            let error = syn::Error::new_spanned(
                &ast,
                "Cannot derive BulkCopyEntity for unions. Only structs are supported.",
            );
            error.to_compile_error().into()
        }
    }
}
