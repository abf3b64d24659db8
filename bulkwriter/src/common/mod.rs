//! Common types shared by the mapping and bulk copy modules.

mod constants;
mod row;
mod type_utils;
mod value;

pub use constants::*;
pub use row::*;
pub use type_utils::*;
pub use value::*;
