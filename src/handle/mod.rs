//! Handle module for catalog identifiers
//!
//! This module implements the native handle value types:
//! - Table handles naming a physical table by schema, name and ID
//! - Column handles for the optional sample weight column
//! - Schema/table name validation shared by both

pub mod column;
pub mod error;
pub mod hash;
pub mod name;
pub mod table;

pub use column::ColumnHandle;
pub use error::{HandleError, HandleResult, NameViolation};
pub use name::{check_column_name, check_schema_name, check_table_name, SchemaTableName};
pub use table::TableHandle;

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
