//! Native table handle library

// Global type definitions
pub mod types;

// Handle value types
pub mod handle;

// Re-export handle items for easier access
pub use handle::{ColumnHandle, HandleError, HandleResult, SchemaTableName, TableHandle};
