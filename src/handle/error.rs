//! Handle error definitions

use crate::types::{
    ColumnId, TableId, FIELD_COLUMN_ID, FIELD_COLUMN_NAME, FIELD_SCHEMA_NAME, FIELD_TABLE_ID,
    FIELD_TABLE_NAME,
};
use std::error::Error;
use std::fmt;

/// Why a schema, table or column name was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameViolation {
    /// Name is empty
    Empty,
    /// Name contains uppercase characters
    NotLowercase,
}

impl fmt::Display for NameViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameViolation::Empty => write!(f, "is empty"),
            NameViolation::NotLowercase => write!(f, "is not lowercase"),
        }
    }
}

/// Handle error types
///
/// Every variant is a rejection of input at construction time, including
/// construction performed while deserializing. No handle exists when one
/// of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandleError {
    /// Schema name failed validation
    InvalidSchemaName {
        name: String,
        violation: NameViolation,
    },
    /// Table name failed validation
    InvalidTableName {
        name: String,
        violation: NameViolation,
    },
    /// Table ID is zero or negative
    NonPositiveTableId(TableId),
    /// Column name failed validation
    InvalidColumnName {
        name: String,
        violation: NameViolation,
    },
    /// Column ID is zero or negative
    NonPositiveColumnId(ColumnId),
}

impl HandleError {
    /// Wire field name of the value that failed
    pub fn field(&self) -> &'static str {
        match self {
            HandleError::InvalidSchemaName { .. } => FIELD_SCHEMA_NAME,
            HandleError::InvalidTableName { .. } => FIELD_TABLE_NAME,
            HandleError::NonPositiveTableId(_) => FIELD_TABLE_ID,
            HandleError::InvalidColumnName { .. } => FIELD_COLUMN_NAME,
            HandleError::NonPositiveColumnId(_) => FIELD_COLUMN_ID,
        }
    }

    /// All handle errors are input validation failures
    pub fn is_validation(&self) -> bool {
        true
    }
}

impl fmt::Display for HandleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandleError::InvalidSchemaName { name, violation } => {
                write!(f, "Invalid schema name '{}': {} {}", name, FIELD_SCHEMA_NAME, violation)
            }
            HandleError::InvalidTableName { name, violation } => {
                write!(f, "Invalid table name '{}': {} {}", name, FIELD_TABLE_NAME, violation)
            }
            HandleError::NonPositiveTableId(id) => {
                write!(f, "{} must be greater than zero, got {}", FIELD_TABLE_ID, id)
            }
            HandleError::InvalidColumnName { name, violation } => {
                write!(f, "Invalid column name '{}': {} {}", name, FIELD_COLUMN_NAME, violation)
            }
            HandleError::NonPositiveColumnId(id) => {
                write!(f, "{} must be greater than zero, got {}", FIELD_COLUMN_ID, id)
            }
        }
    }
}

impl Error for HandleError {}

/// Result type for handle construction
pub type HandleResult<T> = Result<T, HandleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_error_display() {
        let err = HandleError::NonPositiveTableId(0);
        assert_eq!(err.to_string(), "tableId must be greater than zero, got 0");

        let err = HandleError::InvalidSchemaName {
            name: String::new(),
            violation: NameViolation::Empty,
        };
        assert_eq!(err.to_string(), "Invalid schema name '': schemaName is empty");

        let err = HandleError::InvalidTableName {
            name: "Orders".to_string(),
            violation: NameViolation::NotLowercase,
        };
        assert_eq!(
            err.to_string(),
            "Invalid table name 'Orders': tableName is not lowercase"
        );
    }

    #[test]
    fn test_handle_error_field() {
        assert_eq!(HandleError::NonPositiveTableId(-1).field(), "tableId");
        assert_eq!(HandleError::NonPositiveColumnId(0).field(), "columnId");
        let err = HandleError::InvalidColumnName {
            name: String::new(),
            violation: NameViolation::Empty,
        };
        assert_eq!(err.field(), "columnName");
        assert!(err.is_validation());
    }
}
