//! Schema and table name validation
//!
//! Names must be non-empty and already lowercase. Callers normalize case
//! before building a handle; the checks here never rewrite a name.

use crate::handle::error::{HandleError, HandleResult, NameViolation};
use serde::{Deserialize, Serialize};
use std::fmt;

fn check_name(name: &str) -> Result<(), NameViolation> {
    if name.is_empty() {
        return Err(NameViolation::Empty);
    }
    if name != name.to_lowercase() {
        return Err(NameViolation::NotLowercase);
    }
    Ok(())
}

/// Validate a schema name, returning it unchanged on success
pub fn check_schema_name(schema_name: &str) -> HandleResult<&str> {
    check_name(schema_name).map_err(|violation| HandleError::InvalidSchemaName {
        name: schema_name.to_string(),
        violation,
    })?;
    Ok(schema_name)
}

/// Validate a table name, returning it unchanged on success
pub fn check_table_name(table_name: &str) -> HandleResult<&str> {
    check_name(table_name).map_err(|violation| HandleError::InvalidTableName {
        name: table_name.to_string(),
        violation,
    })?;
    Ok(table_name)
}

/// Validate a column name, returning it unchanged on success
pub fn check_column_name(column_name: &str) -> HandleResult<&str> {
    check_name(column_name).map_err(|violation| HandleError::InvalidColumnName {
        name: column_name.to_string(),
        violation,
    })?;
    Ok(column_name)
}

/// Qualified table name: a validated schema and table pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawSchemaTableName")]
#[serde(rename_all = "camelCase")]
pub struct SchemaTableName {
    schema_name: String,
    table_name: String,
}

impl SchemaTableName {
    /// Create a qualified name, validating both parts
    pub fn new(
        schema_name: impl Into<String>,
        table_name: impl Into<String>,
    ) -> HandleResult<Self> {
        let schema_name = schema_name.into();
        let table_name = table_name.into();
        check_schema_name(&schema_name)?;
        check_table_name(&table_name)?;
        Ok(Self {
            schema_name,
            table_name,
        })
    }

    /// Build from parts that were already validated
    pub(crate) fn from_checked(schema_name: String, table_name: String) -> Self {
        Self {
            schema_name,
            table_name,
        }
    }

    /// Get schema name
    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    /// Get table name
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

impl fmt::Display for SchemaTableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.schema_name, self.table_name)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSchemaTableName {
    schema_name: String,
    table_name: String,
}

impl TryFrom<RawSchemaTableName> for SchemaTableName {
    type Error = HandleError;

    fn try_from(raw: RawSchemaTableName) -> HandleResult<Self> {
        SchemaTableName::new(raw.schema_name, raw.table_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_schema_name() {
        assert_eq!(check_schema_name("sales").unwrap(), "sales");
        assert_eq!(check_schema_name("tpch_sf1").unwrap(), "tpch_sf1");

        let err = check_schema_name("").unwrap_err();
        assert!(matches!(
            err,
            HandleError::InvalidSchemaName {
                violation: NameViolation::Empty,
                ..
            }
        ));

        let err = check_schema_name("Sales").unwrap_err();
        assert!(matches!(
            err,
            HandleError::InvalidSchemaName {
                violation: NameViolation::NotLowercase,
                ..
            }
        ));
    }

    #[test]
    fn test_check_name_non_ascii_case() {
        // titlecase and accented capitals have a distinct lowercase form
        for name in ["\u{01C5}", "\u{1F88}", "\u{00C9}", "caf\u{00C9}"] {
            let err = check_schema_name(name).unwrap_err();
            assert!(matches!(
                err,
                HandleError::InvalidSchemaName {
                    violation: NameViolation::NotLowercase,
                    ..
                }
            ));
        }

        assert_eq!(check_table_name("caf\u{00E9}").unwrap(), "caf\u{00E9}");
        assert_eq!(check_table_name("\u{01C6}").unwrap(), "\u{01C6}");
    }

    #[test]
    fn test_check_table_name() {
        assert_eq!(check_table_name("orders").unwrap(), "orders");
        assert!(matches!(
            check_table_name(""),
            Err(HandleError::InvalidTableName { .. })
        ));
        assert!(matches!(
            check_table_name("ORDERS"),
            Err(HandleError::InvalidTableName { .. })
        ));
    }

    #[test]
    fn test_check_column_name() {
        assert_eq!(check_column_name("weight").unwrap(), "weight");
        assert!(matches!(
            check_column_name(""),
            Err(HandleError::InvalidColumnName { .. })
        ));
    }

    #[test]
    fn test_schema_table_name() {
        let name = SchemaTableName::new("sales", "orders").unwrap();
        assert_eq!(name.schema_name(), "sales");
        assert_eq!(name.table_name(), "orders");
        assert_eq!(name.to_string(), "sales.orders");

        assert!(SchemaTableName::new("", "orders").is_err());
        assert!(SchemaTableName::new("sales", "").is_err());
    }

    #[test]
    fn test_schema_table_name_serde() {
        let name = SchemaTableName::new("sales", "orders").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, r#"{"schemaName":"sales","tableName":"orders"}"#);

        let decoded: SchemaTableName = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, name);

        let bad = serde_json::from_str::<SchemaTableName>(r#"{"schemaName":"","tableName":"t"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_schema_table_name_ordering() {
        let a = SchemaTableName::new("a", "z").unwrap();
        let b = SchemaTableName::new("b", "a").unwrap();
        assert!(a < b);
    }
}
