/// Global type definitions
///
/// Stores type aliases and constants shared by the handle types
/// Table ID type
pub type TableId = i64;

/// Column ID type
pub type ColumnId = i64;

/// Prefix used when rendering handles for diagnostics
pub const HANDLE_PREFIX: &str = "native";

/// Wire field names
pub const FIELD_SCHEMA_NAME: &str = "schemaName";
pub const FIELD_TABLE_NAME: &str = "tableName";
pub const FIELD_TABLE_ID: &str = "tableId";
pub const FIELD_SAMPLE_WEIGHT_COLUMN_HANDLE: &str = "sampleWeightColumnHandle";
pub const FIELD_COLUMN_NAME: &str = "columnName";
pub const FIELD_COLUMN_ID: &str = "columnId";

/// Seed for the stable handle digest
pub const STABLE_HASH_SEED: u64 = 0;
