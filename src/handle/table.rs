//! Table handle identifying a physical table in the catalog

use crate::handle::column::ColumnHandle;
use crate::handle::error::{HandleError, HandleResult};
use crate::handle::hash::identity_hash;
use crate::handle::name::{check_schema_name, check_table_name, SchemaTableName};
use crate::types::{TableId, HANDLE_PREFIX};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Table handle
///
/// Names a table by schema, table name and a positive table ID, and may
/// carry the handle of the table's sample weight column.
///
/// Identity is (schema_name, table_name, table_id). The sample weight
/// column is NOT part of equality or hashing: two handles for the same
/// table compare equal whatever sample weight column they carry. Keep
/// `PartialEq` and `Hash` reading only the three identity fields.
///
/// A handle is immutable and only obtainable through [`TableHandle::new`]
/// or deserialization, which calls `new`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawTableHandle")]
#[serde(rename_all = "camelCase")]
pub struct TableHandle {
    schema_name: String,
    table_name: String,
    table_id: TableId,
    sample_weight_column_handle: Option<Arc<ColumnHandle>>,
}

impl TableHandle {
    /// Create a new table handle
    ///
    /// Checks run in order: schema name, table name, then `table_id > 0`.
    /// The first failing check is the error returned.
    ///
    /// # Arguments
    /// * `schema_name` - Schema name, non-empty and lowercase
    /// * `table_name` - Table name, non-empty and lowercase
    /// * `table_id` - Catalog table ID, must be greater than zero
    /// * `sample_weight_column_handle` - Optional sample weight column
    pub fn new(
        schema_name: impl Into<String>,
        table_name: impl Into<String>,
        table_id: TableId,
        sample_weight_column_handle: Option<Arc<ColumnHandle>>,
    ) -> HandleResult<Self> {
        let schema_name = schema_name.into();
        let table_name = table_name.into();

        if let Err(err) =
            check_schema_name(&schema_name).and_then(|_| check_table_name(&table_name))
        {
            log::debug!("rejected table handle: {}", err);
            return Err(err);
        }
        if table_id <= 0 {
            log::debug!(
                "rejected table handle {}.{}: tableId {}",
                schema_name,
                table_name,
                table_id
            );
            return Err(HandleError::NonPositiveTableId(table_id));
        }

        Ok(Self {
            schema_name,
            table_name,
            table_id,
            sample_weight_column_handle,
        })
    }

    /// Get schema name
    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    /// Get table name
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Get table ID
    pub fn table_id(&self) -> TableId {
        self.table_id
    }

    /// Get the sample weight column handle, if any
    pub fn sample_weight_column_handle(&self) -> Option<&Arc<ColumnHandle>> {
        self.sample_weight_column_handle.as_ref()
    }

    /// Check if the table has a sample weight column
    pub fn has_sample_weight_column(&self) -> bool {
        self.sample_weight_column_handle.is_some()
    }

    /// Get the qualified schema.table name
    pub fn schema_table_name(&self) -> SchemaTableName {
        SchemaTableName::from_checked(self.schema_name.clone(), self.table_name.clone())
    }

    /// Process-independent digest of the handle's identity
    ///
    /// Equal handles always have equal stable hashes.
    pub fn stable_hash(&self) -> u64 {
        identity_hash(&self.schema_name, &self.table_name, self.table_id)
    }
}

impl PartialEq for TableHandle {
    fn eq(&self, other: &Self) -> bool {
        self.schema_name == other.schema_name
            && self.table_name == other.table_name
            && self.table_id == other.table_id
    }
}

impl Eq for TableHandle {}

impl Hash for TableHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.schema_name.hash(state);
        self.table_name.hash(state);
        self.table_id.hash(state);
    }
}

impl fmt::Display for TableHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}.{}:{}",
            HANDLE_PREFIX, self.schema_name, self.table_name, self.table_id
        )
    }
}

/// Unvalidated wire form, only turned into a handle through `TableHandle::new`
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTableHandle {
    schema_name: String,
    table_name: String,
    table_id: TableId,
    #[serde(default)]
    sample_weight_column_handle: Option<ColumnHandle>,
}

impl TryFrom<RawTableHandle> for TableHandle {
    type Error = HandleError;

    fn try_from(raw: RawTableHandle) -> HandleResult<Self> {
        TableHandle::new(
            raw.schema_name,
            raw.table_name,
            raw.table_id,
            raw.sample_weight_column_handle.map(Arc::new),
        )
    }
}
