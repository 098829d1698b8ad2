//! Column handle referencing a single column of a native table

use crate::handle::error::{HandleError, HandleResult};
use crate::handle::name::check_column_name;
use crate::types::{ColumnId, HANDLE_PREFIX};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column handle
///
/// Identifies a column by name and a positive numeric ID. Equality and
/// hashing cover both fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawColumnHandle")]
#[serde(rename_all = "camelCase")]
pub struct ColumnHandle {
    /// Column name
    column_name: String,
    /// Column ID, always > 0
    column_id: ColumnId,
}

impl ColumnHandle {
    /// Create a new column handle
    ///
    /// # Arguments
    /// * `column_name` - Column name, non-empty and lowercase
    /// * `column_id` - Column ID, must be greater than zero
    pub fn new(column_name: impl Into<String>, column_id: ColumnId) -> HandleResult<Self> {
        let column_name = column_name.into();
        if let Err(err) = check_column_name(&column_name) {
            log::debug!("rejected column handle: {}", err);
            return Err(err);
        }
        if column_id <= 0 {
            log::debug!("rejected column handle {}: columnId {}", column_name, column_id);
            return Err(HandleError::NonPositiveColumnId(column_id));
        }
        Ok(Self {
            column_name,
            column_id,
        })
    }

    /// Get column name
    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    /// Get column ID
    pub fn column_id(&self) -> ColumnId {
        self.column_id
    }
}

impl fmt::Display for ColumnHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", HANDLE_PREFIX, self.column_name, self.column_id)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawColumnHandle {
    column_name: String,
    column_id: ColumnId,
}

impl TryFrom<RawColumnHandle> for ColumnHandle {
    type Error = HandleError;

    fn try_from(raw: RawColumnHandle) -> HandleResult<Self> {
        ColumnHandle::new(raw.column_name, raw.column_id)
    }
}
