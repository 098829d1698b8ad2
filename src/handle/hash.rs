//! Stable identity digest for table handles
//!
//! `std::hash::Hash` output depends on the hasher and may differ between
//! processes. The digest here is xxh64 over a fixed byte layout, so it can
//! be persisted or used to route a table to a shard.

use crate::types::{STABLE_HASH_SEED, TableId};
use xxhash_rust::xxh64::Xxh64;

/// Digest of (schema name, table name, table ID)
///
/// Each string is length-prefixed so that ("ab", "c") and ("a", "bc")
/// produce different input bytes.
pub fn identity_hash(schema_name: &str, table_name: &str, table_id: TableId) -> u64 {
    let mut hasher = Xxh64::new(STABLE_HASH_SEED);
    hasher.update(&(schema_name.len() as u64).to_le_bytes());
    hasher.update(schema_name.as_bytes());
    hasher.update(&(table_name.len() as u64).to_le_bytes());
    hasher.update(table_name.as_bytes());
    hasher.update(&table_id.to_le_bytes());
    hasher.digest()
}
