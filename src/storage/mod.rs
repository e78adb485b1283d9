//! Persistent key-value storage
//!
//! A small string-keyed store holding the credential list and the current
//! session. Values are JSON documents.

pub mod filesystem;
pub mod memory;

pub use filesystem::FileStore;
pub use memory::MemoryStore;

use crate::error::StorageError;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Key holding the JSON array of registered users
pub const USERS_KEY: &str = "users";

/// Key holding the JSON session object, absent when logged out
pub const AUTH_KEY: &str = "auth";

/// String-valued key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Reads and deserializes the value under `key`.
///
/// Returns `Ok(None)` when the key is absent and a serialization error when
/// the stored text does not parse.
pub fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Serialization(key.to_string(), e)),
        None => Ok(None),
    }
}

/// Serializes `value` and stores it under `key`
pub fn write_json<T: Serialize>(
    store: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw =
        serde_json::to_string(value).map_err(|e| StorageError::Serialization(key.to_string(), e))?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_helpers_round_trip_through_store() {
        let mut store = MemoryStore::default();
        write_json(&mut store, "numbers", &vec![1, 2, 3]).unwrap();
        let back: Option<Vec<i32>> = read_json(&store, "numbers").unwrap();
        assert_eq!(back, Some(vec![1, 2, 3]));
    }

    #[test]
    fn absent_key_reads_as_none() {
        let store = MemoryStore::default();
        let value: Option<Vec<i32>> = read_json(&store, "missing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn malformed_value_is_a_serialization_error() {
        let mut store = MemoryStore::default();
        store.set("numbers", "{not json").unwrap();
        let result: Result<Option<Vec<i32>>, _> = read_json(&store, "numbers");
        assert!(matches!(result, Err(StorageError::Serialization(ref k, _)) if k == "numbers"));
    }
}
