//! Persistence adapter for the profile list
//!
//! The whole list lives as one JSON array under [`STORAGE_KEY`]. Reads fail
//! soft; writes overwrite the entire value.

use serde_json::Value;

use super::profile::Profile;
use super::store::{KeyValueStore, StoreError};

/// Fixed storage key for the serialized profile list
pub const STORAGE_KEY: &str = "profiles.v1";

pub struct ProfileRepository<S> {
    store: S,
}

impl<S: KeyValueStore> ProfileRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load every stored profile
    ///
    /// Returns an empty list when the key is missing, the store cannot be
    /// read, the value is not valid JSON, is not an array, or any element
    /// does not match the [`Profile`] shape.
    pub fn load(&self) -> Vec<Profile> {
        let raw = match self.store.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read profile store");
                return Vec::new();
            }
        };

        parse_profiles(&raw).unwrap_or_else(|reason| {
            tracing::warn!(key = STORAGE_KEY, reason, "ignoring malformed profile data");
            Vec::new()
        })
    }

    /// Serialize the full list and overwrite the stored value
    pub fn save(&self, profiles: &[Profile]) -> Result<(), StoreError> {
        let json = serde_json::to_string(profiles)?;
        self.store.set_item(STORAGE_KEY, &json)?;
        tracing::debug!(count = profiles.len(), "saved profiles");
        Ok(())
    }
}

/// Map a stored value onto the typed list, or explain why it does not fit
fn parse_profiles(raw: &str) -> Result<Vec<Profile>, &'static str> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(raw).map_err(|_| "invalid JSON")?;
    if !value.is_array() {
        return Err("not an array");
    }

    serde_json::from_value(value).map_err(|_| "element does not match profile schema")
}
