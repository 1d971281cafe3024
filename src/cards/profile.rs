//! The profile record behind each card

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque profile identifier, generated once at creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProfileId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored profile card
///
/// Serialized as `{ id, name, username, imageDataUrl? }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,

    /// Display name
    pub name: String,

    /// Canonical handle, always produced by the URL normalizer
    pub username: String,

    /// Self-contained `data:` URL of the avatar image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data_url: Option<String>,
}

impl Profile {
    /// Create a profile with a freshly generated id
    pub fn new(name: String, username: String, image_data_url: Option<String>) -> Self {
        Self {
            id: ProfileId::generate(),
            name,
            username,
            image_data_url,
        }
    }
}
