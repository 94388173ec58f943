use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Destination name, the display and de-duplication key of a trip.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TripName(String);

#[derive(Debug, Error)]
pub enum TripNameError {
    #[error("Trip name is empty")]
    Empty,
}

impl TripName {
    /// Build a name, trimming surrounding whitespace. Blank names are rejected.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, TripNameError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TripNameError::Empty);
        }
        Ok(TripName(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Names are compared case-insensitively when screening a catalog for duplicates.
    pub fn dedup_key(&self) -> String {
        self.0.to_lowercase()
    }
}

impl TryFrom<String> for TripName {
    type Error = TripNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TripName::new(value)
    }
}

impl From<TripName> for String {
    fn from(name: TripName) -> Self {
        name.0
    }
}

impl std::fmt::Display for TripName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content hash of a screened catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogVersion(String);

impl CatalogVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        CatalogVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
