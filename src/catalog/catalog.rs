// Read-only once built:
// screened on construction
// versioned by content
// never mutated afterwards

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::catalog::template::TripTemplate;
use crate::types::identifiers::CatalogVersion;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Catalog must be a JSON array of trip templates")]
    NotAnArray,
}

/// Result of screening a template list: entries that may take part in selection.
#[derive(Debug)]
pub struct Screened<'a> {
    pub kept: Vec<&'a TripTemplate>,
    pub dropped: usize,
}

/// Drop later duplicates of an already-seen name, keeping catalog order.
pub fn screen(templates: &[TripTemplate]) -> Screened<'_> {
    let mut seen = BTreeSet::new();
    let mut kept = Vec::with_capacity(templates.len());
    let mut dropped = 0;

    for template in templates {
        if seen.insert(template.name.dedup_key()) {
            kept.push(template);
        } else {
            warn!(name = template.name.as_str(), "dropping duplicate catalog entry");
            dropped += 1;
        }
    }

    Screened { kept, dropped }
}

/// A materialized trip catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    templates: Vec<TripTemplate>,
    version: CatalogVersion,
    dropped: usize,
    loaded_at: DateTime<Utc>, // informational only
}

impl Catalog {
    pub fn from_templates(templates: Vec<TripTemplate>) -> Result<Self, CatalogError> {
        Self::build(templates, 0)
    }

    /// Decode each entry on its own. Undecodable entries are logged and skipped.
    pub fn from_values(values: Vec<Value>) -> Result<Self, CatalogError> {
        let mut templates = Vec::with_capacity(values.len());
        let mut malformed = 0;

        for (index, value) in values.into_iter().enumerate() {
            match serde_json::from_value::<TripTemplate>(value) {
                Ok(template) => templates.push(template),
                Err(err) => {
                    warn!(index, error = %err, "dropping malformed catalog entry");
                    malformed += 1;
                }
            }
        }

        Self::build(templates, malformed)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        match serde_json::from_str::<Value>(json)? {
            Value::Array(values) => Self::from_values(values),
            _ => Err(CatalogError::NotAnArray),
        }
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let data = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&data)
    }

    fn build(templates: Vec<TripTemplate>, malformed: usize) -> Result<Self, CatalogError> {
        let Screened { kept, dropped } = screen(&templates);
        let templates: Vec<TripTemplate> = kept.into_iter().cloned().collect();

        // Version is computed over the screened list so equal content hashes equal
        let content = serde_json::to_vec(&templates)?;
        let version = CatalogVersion::from_content(&content);

        Ok(Catalog {
            templates,
            version,
            dropped: malformed + dropped,
            loaded_at: Utc::now(),
        })
    }

    pub fn templates(&self) -> &[TripTemplate] {
        &self.templates
    }

    pub fn version(&self) -> &CatalogVersion {
        &self.version
    }

    /// Entries rejected while building: undecodable plus duplicate names.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
