//! Persisted form snapshot.
//!
//! One JSON file in the data directory holds the nine raw field values
//! (camelCase string keys) plus a schema version. The snapshot is read
//! once at startup and overwritten before every export. A missing or
//! unparsable file is never an error: the form falls back to its defaults
//! and the failure is only logged.

use crate::error::Result;
use form_model::FieldSet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name of the snapshot inside the data directory.
pub const SNAPSHOT_FILE: &str = "cover_page_data.json";

/// Current snapshot schema version.
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

fn current_schema_version() -> u32 {
    SNAPSHOT_SCHEMA_VERSION
}

/// The on-disk shape: the field set plus a version tag. Unversioned
/// snapshots still parse via the serde default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSnapshot {
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,
    #[serde(flatten)]
    pub fields: FieldSet,
}

impl From<FieldSet> for PersistedSnapshot {
    fn from(fields: FieldSet) -> Self {
        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            fields,
        }
    }
}

/// Loads and saves the form snapshot.
pub struct SnapshotStore {
    snapshot_path: PathBuf,
}

impl SnapshotStore {
    /// Create a store rooted at the given data directory.
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            snapshot_path: data_dir.join(SNAPSHOT_FILE),
        }
    }

    /// Path of the snapshot file.
    pub fn snapshot_path(&self) -> &PathBuf {
        &self.snapshot_path
    }

    /// Load the saved field set, or defaults when the file is missing or
    /// unparsable.
    pub async fn load(&self) -> Result<FieldSet> {
        if !self.snapshot_path.exists() {
            return Ok(FieldSet::default());
        }
        let content = tokio::fs::read_to_string(&self.snapshot_path).await?;
        Ok(Self::parse_or_default(&content))
    }

    /// Synchronous [`SnapshotStore::load`].
    pub fn load_sync(&self) -> Result<FieldSet> {
        if !self.snapshot_path.exists() {
            return Ok(FieldSet::default());
        }
        let content = std::fs::read_to_string(&self.snapshot_path)?;
        Ok(Self::parse_or_default(&content))
    }

    fn parse_or_default(content: &str) -> FieldSet {
        match serde_json::from_str::<PersistedSnapshot>(content) {
            Ok(snapshot) => snapshot.fields,
            Err(e) => {
                tracing::warn!("Failed to parse saved snapshot, using defaults: {}", e);
                FieldSet::default()
            }
        }
    }

    /// Save the field set, creating the data directory if needed.
    pub async fn save(&self, fields: &FieldSet) -> Result<()> {
        if let Some(parent) = self.snapshot_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let snapshot = PersistedSnapshot::from(fields.clone());
        let content = serde_json::to_string_pretty(&snapshot)?;
        tokio::fs::write(&self.snapshot_path, content).await?;
        Ok(())
    }

    /// Synchronous [`SnapshotStore::save`].
    pub fn save_sync(&self, fields: &FieldSet) -> Result<()> {
        if let Some(parent) = self.snapshot_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let snapshot = PersistedSnapshot::from(fields.clone());
        let content = serde_json::to_string_pretty(&snapshot)?;
        std::fs::write(&self.snapshot_path, content)?;
        Ok(())
    }
}
