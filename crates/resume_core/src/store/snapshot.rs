//! Snapshot codec for import/export and persistence.
//!
//! # Responsibility
//! - Define the structural, order-preserving form of the whole store.
//! - Decode JSON text into that form, failing fast on malformed input.
//!
//! # Invariants
//! - Input must be a JSON object; arrays and scalars are malformed.
//! - Every top-level key is optional on input; presence is tracked with
//!   `Option` so "absent" and "present but empty" stay distinguishable.
//!   A JSON `null` counts as absent.
//! - Exports always carry every key plus `version`.
//! - Snapshots newer than `SNAPSHOT_FORMAT_VERSION` are rejected.

use crate::model::custom_block::CustomBlock;
use crate::model::education::Education;
use crate::model::experience::Experience;
use crate::model::personal::PersonalInfo;
use crate::model::project::Project;
use crate::model::section::Section;
use crate::model::skill::Skill;
use serde::de::Unexpected;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Latest snapshot format written by this build.
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// Suggested file name for JSON exports.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "resume-data.json";

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Errors surfaced to the persistence host when a snapshot cannot be used.
#[derive(Debug)]
pub enum SnapshotError {
    /// Input is not valid JSON or does not have the snapshot shape.
    Malformed(serde_json::Error),
    /// Input was written by a newer format.
    UnsupportedVersion { version: u32, latest_supported: u32 },
    /// Snapshot could not be encoded.
    Encode(serde_json::Error),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(err) => write!(f, "malformed snapshot: {err}"),
            Self::UnsupportedVersion {
                version,
                latest_supported,
            } => write!(
                f,
                "snapshot format version {version} is newer than supported {latest_supported}"
            ),
            Self::Encode(err) => write!(f, "failed to encode snapshot: {err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Malformed(err) => Some(err),
            Self::UnsupportedVersion { .. } => None,
            Self::Encode(err) => Some(err),
        }
    }
}

/// Complete serializable representation of store state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Absent in snapshots written before versioning; read as version 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_info: Option<PersonalInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experiences: Option<Vec<Experience>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<Education>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<Skill>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_blocks: Option<Vec<CustomBlock>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Section>>,
}

impl Snapshot {
    /// Parses JSON text and checks the format version.
    pub fn from_json_str(text: &str) -> SnapshotResult<Self> {
        let value: Value = serde_json::from_str(text).map_err(SnapshotError::Malformed)?;
        Self::from_json_value(value)
    }

    /// Converts an already-parsed JSON value and checks the format version.
    pub fn from_json_value(value: Value) -> SnapshotResult<Self> {
        // Derived struct decoding would also accept a sequence.
        if !value.is_object() {
            return Err(SnapshotError::Malformed(not_an_object(&value)));
        }
        let snapshot: Self = serde_json::from_value(value).map_err(SnapshotError::Malformed)?;
        snapshot.check_version()?;
        Ok(snapshot)
    }

    /// Encodes as two-space indented JSON.
    pub fn to_json_pretty(&self) -> SnapshotResult<String> {
        serde_json::to_string_pretty(self).map_err(SnapshotError::Encode)
    }

    /// Effective format version; unversioned snapshots count as version 1.
    pub fn format_version(&self) -> u32 {
        self.version.unwrap_or(1)
    }

    pub fn check_version(&self) -> SnapshotResult<()> {
        let version = self.format_version();
        if version > SNAPSHOT_FORMAT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                version,
                latest_supported: SNAPSHOT_FORMAT_VERSION,
            });
        }
        Ok(())
    }
}

fn not_an_object(value: &Value) -> serde_json::Error {
    let unexpected = match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(flag) => Unexpected::Bool(*flag),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(text) => Unexpected::Str(text),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    };
    serde::de::Error::invalid_type(unexpected, &"a snapshot object")
}
