//! Personal-info singleton.
//!
//! # Responsibility
//! - Hold the contact header of the document.
//!
//! # Invariants
//! - There is exactly one `PersonalInfo` per store; it has no identity and
//!   no add/remove lifecycle, only partial merges.

use super::{merge, merge_optional};
use serde::{Deserialize, Serialize};

/// Contact header of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// Partial update for [`PersonalInfo`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalInfoPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

impl PersonalInfo {
    /// Merges present patch fields into this record.
    pub fn apply_patch(&mut self, patch: PersonalInfoPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.email, patch.email);
        merge(&mut self.phone, patch.phone);
        merge(&mut self.location, patch.location);
        merge_optional(&mut self.website, patch.website);
        merge_optional(&mut self.linkedin, patch.linkedin);
        merge_optional(&mut self.github, patch.github);
    }
}
