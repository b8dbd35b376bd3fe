//! Work-experience entity.
//!
//! # Invariants
//! - `end_date` is stored even when `current` is true; consumers ignore it
//!   in that case. Toggling `current` never clears `end_date`.

use super::id::EntityId;
use super::{merge, Entity};
use serde::{Deserialize, Serialize};

/// One position held at one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: EntityId,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    /// Free-form, conventionally `YYYY-MM`.
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: String,
}

/// Creation input for [`Experience`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceDraft {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

/// Partial update for [`Experience`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
}

impl Experience {
    /// End label as shown to readers: `Present` for current positions.
    pub fn end_label(&self) -> &str {
        if self.current {
            "Present"
        } else {
            self.end_date.as_str()
        }
    }
}

impl Entity for Experience {
    type Draft = ExperienceDraft;
    type Patch = ExperiencePatch;

    fn from_draft(id: EntityId, draft: ExperienceDraft) -> Self {
        Self {
            id,
            company: draft.company,
            position: draft.position,
            start_date: draft.start_date,
            end_date: draft.end_date,
            current: draft.current,
            description: draft.description,
        }
    }

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn apply_patch(&mut self, patch: ExperiencePatch) {
        merge(&mut self.company, patch.company);
        merge(&mut self.position, patch.position);
        merge(&mut self.start_date, patch.start_date);
        merge(&mut self.end_date, patch.end_date);
        merge(&mut self.current, patch.current);
        merge(&mut self.description, patch.description);
    }
}
