//! Project entity.
//!
//! # Invariants
//! - `technologies` keeps insertion order and permits duplicates.

use super::id::EntityId;
use super::{merge, merge_optional, Entity};
use serde::{Deserialize, Serialize};

/// One showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub url: Option<String>,
    pub github: Option<String>,
}

/// Partial update for [`Project`]. `technologies` replaces the whole list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub url: Option<String>,
    pub github: Option<String>,
}

impl Project {
    /// Appends one technology tag. Blank input is ignored; input is trimmed.
    ///
    /// Returns whether a tag was appended.
    pub fn push_technology(&mut self, technology: &str) -> bool {
        let trimmed = technology.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.technologies.push(trimmed.to_string());
        true
    }

    /// Removes every tag equal to `technology`. Returns the removed count.
    pub fn remove_technology(&mut self, technology: &str) -> usize {
        let before = self.technologies.len();
        self.technologies.retain(|value| value != technology);
        before - self.technologies.len()
    }
}

impl Entity for Project {
    type Draft = ProjectDraft;
    type Patch = ProjectPatch;

    fn from_draft(id: EntityId, draft: ProjectDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            technologies: draft.technologies,
            url: draft.url,
            github: draft.github,
        }
    }

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn apply_patch(&mut self, patch: ProjectPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.description, patch.description);
        merge(&mut self.technologies, patch.technologies);
        merge_optional(&mut self.url, patch.url);
        merge_optional(&mut self.github, patch.github);
    }
}
