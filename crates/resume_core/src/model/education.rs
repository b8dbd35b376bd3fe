//! Education entity.

use super::id::EntityId;
use super::{merge, merge_optional, Entity};
use serde::{Deserialize, Serialize};

/// One degree or course of study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: EntityId,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    /// Kept as text; no numeric interpretation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationDraft {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub gpa: Option<String>,
}

impl Entity for Education {
    type Draft = EducationDraft;
    type Patch = EducationPatch;

    fn from_draft(id: EntityId, draft: EducationDraft) -> Self {
        Self {
            id,
            institution: draft.institution,
            degree: draft.degree,
            field: draft.field,
            start_date: draft.start_date,
            end_date: draft.end_date,
            gpa: draft.gpa,
        }
    }

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn apply_patch(&mut self, patch: EducationPatch) {
        merge(&mut self.institution, patch.institution);
        merge(&mut self.degree, patch.degree);
        merge(&mut self.field, patch.field);
        merge(&mut self.start_date, patch.start_date);
        merge(&mut self.end_date, patch.end_date);
        merge_optional(&mut self.gpa, patch.gpa);
    }
}
