//! Free-form custom block entity.
//!
//! Blocks are not keyed to a specific custom section: every section of type
//! `custom` renders every block.

use super::id::EntityId;
use super::{merge, Entity};
use serde::{Deserialize, Serialize};

/// Default title shared by a new custom section and its paired block.
pub const DEFAULT_CUSTOM_TITLE: &str = "Custom Section";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomBlock {
    pub id: EntityId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomBlockDraft {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomBlockPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl CustomBlockDraft {
    /// Empty block paired with a freshly added custom section.
    pub fn placeholder() -> Self {
        Self {
            title: DEFAULT_CUSTOM_TITLE.to_string(),
            content: String::new(),
        }
    }
}

impl Entity for CustomBlock {
    type Draft = CustomBlockDraft;
    type Patch = CustomBlockPatch;

    fn from_draft(id: EntityId, draft: CustomBlockDraft) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
        }
    }

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn apply_patch(&mut self, patch: CustomBlockPatch) {
        merge(&mut self.title, patch.title);
        merge(&mut self.content, patch.content);
    }
}
