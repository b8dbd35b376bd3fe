//! Skill entity and category grouping.
//!
//! # Invariants
//! - `category` is a free-text grouping key compared case-sensitively with
//!   no normalization.
//! - Grouping preserves first-appearance order of categories and collection
//!   order of skills within a category.

use super::id::EntityId;
use super::{merge, Entity};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Self-assessed proficiency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

impl Display for SkillLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillDraft {
    pub name: String,
    pub level: SkillLevel,
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillPatch {
    pub name: Option<String>,
    pub level: Option<SkillLevel>,
    pub category: Option<String>,
}

impl Entity for Skill {
    type Draft = SkillDraft;
    type Patch = SkillPatch;

    fn from_draft(id: EntityId, draft: SkillDraft) -> Self {
        Self {
            id,
            name: draft.name,
            level: draft.level,
            category: draft.category,
        }
    }

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn apply_patch(&mut self, patch: SkillPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.level, patch.level);
        merge(&mut self.category, patch.category);
    }
}

/// Skills sharing one category string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup<'a> {
    pub category: &'a str,
    pub skills: Vec<&'a Skill>,
}

/// Groups skills by exact category string.
pub fn group_by_category(skills: &[Skill]) -> Vec<SkillGroup<'_>> {
    let mut groups: Vec<SkillGroup<'_>> = Vec::new();
    for skill in skills {
        match groups
            .iter_mut()
            .find(|group| group.category == skill.category.as_str())
        {
            Some(group) => group.skills.push(skill),
            None => groups.push(SkillGroup {
                category: skill.category.as_str(),
                skills: vec![skill],
            }),
        }
    }
    groups
}
