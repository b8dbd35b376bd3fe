//! Section registry records.
//!
//! # Responsibility
//! - Describe which content groups are shown and in which sequence.
//!
//! # Invariants
//! - `order` is a sort key only: gaps and duplicates are allowed, ties keep
//!   array position.
//! - `visible` and `order` are independent of each other.
//! - Unknown `type` tags read from a snapshot are kept verbatim as
//!   `SectionKind::Unknown` and render nothing.

use super::id::SectionId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Content group rendered by one section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectionKind {
    Personal,
    Experience,
    Education,
    Projects,
    Skills,
    /// Renders every custom block.
    Custom,
    /// Tag not known to this build; preserved for re-export.
    Unknown(String),
}

impl SectionKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Personal => "personal",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Custom => "custom",
            Self::Unknown(tag) => tag.as_str(),
        }
    }

    /// Returns whether this is one of the five fixed content groups.
    pub fn is_builtin(&self) -> bool {
        matches!(
            self,
            Self::Personal | Self::Experience | Self::Education | Self::Projects | Self::Skills
        )
    }
}

impl From<String> for SectionKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "personal" => Self::Personal,
            "experience" => Self::Experience,
            "education" => Self::Education,
            "projects" => Self::Projects,
            "skills" => Self::Skills,
            "custom" => Self::Custom,
            _ => Self::Unknown(value),
        }
    }
}

impl From<SectionKind> for String {
    fn from(value: SectionKind) -> Self {
        match value {
            SectionKind::Unknown(tag) => tag,
            other => other.as_str().to_string(),
        }
    }
}

impl Default for SectionKind {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl Display for SectionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One orderable, independently visible group in the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    /// Serialized as `type` to match the snapshot schema.
    #[serde(rename = "type", default)]
    pub kind: SectionKind,
    /// Display label, independent of `kind`.
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub order: i64,
}

fn default_visible() -> bool {
    true
}

impl Section {
    pub fn new(id: SectionId, kind: SectionKind, title: impl Into<String>, order: i64) -> Self {
        Self {
            id,
            kind,
            title: title.into(),
            visible: true,
            order,
        }
    }
}

/// Built-in registry used for fresh stores and snapshots without `sections`.
pub fn default_sections() -> Vec<Section> {
    [
        ("personal", SectionKind::Personal, "Personal Information"),
        ("experience", SectionKind::Experience, "Work Experience"),
        ("education", SectionKind::Education, "Education"),
        ("skills", SectionKind::Skills, "Skills"),
        ("projects", SectionKind::Projects, "Projects"),
    ]
    .into_iter()
    .enumerate()
    .map(|(order, (id, kind, title))| Section::new(id.into(), kind, title, order as i64))
    .collect()
}
