//! Document store: the single owner of résumé state.
//!
//! # Responsibility
//! - Own the personal-info singleton, the five entity collections and the
//!   section registry.
//! - Expose fine-grained mutations and the snapshot export/load contract.
//!
//! # Invariants
//! - Every operation is synchronous and applied in full before it returns;
//!   no caller can observe a partially applied mutation.
//! - Mutations on unknown ids are silent no-ops, never errors.
//! - The store performs no I/O and does not log; hosts do both.
//! - `load_snapshot` either fully replaces state or leaves it untouched.

mod collection;
pub mod ordering;
pub mod shared;
pub mod snapshot;

use crate::model::custom_block::{
    CustomBlock, CustomBlockDraft, CustomBlockPatch, DEFAULT_CUSTOM_TITLE,
};
use crate::model::education::{Education, EducationDraft, EducationPatch};
use crate::model::experience::{Experience, ExperienceDraft, ExperiencePatch};
use crate::model::id::{EntityId, SectionId};
use crate::model::personal::{PersonalInfo, PersonalInfoPatch};
use crate::model::project::{Project, ProjectDraft, ProjectPatch};
use crate::model::section::{default_sections, Section, SectionKind};
use crate::model::skill::{group_by_category, Skill, SkillDraft, SkillGroup, SkillPatch};
use collection::Collection;
use snapshot::{Snapshot, SnapshotResult, SNAPSHOT_FORMAT_VERSION};

/// Ids created by [`DocumentStore::add_custom_section`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomSectionIds {
    pub section_id: SectionId,
    pub block_id: EntityId,
}

/// In-memory résumé document.
///
/// Constructed explicitly and owned by the host; views borrow it to read and
/// call its methods to mutate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentStore {
    personal_info: PersonalInfo,
    experiences: Collection<Experience>,
    education: Collection<Education>,
    projects: Collection<Project>,
    skills: Collection<Skill>,
    custom_blocks: Collection<CustomBlock>,
    sections: Vec<Section>,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore {
    /// Creates a store with empty collections and the built-in sections.
    pub fn new() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            experiences: Collection::default(),
            education: Collection::default(),
            projects: Collection::default(),
            skills: Collection::default(),
            custom_blocks: Collection::default(),
            sections: default_sections(),
        }
    }

    /// Creates a store from a snapshot, starting from fresh defaults.
    pub fn from_snapshot(snapshot: Snapshot) -> SnapshotResult<Self> {
        let mut store = Self::new();
        store.load_snapshot(snapshot)?;
        Ok(store)
    }

    pub fn personal_info(&self) -> &PersonalInfo {
        &self.personal_info
    }

    pub fn update_personal_info(&mut self, patch: PersonalInfoPatch) {
        self.personal_info.apply_patch(patch);
    }

    pub fn experiences(&self) -> &[Experience] {
        self.experiences.as_slice()
    }

    pub fn experience(&self, id: &str) -> Option<&Experience> {
        self.experiences.get(id)
    }

    pub fn add_experience(&mut self, draft: ExperienceDraft) -> EntityId {
        self.experiences.insert(draft)
    }

    /// Returns whether an entry matched; unknown ids change nothing.
    pub fn update_experience(&mut self, id: &str, patch: ExperiencePatch) -> bool {
        self.experiences.update(id, patch)
    }

    pub fn remove_experience(&mut self, id: &str) -> bool {
        self.experiences.remove(id)
    }

    pub fn education(&self) -> &[Education] {
        self.education.as_slice()
    }

    pub fn education_entry(&self, id: &str) -> Option<&Education> {
        self.education.get(id)
    }

    pub fn add_education(&mut self, draft: EducationDraft) -> EntityId {
        self.education.insert(draft)
    }

    pub fn update_education(&mut self, id: &str, patch: EducationPatch) -> bool {
        self.education.update(id, patch)
    }

    pub fn remove_education(&mut self, id: &str) -> bool {
        self.education.remove(id)
    }

    pub fn projects(&self) -> &[Project] {
        self.projects.as_slice()
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.get(id)
    }

    pub fn add_project(&mut self, draft: ProjectDraft) -> EntityId {
        self.projects.insert(draft)
    }

    pub fn update_project(&mut self, id: &str, patch: ProjectPatch) -> bool {
        self.projects.update(id, patch)
    }

    pub fn remove_project(&mut self, id: &str) -> bool {
        self.projects.remove(id)
    }

    /// Appends one trimmed technology tag to a project.
    ///
    /// Returns `false` for unknown ids and blank input.
    pub fn add_technology(&mut self, project_id: &str, technology: &str) -> bool {
        self.projects
            .matches_mut(project_id)
            .fold(false, |added, project| project.push_technology(technology) || added)
    }

    /// Removes every matching technology tag. Returns the removed count.
    pub fn remove_technology(&mut self, project_id: &str, technology: &str) -> usize {
        self.projects
            .matches_mut(project_id)
            .map(|project| project.remove_technology(technology))
            .sum()
    }

    pub fn skills(&self) -> &[Skill] {
        self.skills.as_slice()
    }

    pub fn skill(&self, id: &str) -> Option<&Skill> {
        self.skills.get(id)
    }

    pub fn add_skill(&mut self, draft: SkillDraft) -> EntityId {
        self.skills.insert(draft)
    }

    pub fn update_skill(&mut self, id: &str, patch: SkillPatch) -> bool {
        self.skills.update(id, patch)
    }

    pub fn remove_skill(&mut self, id: &str) -> bool {
        self.skills.remove(id)
    }

    /// Skills grouped by exact category, in first-appearance order.
    pub fn skills_by_category(&self) -> Vec<SkillGroup<'_>> {
        group_by_category(self.skills.as_slice())
    }

    pub fn custom_blocks(&self) -> &[CustomBlock] {
        self.custom_blocks.as_slice()
    }

    pub fn custom_block(&self, id: &str) -> Option<&CustomBlock> {
        self.custom_blocks.get(id)
    }

    pub fn add_custom_block(&mut self, draft: CustomBlockDraft) -> EntityId {
        self.custom_blocks.insert(draft)
    }

    pub fn update_custom_block(&mut self, id: &str, patch: CustomBlockPatch) -> bool {
        self.custom_blocks.update(id, patch)
    }

    pub fn remove_custom_block(&mut self, id: &str) -> bool {
        self.custom_blocks.remove(id)
    }

    /// Registry in stored array order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// All sections in edit sequence (sorted by `order`, stable).
    pub fn ordered_sections(&self) -> Vec<&Section> {
        ordering::sorted_by_order(&self.sections)
    }

    /// Visible sections in render sequence.
    pub fn visible_sections(&self) -> Vec<&Section> {
        self.ordered_sections()
            .into_iter()
            .filter(|section| section.visible)
            .collect()
    }

    /// Replaces the registry wholesale with a caller-computed list.
    ///
    /// The list is stored as given; callers own permutation correctness and
    /// `order` numbering.
    pub fn reorder_sections(&mut self, sections: Vec<Section>) {
        self.sections = sections;
    }

    /// Flips `visible` on the section with this id. Returns whether one matched.
    pub fn toggle_visibility(&mut self, section_id: &str) -> bool {
        self.sections_mut(section_id).fold(false, |_, section| {
            section.visible = !section.visible;
            true
        })
    }

    /// Sets a section's display title. Returns whether a section matched.
    pub fn rename_section(&mut self, section_id: &str, title: impl Into<String>) -> bool {
        let title = title.into();
        self.sections_mut(section_id).fold(false, |_, section| {
            section.title = title.clone();
            true
        })
    }

    // Imported registries may repeat an id; edits reach every copy.
    fn sections_mut<'a>(
        &'a mut self,
        section_id: &'a str,
    ) -> impl Iterator<Item = &'a mut Section> {
        self.sections
            .iter_mut()
            .filter(move |section| section.id == section_id)
    }

    /// Appends a custom section together with an empty custom block.
    ///
    /// Both collections change inside this one call, so no reader sees the
    /// section without the block or the block without the section.
    pub fn add_custom_section(&mut self) -> CustomSectionIds {
        let section_id = loop {
            let candidate = EntityId::generate_custom_section();
            if self.section(candidate.as_str()).is_none() {
                break candidate;
            }
        };
        let order = self.sections.len() as i64;
        self.sections.push(Section::new(
            section_id.clone(),
            SectionKind::Custom,
            DEFAULT_CUSTOM_TITLE,
            order,
        ));
        let block_id = self.custom_blocks.insert(CustomBlockDraft::placeholder());

        CustomSectionIds {
            section_id,
            block_id,
        }
    }

    /// Produces a complete, deterministic snapshot of current state.
    pub fn export_snapshot(&self) -> Snapshot {
        Snapshot {
            version: Some(SNAPSHOT_FORMAT_VERSION),
            personal_info: Some(self.personal_info.clone()),
            experiences: Some(self.experiences.to_vec()),
            education: Some(self.education.to_vec()),
            projects: Some(self.projects.to_vec()),
            skills: Some(self.skills.to_vec()),
            custom_blocks: Some(self.custom_blocks.to_vec()),
            sections: Some(self.sections.clone()),
        }
    }

    /// Replaces state from a snapshot.
    ///
    /// Absent collections become empty, absent `sections` become the built-in
    /// registry, and absent `personalInfo` keeps the current value. On error
    /// the store is left unchanged.
    pub fn load_snapshot(&mut self, snapshot: Snapshot) -> SnapshotResult<()> {
        snapshot.check_version()?;

        if let Some(personal_info) = snapshot.personal_info {
            self.personal_info = personal_info;
        }
        self.experiences = Collection::from_vec(snapshot.experiences.unwrap_or_default());
        self.education = Collection::from_vec(snapshot.education.unwrap_or_default());
        self.projects = Collection::from_vec(snapshot.projects.unwrap_or_default());
        self.skills = Collection::from_vec(snapshot.skills.unwrap_or_default());
        self.custom_blocks = Collection::from_vec(snapshot.custom_blocks.unwrap_or_default());
        self.sections = snapshot.sections.unwrap_or_else(default_sections);
        Ok(())
    }

    /// Parses JSON text and loads it. Malformed text leaves state untouched.
    pub fn load_json(&mut self, text: &str) -> SnapshotResult<()> {
        let snapshot = Snapshot::from_json_str(text)?;
        self.load_snapshot(snapshot)
    }

    /// Exports current state as pretty JSON text.
    pub fn to_json_pretty(&self) -> SnapshotResult<String> {
        self.export_snapshot().to_json_pretty()
    }
}
