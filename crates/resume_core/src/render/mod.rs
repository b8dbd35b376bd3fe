//! Store → renderer boundary.
//!
//! # Responsibility
//! - Select visible sections in `order` sequence.
//! - Dispatch each section to the renderer hook for its kind.
//!
//! # Invariants
//! - Dispatch is an exhaustive `match` over `SectionKind`; unknown kinds
//!   render nothing.
//! - Renderers receive read-only borrows of store state.

pub mod text;

use crate::model::custom_block::CustomBlock;
use crate::model::education::Education;
use crate::model::experience::Experience;
use crate::model::personal::PersonalInfo;
use crate::model::project::Project;
use crate::model::section::{Section, SectionKind};
use crate::model::skill::SkillGroup;
use crate::store::DocumentStore;

pub use text::TextRenderer;

/// Per-kind render hooks. Sections of kind `custom` receive every block.
pub trait DocumentRenderer {
    fn personal(&mut self, section: &Section, info: &PersonalInfo);
    fn experience(&mut self, section: &Section, entries: &[Experience]);
    fn education(&mut self, section: &Section, entries: &[Education]);
    fn projects(&mut self, section: &Section, entries: &[Project]);
    fn skills(&mut self, section: &Section, groups: &[SkillGroup<'_>]);
    fn custom(&mut self, section: &Section, blocks: &[CustomBlock]);
}

/// Feeds every visible section of `store`, in order, to `renderer`.
///
/// Returns the number of sections dispatched to a hook.
pub fn render_document<R: DocumentRenderer>(store: &DocumentStore, renderer: &mut R) -> usize {
    let mut rendered = 0;
    for section in store.visible_sections() {
        match &section.kind {
            SectionKind::Personal => renderer.personal(section, store.personal_info()),
            SectionKind::Experience => renderer.experience(section, store.experiences()),
            SectionKind::Education => renderer.education(section, store.education()),
            SectionKind::Projects => renderer.projects(section, store.projects()),
            SectionKind::Skills => renderer.skills(section, &store.skills_by_category()),
            SectionKind::Custom => renderer.custom(section, store.custom_blocks()),
            SectionKind::Unknown(_) => continue,
        }
        rendered += 1;
    }
    rendered
}
