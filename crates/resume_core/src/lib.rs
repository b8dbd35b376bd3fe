//! Core document model for the résumé builder.
//! This crate owns every document invariant; hosts only move snapshots around.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod render;
pub mod repo;
pub mod service;
pub mod store;

pub use config::{AppConfig, ConfigError};
pub use db::{open_db, open_db_in_memory, DbError, DbTarget};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::custom_block::{CustomBlock, CustomBlockDraft, CustomBlockPatch};
pub use model::education::{Education, EducationDraft, EducationPatch};
pub use model::experience::{Experience, ExperienceDraft, ExperiencePatch};
pub use model::id::{EntityId, SectionId};
pub use model::personal::{PersonalInfo, PersonalInfoPatch};
pub use model::project::{Project, ProjectDraft, ProjectPatch};
pub use model::section::{default_sections, Section, SectionKind};
pub use model::skill::{Skill, SkillDraft, SkillGroup, SkillLevel, SkillPatch};
pub use render::{render_document, DocumentRenderer, TextRenderer};
pub use repo::snapshot_repo::{
    RepoError, RepoResult, SnapshotRepository, SqliteSnapshotRepository, StoredSnapshot,
};
pub use service::file_service::{default_export_path, export_to_file, import_from_file};
pub use service::persistence_service::{
    PersistenceError, PersistenceResult, PersistenceService,
};
pub use store::shared::SharedDocumentStore;
pub use store::snapshot::{Snapshot, SnapshotError, SnapshotResult};
pub use store::{CustomSectionIds, DocumentStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
