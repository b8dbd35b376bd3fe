//! Résumé document model.
//!
//! # Responsibility
//! - Define the canonical records owned by the document store.
//! - Define draft (creation) and patch (partial merge) shapes per entity.
//!
//! # Invariants
//! - Every collection member carries a store-generated `EntityId`.
//! - Field names on the wire match the in-memory names (camelCase JSON).
//! - Patches only ever set fields; there is no "unset" operation.

pub mod custom_block;
pub mod education;
pub mod experience;
pub mod id;
pub mod personal;
pub mod project;
pub mod section;
pub mod skill;

use id::EntityId;

/// Uniform CRUD contract shared by the five entity collections.
///
/// The store owns id assignment; implementors only describe how a record is
/// built from its draft and how a patch merges into it.
pub trait Entity: Clone {
    /// Creation input: every field except `id`.
    type Draft;
    /// Partial update input: every field optional.
    type Patch: Clone;

    /// Builds a record from a draft and the id chosen by the store.
    fn from_draft(id: EntityId, draft: Self::Draft) -> Self;

    /// Stable id assigned at creation.
    fn id(&self) -> &EntityId;

    /// Merges present patch fields; absent fields keep their current value.
    fn apply_patch(&mut self, patch: Self::Patch);
}

/// Overwrites `slot` when `value` is present.
pub(crate) fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Overwrites an optional `slot` when `value` is present.
pub(crate) fn merge_optional<T>(slot: &mut Option<T>, value: Option<T>) {
    if let Some(value) = value {
        *slot = Some(value);
    }
}
