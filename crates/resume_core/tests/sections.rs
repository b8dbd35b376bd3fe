use resume_core::store::ordering::move_section;
use resume_core::{DocumentStore, SectionKind, Snapshot};
use serde_json::json;

fn ordered_ids(store: &DocumentStore) -> Vec<String> {
    store
        .ordered_sections()
        .iter()
        .map(|section| section.id.to_string())
        .collect()
}

#[test]
fn two_custom_sections_extend_the_registry() {
    let mut store = DocumentStore::new();
    let first = store.add_custom_section();
    let second = store.add_custom_section();

    assert_ne!(first.section_id, second.section_id);
    assert_ne!(first.block_id, second.block_id);
    assert!(first.section_id.as_str().starts_with("custom-"));

    let sections = store.sections();
    assert_eq!(sections.len(), 7);
    let orders: Vec<i64> = sections.iter().map(|section| section.order).collect();
    assert_eq!(orders, (0..7).collect::<Vec<_>>());
    assert_eq!(sections[5].kind, SectionKind::Custom);
    assert_eq!(sections[5].title, "Custom Section");
    assert!(sections[6].visible);

    assert_eq!(store.custom_blocks().len(), 2);
    assert!(store.custom_blocks().iter().all(|block| block.content.is_empty()));
}

#[test]
fn toggle_twice_restores_visibility_and_keeps_order() {
    let mut store = DocumentStore::new();
    let before = ordered_ids(&store);

    assert!(store.toggle_visibility("education"));
    assert!(!store.section("education").unwrap().visible);
    assert_eq!(store.visible_sections().len(), 4);
    assert_eq!(ordered_ids(&store), before);

    assert!(store.toggle_visibility("education"));
    assert!(store.section("education").unwrap().visible);
    assert!(!store.toggle_visibility("nope"));
}

#[test]
fn moving_a_section_renumbers_the_sequence() {
    let mut store = DocumentStore::new();
    store.toggle_visibility("skills");

    let moved = move_section(store.sections(), 4, 1);
    store.reorder_sections(moved);

    assert_eq!(
        ordered_ids(&store),
        vec!["personal", "projects", "experience", "education", "skills"]
    );
    let orders: Vec<i64> = store.ordered_sections().iter().map(|s| s.order).collect();
    assert_eq!(orders, vec![0, 1, 2, 3, 4]);
    assert!(!store.section("skills").unwrap().visible);
}

#[test]
fn identity_reorder_is_a_no_op() {
    let mut store = DocumentStore::new();
    store.add_custom_section();
    let before = store.clone();

    let same = store.sections().to_vec();
    store.reorder_sections(same);
    assert_eq!(store, before);
}

#[test]
fn reorder_stores_caller_list_verbatim() {
    let mut store = DocumentStore::new();
    let mut sections = store.sections().to_vec();
    sections[0].order = 9;
    sections[1].order = 9;
    store.reorder_sections(sections.clone());
    assert_eq!(store.sections(), sections.as_slice());

    // Ties keep stored array order.
    let ordered = ordered_ids(&store);
    assert_eq!(&ordered[3..], &["personal".to_string(), "experience".to_string()]);
}

#[test]
fn unknown_section_types_survive_and_render_nothing() {
    let snapshot = Snapshot::from_json_value(json!({
        "sections": [
            {"id": "personal", "type": "personal", "title": "Me", "visible": true, "order": 0},
            {"id": "awards", "type": "awards", "title": "Awards", "visible": true, "order": 1}
        ]
    }))
    .unwrap();
    let store = DocumentStore::from_snapshot(snapshot).unwrap();
    assert_eq!(
        store.section("awards").unwrap().kind,
        SectionKind::Unknown("awards".to_string())
    );

    let mut renderer = resume_core::TextRenderer::new();
    let rendered = resume_core::render_document(&store, &mut renderer);
    assert_eq!(rendered, 1);

    let exported = serde_json::to_value(store.export_snapshot()).unwrap();
    assert_eq!(exported["sections"][1]["type"], "awards");
}

#[test]
fn rename_changes_title_only() {
    let mut store = DocumentStore::new();
    assert!(store.rename_section("experience", "Career"));
    let section = store.section("experience").unwrap();
    assert_eq!(section.title, "Career");
    assert_eq!(section.kind, SectionKind::Experience);
    assert!(!store.rename_section("nope", "x"));
}

#[test]
fn repeated_section_ids_toggle_and_rename_together() {
    let mut store = DocumentStore::new();
    store
        .load_json(
            r#"{"sections": [
                {"id": "skills", "type": "skills", "title": "Skills", "visible": true, "order": 0},
                {"id": "skills", "type": "skills", "title": "Skills", "visible": true, "order": 1}
            ]}"#,
        )
        .unwrap();

    assert!(store.toggle_visibility("skills"));
    assert!(store.sections().iter().all(|section| !section.visible));

    assert!(store.rename_section("skills", "Abilities"));
    assert!(store.sections().iter().all(|section| section.title == "Abilities"));
    let orders: Vec<i64> = store.sections().iter().map(|section| section.order).collect();
    assert_eq!(orders, vec![0, 1]);
}
