use proptest::prelude::*;
use resume_core::{
    default_sections, CustomBlockDraft, DocumentStore, EducationDraft, ExperienceDraft,
    PersonalInfoPatch, ProjectDraft, SkillDraft, SkillLevel, Snapshot, SnapshotError,
};
use serde_json::json;
use std::collections::HashSet;

#[test]
fn empty_object_resets_collections_and_keeps_personal_info() {
    let mut store = DocumentStore::new();
    store.update_personal_info(PersonalInfoPatch {
        name: Some("Ada".to_string()),
        ..PersonalInfoPatch::default()
    });
    store.add_experience(ExperienceDraft::default());
    store.add_custom_section();
    store.toggle_visibility("personal");

    store.load_json("{}").unwrap();

    assert_eq!(store.personal_info().name, "Ada");
    assert!(store.experiences().is_empty());
    assert!(store.custom_blocks().is_empty());
    assert_eq!(store.sections(), default_sections().as_slice());
}

#[test]
fn null_fields_count_as_absent() {
    let mut store = DocumentStore::new();
    store.add_skill(SkillDraft::default());
    store
        .load_json(r#"{"skills": null, "sections": null}"#)
        .unwrap();
    assert!(store.skills().is_empty());
    assert_eq!(store.sections().len(), 5);
}

#[test]
fn present_empty_sections_stay_empty() {
    let store = DocumentStore::from_snapshot(
        Snapshot::from_json_value(json!({ "sections": [] })).unwrap(),
    )
    .unwrap();
    assert!(store.sections().is_empty());
}

#[test]
fn malformed_input_leaves_store_unchanged() {
    let mut store = DocumentStore::new();
    store.add_project(ProjectDraft {
        name: "Keep".to_string(),
        ..ProjectDraft::default()
    });
    let before = store.clone();

    let err = store.load_json("{\"projects\": [").unwrap_err();
    assert!(matches!(err, SnapshotError::Malformed(_)));

    let err = store
        .load_json(r#"{"skills": [{"id": "s1", "name": "Rust", "level": "Guru"}]}"#)
        .unwrap_err();
    assert!(matches!(err, SnapshotError::Malformed(_)));

    let err = store
        .load_json(r#"{"experiences": [{"company": "No id"}]}"#)
        .unwrap_err();
    assert!(matches!(err, SnapshotError::Malformed(_)));

    let err = store.load_json("[]").unwrap_err();
    assert!(matches!(err, SnapshotError::Malformed(_)));

    assert_eq!(store, before);
}

#[test]
fn newer_format_version_is_rejected() {
    let mut store = DocumentStore::new();
    let err = store.load_json(r#"{"version": 2}"#).unwrap_err();
    match err {
        SnapshotError::UnsupportedVersion {
            version,
            latest_supported,
        } => {
            assert_eq!(version, 2);
            assert_eq!(latest_supported, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn export_contains_every_key_with_camel_case_names() {
    let mut store = DocumentStore::new();
    store.add_experience(ExperienceDraft {
        start_date: "2021-03".to_string(),
        ..ExperienceDraft::default()
    });

    let value = serde_json::to_value(store.export_snapshot()).unwrap();
    for key in [
        "version",
        "personalInfo",
        "experiences",
        "education",
        "projects",
        "skills",
        "customBlocks",
        "sections",
    ] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(value["experiences"][0]["startDate"], "2021-03");
    assert_eq!(value["sections"][0]["type"], "personal");

    let text = store.to_json_pretty().unwrap();
    assert!(text.contains("\n  \"personalInfo\""));
}

#[test]
fn imported_ids_are_kept_verbatim() {
    let mut store = DocumentStore::new();
    store
        .load_json(
            r#"{"education": [{"id": "1700000000000", "institution": "MIT", "gpa": "4.0"}]}"#,
        )
        .unwrap();
    let entry = store.education_entry("1700000000000").unwrap();
    assert_eq!(entry.gpa.as_deref(), Some("4.0"));

    let added = store.add_education(EducationDraft::default());
    assert_ne!(added.as_str(), "1700000000000");
}

#[test]
fn repeated_legacy_ids_are_edited_together() {
    let mut store = DocumentStore::new();
    store
        .load_json(
            r#"{"experiences": [
                {"id": "1700000000000", "company": "A", "endDate": "2021-01"},
                {"id": "1700000000000", "company": "B", "endDate": "2022-01"}
            ],
            "projects": [
                {"id": "p", "name": "One"},
                {"id": "p", "name": "Two", "technologies": ["Go"]}
            ]}"#,
        )
        .unwrap();

    assert!(store.update_experience(
        "1700000000000",
        resume_core::ExperiencePatch {
            current: Some(true),
            ..resume_core::ExperiencePatch::default()
        },
    ));
    let current: Vec<bool> = store.experiences().iter().map(|e| e.current).collect();
    assert_eq!(current, vec![true, true]);
    assert_eq!(store.experiences()[1].company, "B");

    assert!(store.add_technology("p", "Rust"));
    assert_eq!(store.remove_technology("p", "Go"), 1);
    assert!(store
        .projects()
        .iter()
        .all(|project| project.technologies.last().map(String::as_str) == Some("Rust")));

    assert!(store.remove_experience("1700000000000"));
    assert!(store.experiences().is_empty());
}

fn level() -> impl Strategy<Value = SkillLevel> {
    prop_oneof![
        Just(SkillLevel::Beginner),
        Just(SkillLevel::Intermediate),
        Just(SkillLevel::Advanced),
        Just(SkillLevel::Expert),
    ]
}

#[derive(Debug, Clone)]
enum Edit {
    Experience(String, bool),
    Education(String, Option<String>),
    Project(String, Vec<String>),
    Skill(String, SkillLevel, String),
    Block(String, String),
    CustomSection,
    Toggle(usize),
}

fn edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        ("[a-zA-Z ]{0,12}", any::<bool>()).prop_map(|(c, cur)| Edit::Experience(c, cur)),
        ("[a-zA-Z ]{0,12}", proptest::option::of("[0-9.]{1,4}"))
            .prop_map(|(i, gpa)| Edit::Education(i, gpa)),
        ("\\PC{0,12}", proptest::collection::vec("[a-z]{1,6}", 0..4))
            .prop_map(|(n, tech)| Edit::Project(n, tech)),
        ("[a-z]{1,8}", level(), "[A-Z][a-z]{0,6}")
            .prop_map(|(n, l, c)| Edit::Skill(n, l, c)),
        ("\\PC{0,10}", "\\PC{0,20}").prop_map(|(t, c)| Edit::Block(t, c)),
        Just(Edit::CustomSection),
        (0usize..8).prop_map(Edit::Toggle),
    ]
}

fn build(edits: &[Edit]) -> DocumentStore {
    let mut store = DocumentStore::new();
    for edit in edits {
        match edit.clone() {
            Edit::Experience(company, current) => {
                store.add_experience(ExperienceDraft {
                    company,
                    current,
                    ..ExperienceDraft::default()
                });
            }
            Edit::Education(institution, gpa) => {
                store.add_education(EducationDraft {
                    institution,
                    gpa,
                    ..EducationDraft::default()
                });
            }
            Edit::Project(name, technologies) => {
                store.add_project(ProjectDraft {
                    name,
                    technologies,
                    ..ProjectDraft::default()
                });
            }
            Edit::Skill(name, level, category) => {
                store.add_skill(SkillDraft {
                    name,
                    level,
                    category,
                });
            }
            Edit::Block(title, content) => {
                store.add_custom_block(CustomBlockDraft { title, content });
            }
            Edit::CustomSection => {
                store.add_custom_section();
            }
            Edit::Toggle(position) => {
                let id = store
                    .sections()
                    .get(position % store.sections().len())
                    .map(|section| section.id.to_string());
                if let Some(id) = id {
                    store.toggle_visibility(&id);
                }
            }
        }
    }
    store
}

proptest! {
    #[test]
    fn export_then_load_reproduces_the_document(edits in proptest::collection::vec(edit(), 0..24)) {
        let original = build(&edits);
        let text = original.to_json_pretty().unwrap();

        let mut restored = DocumentStore::new();
        restored.load_json(&text).unwrap();
        prop_assert_eq!(&restored, &original);
        prop_assert_eq!(restored.export_snapshot(), original.export_snapshot());
    }

    #[test]
    fn generated_ids_are_unique_per_collection(edits in proptest::collection::vec(edit(), 0..40)) {
        let store = build(&edits);

        let blocks: HashSet<&str> = store.custom_blocks().iter().map(|b| b.id.as_str()).collect();
        prop_assert_eq!(blocks.len(), store.custom_blocks().len());
        let sections: HashSet<&str> = store.sections().iter().map(|s| s.id.as_str()).collect();
        prop_assert_eq!(sections.len(), store.sections().len());
        let skills: HashSet<&str> = store.skills().iter().map(|s| s.id.as_str()).collect();
        prop_assert_eq!(skills.len(), store.skills().len());
    }
}
