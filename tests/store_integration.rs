//! Integration tests for the template store and its persistence

use std::collections::HashSet;

use pretty_assertions::assert_eq;

use prismify_templates::persistence::{JsonFileStorage, PersistedTemplates, STORAGE_KEY};
use prismify_templates::search::{filter_templates, CategoryFilter, SearchScope, TemplateQuery};
use prismify_templates::{
    open_store, Category, EditorState, GalleryConfig, MemoryStorage, TemplateStore,
};

#[test]
fn test_ids_unique_across_builtin_and_custom() {
    let mut store = TemplateStore::new();
    let mut editor = EditorState::new();
    for name in ["One", "Two", "Three", "Four", "Five"] {
        store
            .save_as_template(name, "", Category::Personal, &editor.context())
            .expect("Should save");
    }

    let ids: HashSet<&str> = store.all_templates().map(|t| t.id.as_str()).collect();
    assert_eq!(ids.len(), store.templates().len() + store.custom_templates().len());
}

#[test]
fn test_add_custom_appends_with_stamp() {
    let mut store = TemplateStore::new();
    let existing = store
        .add_custom_template(store.templates()[3].clone())
        .unwrap()
        .id
        .clone();

    let added = store
        .add_custom_template(store.templates()[0].clone())
        .unwrap()
        .clone();

    assert!(added.is_custom);
    assert!(added.created_at.is_some());
    let order: Vec<&str> = store.custom_templates().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(order, vec![existing.as_str(), added.id.as_str()]);
}

#[test]
fn test_duplicates_by_value_are_kept() {
    let mut store = TemplateStore::new();
    let template = store.templates()[0].clone();
    store.add_custom_template(template.clone()).unwrap();
    store.add_custom_template(template).unwrap();
    assert_eq!(store.custom_templates().len(), 2);
    assert_ne!(store.custom_templates()[0].id, store.custom_templates()[1].id);
}

#[test]
fn test_remove_unknown_id_leaves_collection_unchanged() {
    let mut store = TemplateStore::new();
    store.add_custom_template(store.templates()[0].clone()).unwrap();
    let before = store.custom_templates().to_vec();

    let removed = store.remove_custom_template("custom-0-missing").unwrap();

    assert!(!removed);
    assert_eq!(store.custom_templates(), &before[..]);
}

#[test]
fn test_remove_by_id() {
    let mut store = TemplateStore::new();
    let keep = store.add_custom_template(store.templates()[0].clone()).unwrap().id.clone();
    let drop = store.add_custom_template(store.templates()[1].clone()).unwrap().id.clone();

    assert!(store.remove_custom_template(&drop).unwrap());
    assert!(!store.remove_custom_template(&drop).unwrap());
    assert_eq!(store.custom_templates().len(), 1);
    assert_eq!(store.custom_templates()[0].id, keep);
}

#[test]
fn test_apply_then_save_workflow() {
    let mut store = TemplateStore::new();
    let mut editor = EditorState::new();

    let template = store.find("linkedin-post").unwrap().clone();
    store.apply_template(&template, &mut editor.context());
    assert_eq!(store.selected_template(), Some(&template));
    assert_eq!(editor.canvas.width, 1200);
    assert_eq!(editor.canvas.height, 628);
    assert_eq!(editor.image.texts.len(), 1);

    let saved = store
        .save_as_template("My LinkedIn", "Tuned", Category::Business, &editor.context())
        .unwrap()
        .clone();
    assert_eq!(saved.category, Category::Business);
    assert_eq!(saved.config.canvas.width, 1200);
    assert_eq!(saved.config.text.content, "Professional Content");

    let custom_tab = TemplateQuery::new().with_category(CategoryFilter::Custom);
    let mine = filter_templates(store.all_templates(), &custom_tab);
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, saved.id);

    // Selection is unchanged by saving.
    assert_eq!(store.selected_template().unwrap().id, "linkedin-post");
}

#[test]
fn test_persisted_record_excludes_builtins_and_selection() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonFileStorage::new(dir.path(), STORAGE_KEY);
    let path = storage.path().to_path_buf();
    let mut store = TemplateStore::with_storage(Box::new(storage)).unwrap();
    let mut editor = EditorState::new();

    store.apply_template_by_id("portfolio", &mut editor.context()).unwrap();
    store
        .save_as_template("Persisted", "", Category::Personal, &editor.context())
        .unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let record = PersistedTemplates::from_json(&raw).unwrap();
    assert_eq!(record.state.custom_templates.len(), 1);
    assert_eq!(record.state.custom_templates[0].name, "Persisted");
    assert!(!raw.contains("selectedTemplate"));
    assert!(!raw.contains("\"portfolio\""));
}

#[test]
fn test_custom_templates_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = GalleryConfig::new().with_storage_directory(dir.path());
    let mut editor = EditorState::new();

    let saved_ids: Vec<String> = {
        let mut store = open_store(&config).unwrap();
        ["A", "B"]
            .iter()
            .map(|name| {
                store
                    .save_as_template(name, "", Category::Marketing, &editor.context())
                    .unwrap()
                    .id
                    .clone()
            })
            .collect()
    };

    let mut store = open_store(&config).unwrap();
    let reloaded: Vec<String> = store.custom_templates().iter().map(|t| t.id.clone()).collect();
    assert_eq!(reloaded, saved_ids);

    store.remove_custom_template(&saved_ids[0]).unwrap();
    let store = open_store(&config).unwrap();
    assert_eq!(store.custom_templates().len(), 1);
    assert_eq!(store.custom_templates()[0].id, saved_ids[1]);
}

#[test]
fn test_memory_storage_keeps_serialized_record() {
    let mut store = TemplateStore::with_storage(Box::new(MemoryStorage::new())).unwrap();
    store.add_custom_template(store.templates()[0].clone()).unwrap();

    let record = store.storage().unwrap().load().unwrap().unwrap();
    assert_eq!(record.version, 0);
    assert_eq!(record.state.custom_templates, store.custom_templates());
}

#[test]
fn test_panel_listing_respects_configured_limit() {
    let config = GalleryConfig::from_str("[gallery]\npanel_limit = 5\n").unwrap();
    let mut store = TemplateStore::new();
    let mut editor = EditorState::new();
    store
        .save_as_template("Slide Deck Copy", "", Category::Presentation, &editor.context())
        .unwrap();

    let everything = TemplateQuery::new().with_scope(SearchScope::Name);
    let matches = filter_templates(store.all_templates(), &everything);
    let panel = config.gallery.panel(&matches);
    assert_eq!(panel.shown.len(), 5);
    assert_eq!(panel.overflow_label().as_deref(), Some("+7"));

    let slides = TemplateQuery::new()
        .with_text("slide")
        .with_scope(SearchScope::Name);
    let matches = filter_templates(store.all_templates(), &slides);
    let panel = config.gallery.panel(&matches);
    let names: Vec<&str> = panel.shown.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Presentation Slide", "Slide Deck Copy"]);
    assert_eq!(panel.overflow_label(), None);
}
