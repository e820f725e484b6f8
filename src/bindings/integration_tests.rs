// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::bindings::consts::PAIRS_SETTINGS_KEY;
use crate::bindings::{
    Binding, BindingSet, BindingStore, FileSettings, InMemorySettings, SettingsBindingStore,
    SettingsStore,
};
use crate::errors::StoreError;

fn sample_bindings() -> BindingSet {
    BindingSet::new(vec![
        Binding::new("Region", "REGION"),
        Binding::new("District", "DISTRICT"),
        Binding::new("Team", "TEAM"),
    ])
    .unwrap()
}

#[tokio::test]
async fn missing_settings_key_loads_empty_set() {
    let store = SettingsBindingStore::new(Arc::new(InMemorySettings::new()));

    let loaded = store.load().await.unwrap();
    assert!(loaded.is_empty());
}

#[tokio::test]
async fn replace_then_load_preserves_order() {
    let store = SettingsBindingStore::new(Arc::new(InMemorySettings::new()));

    store.replace(sample_bindings()).await.unwrap();
    let loaded = store.load().await.unwrap();

    let filters: Vec<_> = loaded.iter().map(|b| b.filter.as_str()).collect();
    assert_eq!(filters, vec!["Region", "District", "Team"]);
    assert_eq!(loaded.lookup("Team").unwrap().0, 2);
}

#[tokio::test]
async fn wire_format_is_filter_param_records() {
    let settings = Arc::new(InMemorySettings::new());
    let store = SettingsBindingStore::new(settings.clone());

    store
        .replace(BindingSet::new(vec![Binding::new("Region", "REGION")]).unwrap())
        .await
        .unwrap();

    let blob = settings.get(PAIRS_SETTINGS_KEY).await.unwrap().unwrap();
    assert_eq!(blob, r#"[{"filter":"Region","param":"REGION"}]"#);
}

#[tokio::test]
async fn corrupt_blob_is_reported_not_swallowed() {
    let settings = Arc::new(InMemorySettings::new());
    settings
        .set(PAIRS_SETTINGS_KEY, "not json".to_string())
        .await
        .unwrap();

    let store = SettingsBindingStore::new(settings);
    assert!(matches!(store.load().await, Err(StoreError::Corrupt(_))));
}

#[tokio::test]
async fn stored_duplicate_is_rejected_on_load() {
    // A blob written by an older or foreign authoring surface can violate
    // uniqueness; loading must refuse it rather than cascade over it.
    let settings = Arc::new(InMemorySettings::new());
    settings
        .set(
            PAIRS_SETTINGS_KEY,
            r#"[{"filter":"Region","param":"A"},{"filter":"Region","param":"B"}]"#.to_string(),
        )
        .await
        .unwrap();

    let store = SettingsBindingStore::new(settings);
    assert!(matches!(store.load().await, Err(StoreError::Invalid(_))));
}

#[tokio::test]
async fn file_settings_survive_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    {
        let store = SettingsBindingStore::new(Arc::new(FileSettings::new(&path)));
        store.replace(sample_bindings()).await.unwrap();
    }

    // Fresh store over the same file, as after a restart.
    let store = SettingsBindingStore::new(Arc::new(FileSettings::new(&path)));
    let loaded = store.load().await.unwrap();
    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded.lookup("District").unwrap().1.param, "DISTRICT");
}

#[tokio::test]
async fn file_settings_missing_file_reads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsBindingStore::new(Arc::new(FileSettings::new(
        dir.path().join("never-written.json"),
    )));

    assert!(store.load().await.unwrap().is_empty());
}
