//! Integration tests for the full preference lifecycle.
//!
//! These tests drive catalog declaration, typed reads and writes,
//! saving, and re-opening together through the public API, the way an
//! embedding application uses the crate across two launches.

use std::env;
use std::fs;
use std::path::PathBuf;

use prefstore_core::{
    decode_document, encode_document, PrefType, PreferenceCatalog, PreferenceStore,
};
use uuid::Uuid;

/// Unique path under the system temp dir so parallel tests never
/// collide.
fn temp_prefs_path() -> PathBuf {
    env::temp_dir().join(format!("prefstore_lifecycle_test_{}.prefs", Uuid::new_v4()))
}

/// The catalog a small CAD-style application would declare at startup.
fn make_catalog() -> PreferenceCatalog {
    let mut catalog = PreferenceCatalog::new();
    catalog
        .register("libraryPath", "Parts library folder", PrefType::FolderPath)
        .expect("registration should succeed");
    catalog
        .register("projectFile", "Last opened project", PrefType::FilePath)
        .expect("registration should succeed");
    catalog
        .register("authorName", "Author name for new models", PrefType::Text)
        .expect("registration should succeed");
    catalog
        .register("gridEnabled", "Show the construction grid", PrefType::Boolean)
        .expect("registration should succeed");
    catalog
        .register("gridSize", "Grid spacing (px)", PrefType::Integer)
        .expect("registration should succeed");
    catalog
        .register("zoomFactor", "Initial zoom factor", PrefType::Float)
        .expect("registration should succeed");
    catalog
        .register_private("windowMaximized", "Main window maximized", PrefType::Boolean)
        .expect("registration should succeed");
    catalog
}

#[test]
fn test_first_launch_then_second_launch() {
    let path = temp_prefs_path();
    let catalog = make_catalog();

    // First launch: no file yet, store defaults, do some work, save.
    {
        let mut store = PreferenceStore::open(&path);
        assert!(!store.is_configured(), "first launch must be unconfigured");

        store.set_default_int("gridSize", 20);
        store.set_default_bool("gridEnabled", true);
        assert_eq!(store.get_int("gridSize"), 20);
        assert!(store.get_bool("gridEnabled"));

        store.put_string("libraryPath", "/home/user/parts");
        store.put_string("projectFile", "/home/user/models/castle.mpd");
        store.put_string("authorName", "A. Builder");
        store.put_bool("gridEnabled", false);
        store.put_int("gridSize", 32);
        store.put_float("zoomFactor", 1.25);
        store.put_bool("windowMaximized", true);

        store.save(&path).expect("save should succeed");
    }

    // Second launch: everything comes back, and the store knows it was
    // configured before.
    {
        let store = PreferenceStore::open(&path);
        assert!(store.is_configured());

        assert_eq!(store.get_string("libraryPath"), "/home/user/parts");
        assert_eq!(store.get_string("projectFile"), "/home/user/models/castle.mpd");
        assert_eq!(store.get_string("authorName"), "A. Builder");
        assert!(!store.get_bool("gridEnabled"));
        assert_eq!(store.get_int("gridSize"), 32);
        assert_eq!(store.get_float("zoomFactor"), 1.25);
        assert!(store.get_bool("windowMaximized"));
    }

    // The catalog still describes every persisted key.
    let store = PreferenceStore::open(&path);
    for (key, _) in store.values().iter() {
        assert!(catalog.contains(key), "persisted key {key} should be declared");
    }

    fs::remove_file(&path).ok();
}

#[test]
fn test_corrupted_file_falls_back_to_first_run_behaviour() {
    let path = temp_prefs_path();
    fs::write(&path, "gridSize = [this is not").expect("setup write should succeed");

    let mut store = PreferenceStore::open(&path);

    // The broken file is discarded: empty store, unconfigured, and the
    // defaults-then-zero chain still works.
    assert!(!store.is_configured());
    store.set_default_int("gridSize", 20);
    assert_eq!(store.get_int("gridSize"), 20);
    assert_eq!(store.get_string("libraryPath"), "");

    // Saving afterwards replaces the corrupted file with a valid one.
    store.put_int("gridSize", 24);
    store.save(&path).expect("save should succeed");

    let reopened = PreferenceStore::open(&path);
    assert!(reopened.is_configured());
    assert_eq!(reopened.get_int("gridSize"), 24);

    fs::remove_file(&path).ok();
}

#[test]
fn test_resaving_unchanged_store_is_byte_identical() {
    let path = temp_prefs_path();

    let mut store = PreferenceStore::open(&path);
    store.put_string("authorName", "A. Builder");
    store.put_int("gridSize", 32);
    store.put_float("zoomFactor", 1.25);
    store.save(&path).expect("first save should succeed");
    let first = fs::read(&path).expect("file should exist");

    let reopened = PreferenceStore::open(&path);
    reopened.save(&path).expect("second save should succeed");
    let second = fs::read(&path).expect("file should exist");

    assert_eq!(first, second, "load-then-save must not churn the file");

    fs::remove_file(&path).ok();
}

#[test]
fn test_saved_file_is_a_flat_toml_table() {
    let path = temp_prefs_path();

    let mut store = PreferenceStore::open(&path);
    store.put_string("authorName", "A. Builder");
    store.put_int("gridSize", 32);
    store.save(&path).expect("save should succeed");

    // The file on disk is plain TOML that the document codec (and any
    // curious user with a text editor) can read directly.
    let text = fs::read_to_string(&path).expect("file should exist");
    let doc = decode_document(&text).expect("saved file should decode");
    assert_eq!(doc.len(), 2);
    assert_eq!(encode_document(&doc).expect("encode should succeed"), text);

    fs::remove_file(&path).ok();
}

#[test]
fn test_default_path_round_trip_via_identity() {
    // open_for_app and default_path agree on the <identity>.prefs
    // convention; use a unique identity so the relative file never
    // collides with another test run.
    let identity = format!("prefstore_lifecycle_{}", Uuid::new_v4());
    let path = PreferenceStore::default_path(&identity);
    assert_eq!(path, PathBuf::from(format!("{identity}.prefs")));

    let mut store = PreferenceStore::open_for_app(&identity);
    assert!(!store.is_configured());

    store.put_bool("windowMaximized", true);
    store.save(&path).expect("save should succeed");

    let reopened = PreferenceStore::open_for_app(&identity);
    assert!(reopened.is_configured());
    assert!(reopened.get_bool("windowMaximized"));

    fs::remove_file(&path).ok();
}

#[test]
fn test_editor_listing_skips_private_preferences() {
    let catalog = make_catalog();

    // What a settings dialog would enumerate.
    let visible: Vec<&str> = catalog
        .descriptors()
        .filter(|descriptor| !descriptor.private)
        .map(|descriptor| descriptor.name.as_str())
        .collect();

    assert_eq!(
        visible,
        [
            "libraryPath",
            "projectFile",
            "authorName",
            "gridEnabled",
            "gridSize",
            "zoomFactor"
        ]
    );
    assert!(!visible.contains(&"windowMaximized"));
}
