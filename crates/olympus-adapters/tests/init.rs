//! The `init` sequence with the built-in templates.

use std::fs;
use std::path::{Path, PathBuf};

use olympus_adapters::{BuiltinTemplates, LocalFilesystem, MemoryFilesystem, TomlCodec};
use olympus_core::prelude::*;
use tempfile::TempDir;

fn basic() -> TemplateId {
    "basic".parse().unwrap()
}

#[test]
fn init_creates_cache_and_applies_template() {
    let home = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    let project = workspace.path().join("my-app");
    fs::create_dir(&project).unwrap();

    let store = ConfigStore::new(
        ConfigPaths::from_home(home.path()),
        Box::new(LocalFilesystem::new()),
        Box::new(TomlCodec::new()),
    );
    let service = InitService::new(
        &store,
        Box::new(LocalFilesystem::new()),
        Box::new(BuiltinTemplates::new(Box::new(LocalFilesystem::new()))),
    );

    let outcome = service.init(&project, &basic()).unwrap();

    let (project_cache, init_file, applied) = match outcome {
        InitOutcome::Completed {
            project_cache,
            init_file,
            applied,
        } => (project_cache, init_file, applied),
        other => panic!("expected completion, got {other:?}"),
    };
    assert_eq!(project_cache, project.join("olympus"));
    assert_eq!(init_file, project.join("olympus").join("init.toml"));
    assert!(init_file.is_file());
    assert_eq!(applied.written.len(), 3);
    assert!(
        fs::read_to_string(project.join("README.md"))
            .unwrap()
            .starts_with("# my-app")
    );

    // The global config is never created by init.
    assert!(!store.file_exists());
    assert!(!home.path().join(".olympus").exists());
}

#[test]
fn init_twice_skips_existing_files() {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("/work/demo")).unwrap();
    let store = ConfigStore::new(
        ConfigPaths::from_home("/home/me"),
        Box::new(fs.clone()),
        Box::new(TomlCodec::new()),
    );
    let service = InitService::new(
        &store,
        Box::new(fs.clone()),
        Box::new(BuiltinTemplates::new(Box::new(fs.clone()))),
    );

    service.init(Path::new("/work/demo"), &basic()).unwrap();
    let second = service.init(Path::new("/work/demo"), &basic()).unwrap();

    match second {
        InitOutcome::Completed { applied, .. } => {
            assert!(applied.written.is_empty());
            assert_eq!(applied.skipped.len(), 3);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn init_on_missing_path_changes_nothing() {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("/work")).unwrap();
    let store = ConfigStore::new(
        ConfigPaths::from_home("/home/me"),
        Box::new(fs.clone()),
        Box::new(TomlCodec::new()),
    );
    let service = InitService::new(
        &store,
        Box::new(fs.clone()),
        Box::new(BuiltinTemplates::new(Box::new(fs.clone()))),
    );

    let outcome = service.init(Path::new("/work/missing"), &basic()).unwrap();

    assert_eq!(
        outcome,
        InitOutcome::PathNotFound {
            path: PathBuf::from("/work/missing")
        }
    );
    assert!(fs.list_files().is_empty());
    assert_eq!(
        fs.list_directories(),
        vec![PathBuf::from("/"), PathBuf::from("/work")]
    );
}

#[test]
fn unknown_template_fails_after_cache_is_prepared() {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("/work/demo")).unwrap();
    let store = ConfigStore::new(
        ConfigPaths::from_home("/home/me"),
        Box::new(fs.clone()),
        Box::new(TomlCodec::new()),
    );
    let service = InitService::new(
        &store,
        Box::new(fs.clone()),
        Box::new(BuiltinTemplates::new(Box::new(fs.clone()))),
    );

    let err = service
        .init(Path::new("/work/demo"), &"nope".parse().unwrap())
        .unwrap_err();

    assert_eq!(err.category(), olympus_core::error::ErrorCategory::NotFound);
    assert!(fs.is_dir(Path::new("/work/demo/olympus")));
}
