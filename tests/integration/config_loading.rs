// tests/integration/config_loading.rs

use std::io::Write;
use tempfile::NamedTempFile;

use depdag::config::{load_from_path, load_or_default};
use depdag::{DagError, DependencyGraph, LogLevel, SelfLoopPolicy};

#[test]
fn config_file_drives_self_loop_policy() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[graph]
self_loops = "reject"

[logging]
level = "debug"
"#
    )
    .unwrap();

    let cfg = load_from_path(file.path()).unwrap();
    assert_eq!(cfg.logging.level, Some(LogLevel::Debug));

    let mut g = DependencyGraph::with_config(&cfg);
    g.add_node(7u64).unwrap();
    assert!(matches!(g.add_edge(&7u64, &7u64), Err(DagError::SelfLoop(_))));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    assert!(matches!(load_from_path(&path), Err(DagError::IoError(_))));

    let cfg = load_or_default(&path).unwrap();
    assert_eq!(cfg.graph.self_loops, SelfLoopPolicy::Allow);
}

#[test]
fn malformed_toml_is_toml_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[graph\nself_loops = ").unwrap();

    match load_from_path(file.path()) {
        Err(DagError::TomlError(_)) => {}
        other => panic!("Expected TomlError, got: {:?}", other),
    }
}
