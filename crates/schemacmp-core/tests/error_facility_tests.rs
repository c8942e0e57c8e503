#![allow(clippy::unwrap_used, clippy::expect_used)]

use schemacmp_core::errors::{ExError, ExErrorKind, SchemaCmpError};
use schemacmp_core::model::Side;
use std::path::{Path, PathBuf};

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::MissingFile, "ERR_MISSING_FILE"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::InvalidConfig, "ERR_INVALID_CONFIG"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_missing_local_distinct_from_missing_complete() {
    let local: ExError = SchemaCmpError::MissingFile {
        side: Side::Local,
        path: PathBuf::from("current-local-schema.sql"),
    }
    .into();
    let complete: ExError = SchemaCmpError::MissingFile {
        side: Side::Complete,
        path: PathBuf::from("complete-database-setup.sql"),
    }
    .into();

    assert_eq!(local.kind(), complete.kind());
    assert_ne!(local.side(), complete.side());
    assert_ne!(local.to_string(), complete.to_string());
    assert!(local.to_string().contains("local schema file not found"));
    assert!(complete.to_string().contains("complete schema file not found"));
}

#[test]
fn test_unreadable_maps_to_io() {
    let err: ExError = SchemaCmpError::Unreadable {
        side: Side::Local,
        path: PathBuf::from("dump.sql"),
        reason: "permission denied".to_string(),
    }
    .into();

    assert_eq!(err.kind(), ExErrorKind::Io);
    assert_eq!(err.code(), "ERR_IO");
    assert_eq!(err.path(), Some(Path::new("dump.sql")));
    assert!(err.message().contains("permission denied"));
}

#[test]
fn test_invalid_filter_config_without_path() {
    let err: ExError = SchemaCmpError::InvalidFilterConfig {
        path: None,
        reason: "expected a table".to_string(),
    }
    .into();

    assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
    assert_eq!(err.path(), None);
    assert_eq!(err.side(), None);
    assert!(err.to_string().starts_with("[ERR_INVALID_CONFIG]"));
}

#[test]
fn test_builder_context_is_preserved() {
    let err = ExError::new(ExErrorKind::MissingFile)
        .with_op("compare_files")
        .with_side(Side::Complete)
        .with_path("/tmp/complete-database-setup.sql");

    assert_eq!(err.op(), Some("compare_files"));
    assert_eq!(err.side(), Some(Side::Complete));
    assert_eq!(
        err.path(),
        Some(Path::new("/tmp/complete-database-setup.sql"))
    );
    assert_eq!(err.message(), "");
}
