//! Schema file loading.
//!
//! Both inputs are read whole as UTF-8. A missing file is reported with the
//! side it belongs to so the caller can say which input is absent.

use crate::errors::{ExError, Result, SchemaCmpError};
use crate::model::Side;
use crate::{log_op_end, log_op_error, log_op_start};
use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

/// File name of the local schema dump.
pub const DEFAULT_LOCAL_SCHEMA: &str = "current-local-schema.sql";

/// File name of the reference setup script.
pub const DEFAULT_COMPLETE_SCHEMA: &str = "complete-database-setup.sql";

/// Read one schema file in full.
///
/// # Errors
///
/// - `MissingFile` — `path` does not exist
/// - `Io` — `path` exists but cannot be read or is not valid UTF-8
pub fn load_schema(path: &Path, side: Side) -> Result<String> {
    let start = Instant::now();
    log_op_start!("load_schema", side = side.name(), path = %path.display());

    match fs::read_to_string(path) {
        Ok(content) => {
            log_op_end!(
                "load_schema",
                duration_ms = start.elapsed().as_millis() as u64,
                side = side.name(),
                bytes = content.len() as u64,
            );
            Ok(content)
        }
        Err(e) => {
            let err: ExError = read_error(e, path, side).into();
            let err = err.with_op("load_schema");
            log_op_error!(
                "load_schema",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                side = side.name(),
            );
            Err(err)
        }
    }
}

/// Read the local file, then the complete file.
///
/// The complete file is not touched when the local file fails.
///
/// # Errors
///
/// Propagates the first [`load_schema`] failure.
pub fn load_pair(local: &Path, complete: &Path) -> Result<(String, String)> {
    let local_sql = load_schema(local, Side::Local)?;
    let complete_sql = load_schema(complete, Side::Complete)?;
    Ok((local_sql, complete_sql))
}

fn read_error(e: io::Error, path: &Path, side: Side) -> SchemaCmpError {
    if e.kind() == io::ErrorKind::NotFound {
        SchemaCmpError::MissingFile {
            side,
            path: path.to_path_buf(),
        }
    } else {
        SchemaCmpError::Unreadable {
            side,
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    }
}
