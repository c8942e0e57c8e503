use crate::model::Side;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing and log assertions.
///
/// Schemas that differ are not an error; see [`crate::diff::Verdict`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// One of the two schema files does not exist
    MissingFile,
    /// A schema file exists but could not be read as UTF-8 text
    Io,
    /// The filter configuration file is unreadable or malformed
    InvalidConfig,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::MissingFile => "ERR_MISSING_FILE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification plus the context needed to tell the user which
/// input was at fault.
#[derive(Debug, Clone, PartialEq)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    side: Option<Side>,
    path: Option<PathBuf>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            side: None,
            path: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the side (local or complete) the error relates to
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn side(&self) -> Option<Side> {
        self.side
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(side) = self.side {
            write!(f, " (side: {})", side)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised while loading inputs and configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaCmpError {
    /// A schema file does not exist
    #[error("{side} schema file not found: {}", .path.display())]
    MissingFile { side: Side, path: PathBuf },

    /// A schema file exists but could not be read
    #[error("failed to read {side} schema file {}: {reason}", .path.display())]
    Unreadable {
        side: Side,
        path: PathBuf,
        reason: String,
    },

    /// Filter configuration could not be read or parsed
    #[error("invalid filter configuration: {reason}")]
    InvalidFilterConfig {
        path: Option<PathBuf>,
        reason: String,
    },
}

impl From<SchemaCmpError> for ExError {
    fn from(err: SchemaCmpError) -> Self {
        let message = err.to_string();
        match err {
            SchemaCmpError::MissingFile { side, path } => ExError::new(ExErrorKind::MissingFile)
                .with_side(side)
                .with_path(path)
                .with_message(message),
            SchemaCmpError::Unreadable { side, path, .. } => ExError::new(ExErrorKind::Io)
                .with_side(side)
                .with_path(path)
                .with_message(message),
            SchemaCmpError::InvalidFilterConfig { path, .. } => {
                let ex = ExError::new(ExErrorKind::InvalidConfig).with_message(message);
                match path {
                    Some(path) => ex.with_path(path),
                    None => ex,
                }
            }
        }
    }
}
