//! Typed error handling for iotagen.
//!
//! Provides structured errors that library consumers can match on.
//! Fatal kinds abort the run before or during loading; the per-type
//! emission kind is isolated to a single generated file.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for iotagen operations.
#[derive(Error, Debug)]
pub enum IotagenError {
    /// I/O error when reading/writing files
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// The Go package under a directory failed to lex or parse
    #[error("failed to load Go package at {path}: {message}")]
    Load { path: PathBuf, message: String },

    /// A directory must hold exactly one Go package
    #[error("expected exactly one Go package under {path}, found {found:?}")]
    PackageCount { path: PathBuf, found: Vec<String> },

    /// No type names were requested at all
    #[error("at least one type name is required")]
    NoTypesRequested,

    /// The requested type list contains a blank name
    #[error("empty type name requested")]
    EmptyTypeName,

    /// The requested type list repeats a name
    #[error("duplicated type name requested: {name}")]
    DuplicateTypeName { name: String },

    /// Configuration file errors
    #[error("config error at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// A generated file could not be written; isolated to one type
    #[error("failed to write {path}: {message}")]
    Write { path: PathBuf, message: String },
}

impl IotagenError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a load error.
    pub fn load(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Load {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a package-count error from the distinct package names found.
    pub fn package_count(path: impl Into<PathBuf>, found: Vec<String>) -> Self {
        Self::PackageCount {
            path: path.into(),
            found,
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a write error.
    pub fn write(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Write {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Check if this error aborts the whole run.
    ///
    /// Everything except a per-type write failure is fatal: bad input
    /// validation and load failures stop the pipeline, while a failed
    /// generated file only loses that one type's output.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Write { .. })
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Load { path, .. } => Some(path),
            Self::PackageCount { path, .. } => Some(path),
            Self::Config { path, .. } => Some(path),
            Self::Write { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience type alias for iotagen results.
pub type IotagenResult<T> = Result<T, IotagenError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> IotagenResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> IotagenResult<T> {
        self.map_err(|e| IotagenError::io(path, e))
    }
}
