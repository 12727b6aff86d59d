//! Builder pattern API for the extraction pipeline.
//!
//! Ties the loader, extractor, and emitter together:
//!
//! ```rust,ignore
//! use iotagen_core::prelude::*;
//!
//! let result = Iotagen::new("/path/to/pkg")
//!     .types(["MatrixType", "ExtraType"])
//!     .run()?;
//!
//! for issue in &result.extraction.issues {
//!     eprintln!("{}", issue);
//! }
//! ```

use std::path::PathBuf;

use crate::emit::{EmitOutcome, Emitter};
use crate::error::{IotagenError, IotagenResult};
use crate::extract::{Extraction, Extractor};
use crate::loader::GoLoader;
use crate::tree::SourceLoader;

/// Builder for configuring one extraction-and-generation run.
#[derive(Debug, Clone)]
pub struct Iotagen {
    /// Directory holding the Go package to scan
    dir: PathBuf,

    /// Requested type names, in request order
    type_names: Vec<String>,

    /// Extra directory names pruned during the scan
    excludes: Vec<String>,

    /// Whether to write generated files after extraction
    emit: bool,

    /// Version string stamped into generated files
    app_version: String,
}

/// Outcome of a full pipeline run.
#[derive(Debug)]
pub struct RunResult {
    /// Name of the loaded package
    pub package_name: String,
    /// Extraction states and findings
    pub extraction: Extraction,
    /// Per-type emission outcomes; empty when emission was disabled
    pub outcomes: Vec<EmitOutcome>,
}

impl Iotagen {
    /// Create a new pipeline builder for the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            type_names: Vec::new(),
            excludes: Vec::new(),
            emit: true,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Set the requested type names.
    pub fn types<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.type_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Add directory names to prune during the scan.
    pub fn exclude_dirs<I>(mut self, dirs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.excludes.extend(dirs.into_iter().map(Into::into));
        self
    }

    /// Enable or disable writing generated files.
    pub fn emit(mut self, enabled: bool) -> Self {
        self.emit = enabled;
        self
    }

    /// Override the version string stamped into generated files.
    pub fn app_version(mut self, version: impl Into<String>) -> Self {
        self.app_version = version.into();
        self
    }

    /// Run the pipeline: validate, load, extract, emit.
    ///
    /// Request validation and loading are fatal; extraction findings
    /// and per-type emission failures come back in the result.
    pub fn run(&self) -> IotagenResult<RunResult> {
        if self.type_names.is_empty() {
            return Err(IotagenError::NoTypesRequested);
        }
        let extractor = Extractor::new(self.type_names.iter().cloned())?;

        let loader = GoLoader::with_excludes(self.excludes.clone());
        let unit = loader.load(&self.dir)?;

        let extraction = extractor.run(&unit.decls);

        let outcomes = if self.emit {
            Emitter {
                app_version: self.app_version.clone(),
                dir: self.dir.clone(),
                package_name: unit.package_name.clone(),
            }
            .emit_all(&extraction.map)
        } else {
            Vec::new()
        };

        Ok(RunResult {
            package_name: unit.package_name,
            extraction,
            outcomes,
        })
    }
}
