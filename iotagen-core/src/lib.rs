//! iotagen-core: iota enumeration extraction and code generation for Go packages.
//!
//! This library scans a Go package for constant blocks following the
//! auto-increment `iota` idiom, validates each requested type's block
//! against exact order-sensitive matching rules, and generates one
//! stringer-style companion file per resolved type.
//!
//! # The idiom
//!
//! A block qualifies for a type when its first spec declares exactly one
//! name, carries the bare type annotation, and is initialized to exactly
//! `iota`; each following bare spec (no type, no initializer) extends
//! the sequence with the next implicit value:
//!
//! ```go
//! const (
//!     Unknown MatrixType = iota
//!     OLED
//!     AMOLED
//! )
//! ```
//!
//! # Quick Start
//!
//! Use the [`prelude`] module for convenient imports:
//!
//! ```rust,ignore
//! use iotagen_core::prelude::*;
//!
//! let result = Iotagen::new("/path/to/pkg")
//!     .types(["MatrixType"])
//!     .run()?;
//!
//! for (name, state) in result.extraction.map.iter() {
//!     println!("{}: {:?}", name, state.sequence());
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`scan`]: Parallel Go source file discovery
//! - [`loader`]: Go lexer/parser producing the declaration tree
//! - [`tree`]: Declaration-tree model and the loader seam
//! - [`extract`]: The extraction engine and result types
//! - [`emit`]: Per-type generated-file emission
//! - [`report`]: Plain and JSON output of extraction outcomes
//! - [`builder`]: Fluent pipeline API
//! - [`config`]: iotagen.toml loading
//! - [`error`]: Typed error handling
//! - [`logging`]: Structured logging setup

pub mod builder;
pub mod config;
pub mod emit;
pub mod error;
pub mod extract;
pub mod loader;
pub mod logging;
pub mod prelude;
pub mod report;
pub mod scan;
pub mod tree;

// ============================================================================
// Explicit Re-exports (avoiding glob imports for clear API surface)
// ============================================================================

// Error types
pub use error::{IoResultExt, IotagenError, IotagenResult};

// Builder API
pub use builder::{Iotagen, RunResult};

// Configuration
pub use config::{load_config, IotagenConfig, OutputConfig};

// Declaration-tree model
pub use tree::{BindingSpec, CompilationUnit, ConstBlock, Declaration, Expr, SourceLoader};

// Loading
pub use loader::{parse_file, GoLoader, ParseError, ParsedFile};

// Extraction
pub use extract::{EnumerationMap, Extraction, Extractor, Issue, IssueKind, SequenceState};

// Emission
pub use emit::{EmitOutcome, Emitter, GENERATED_SUFFIX};

// Logging
pub use logging::init_structured_logging;

// Reporting
pub use report::{print_json, print_plain, to_json};

// File scanning
pub use scan::{gather_go_files, gather_go_files_with_excludes};
