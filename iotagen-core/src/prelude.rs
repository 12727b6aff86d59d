//! Prelude module for convenient imports.
//!
//! Import commonly used types with a single line:
//!
//! ```rust,ignore
//! use iotagen_core::prelude::*;
//! ```

// Error handling
pub use crate::error::{IotagenError, IotagenResult};

// Declaration-tree model and the loader seam
pub use crate::tree::{BindingSpec, CompilationUnit, ConstBlock, Declaration, Expr, SourceLoader};

// Concrete Go loader
pub use crate::loader::GoLoader;

// Extraction engine
pub use crate::extract::{EnumerationMap, Extraction, Extractor, Issue, IssueKind, SequenceState};

// Emission
pub use crate::emit::{EmitOutcome, Emitter};

// Pipeline builder
pub use crate::builder::{Iotagen, RunResult};

// Configuration
pub use crate::config::{load_config, IotagenConfig};
