//! Iota enumeration extraction.
//!
//! The engine behind the tool: a fixed request set of type names, one
//! deterministic pass over the loaded declarations, and a per-type
//! state machine with a collected issue report.
//!
//! ```text
//! ┌─────────────────────┐      ┌─────────────────────┐
//! │    extractor.rs     │      │     result.rs       │
//! │  ─────────────────  │ ───▶ │  ─────────────────  │
//! │  request validation │      │  SequenceState      │
//! │  block walk and     │      │  EnumerationMap     │
//! │  state transitions  │      │  Issue report       │
//! └─────────────────────┘      └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use iotagen_core::extract::Extractor;
//!
//! let extraction = Extractor::new(["MatrixType"])?.run(&unit.decls);
//! for (name, state) in extraction.map.iter() {
//!     println!("{}: {:?}", name, state.sequence());
//! }
//! ```

pub mod extractor;
pub mod result;

// Re-exports for convenience
pub use extractor::{Extraction, Extractor};
pub use result::{EnumerationMap, Issue, IssueKind, SequenceState};
