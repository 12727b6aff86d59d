//! Declaration-tree model consumed by the extractor.
//!
//! The extractor never touches source text or the filesystem; it walks
//! plain data produced by a [`SourceLoader`]. Tests build these nodes by
//! hand, so the extraction rules can be exercised without any Go files
//! on disk.

use std::path::Path;

use crate::error::IotagenResult;

/// A parsed Go package: its name plus every declaration the loader
/// surfaced, in source order across files.
#[derive(Debug, Clone, Default)]
pub struct CompilationUnit {
    /// Package name from the `package` clause
    pub package_name: String,
    /// Declarations in file order, files sorted by path
    pub decls: Vec<Declaration>,
}

/// One declaration node.
///
/// Only constant blocks matter to extraction; everything else a loader
/// chooses to surface is carried as [`Declaration::Other`] and skipped.
#[derive(Debug, Clone)]
pub enum Declaration {
    /// A `const` declaration: a grouped `const ( ... )` block or a
    /// single `const` line (a block of one spec)
    Const(ConstBlock),
    /// Any other declaration kind; never inspected
    Other,
}

/// An ordered sequence of binding specs from one `const` declaration.
#[derive(Debug, Clone, Default)]
pub struct ConstBlock {
    pub specs: Vec<BindingSpec>,
}

/// One binding line within a constant block.
#[derive(Debug, Clone, Default)]
pub struct BindingSpec {
    /// Declared names, in source order
    pub names: Vec<String>,
    /// Bare single-identifier type annotation. A structurally complex
    /// annotation (qualified, pointer, slice, ...) is recorded as `None`:
    /// it can never claim a requested bare type name, so the block is
    /// skipped exactly as an untyped one would be.
    pub type_annotation: Option<String>,
    /// Initializer expressions, in source order
    pub initializers: Vec<Expr>,
}

/// An initializer expression, reduced to the only distinction the
/// matching rules need: a bare identifier versus anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A single bare identifier, e.g. `iota` or an aliased constant name
    Ident(String),
    /// Any other expression shape
    Other,
}

impl BindingSpec {
    /// Build a spec from parts; test helper and loader convenience.
    pub fn new(
        names: Vec<String>,
        type_annotation: Option<String>,
        initializers: Vec<Expr>,
    ) -> Self {
        Self {
            names,
            type_annotation,
            initializers,
        }
    }

    /// A bare continuation spec: names only, no type, no initializers.
    pub fn is_bare(&self) -> bool {
        self.type_annotation.is_none() && self.initializers.is_empty()
    }
}

/// Loads one Go package from a directory.
///
/// Narrow seam between the extraction engine and the concrete Go front
/// end: any lex/parse/read failure is fatal, and a directory must hold
/// exactly one package. Implementations are never retried.
pub trait SourceLoader {
    fn load(&self, dir: &Path) -> IotagenResult<CompilationUnit>;
}
