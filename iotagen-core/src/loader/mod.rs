//! Concrete Go package loader.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────────┐
//! │  lexer.rs   │ ──▶ │  parser.rs  │ ──▶ │      mod.rs      │
//! │ logos token │     │ package +   │     │ per-directory    │
//! │ stream, ASI │     │ const decls │     │ single-package   │
//! └─────────────┘     └─────────────┘     │ compilation unit │
//!                                         └──────────────────┘
//! ```
//!
//! Files are parsed in parallel but collected in sorted path order, so
//! the declaration sequence handed to the extractor is deterministic.
//! Every failure here is fatal: a directory that cannot be loaded
//! cleanly is never partially scanned.

pub mod lexer;
pub mod parser;

use rayon::prelude::*;
use std::fs;
use std::path::Path;

use crate::error::{IotagenError, IotagenResult};
use crate::scan::gather_go_files_with_excludes;
use crate::tree::{CompilationUnit, Declaration, SourceLoader};

pub use parser::{parse_file, ParseError, ParsedFile};

/// Maximum file size to parse (10 MB). Larger files fail the load
/// rather than being skipped: a silently dropped file could silently
/// drop a constant block.
const MAX_FILE_SIZE: u64 = 10_000_000;

/// Loads the single Go package under a directory.
#[derive(Debug, Clone, Default)]
pub struct GoLoader {
    excludes: Vec<String>,
}

impl GoLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extra directory names to prune during the scan, on top of the
    /// standard exclusions.
    pub fn with_excludes(excludes: Vec<String>) -> Self {
        Self { excludes }
    }

    fn parse_one(path: &Path) -> IotagenResult<ParsedFile> {
        let size = fs::metadata(path)
            .map_err(|e| IotagenError::io(path, e))?
            .len();
        if size > MAX_FILE_SIZE {
            return Err(IotagenError::load(
                path,
                format!("file size {} exceeds the {} byte limit", size, MAX_FILE_SIZE),
            ));
        }

        let content = fs::read_to_string(path).map_err(|e| IotagenError::io(path, e))?;
        parse_file(&content).map_err(|e| IotagenError::load(path, e.to_string()))
    }
}

impl SourceLoader for GoLoader {
    fn load(&self, dir: &Path) -> IotagenResult<CompilationUnit> {
        let excludes: Vec<&str> = self.excludes.iter().map(String::as_str).collect();
        let files = gather_go_files_with_excludes(dir, &excludes)
            .map_err(|e| IotagenError::load(dir, e.to_string()))?;

        if files.is_empty() {
            return Err(IotagenError::package_count(dir, Vec::new()));
        }

        // Parallel parse; collect preserves the sorted file order.
        let parsed = files
            .par_iter()
            .map(|path| Self::parse_one(path))
            .collect::<IotagenResult<Vec<_>>>()?;

        let mut package_names: Vec<String> = Vec::new();
        for file in &parsed {
            if !package_names.contains(&file.package) {
                package_names.push(file.package.clone());
            }
        }
        if package_names.len() != 1 {
            return Err(IotagenError::package_count(dir, package_names));
        }

        let package_name = package_names.remove(0);
        let decls = parsed
            .into_iter()
            .flat_map(|file| file.blocks.into_iter().map(Declaration::Const))
            .collect();

        Ok(CompilationUnit {
            package_name,
            decls,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn setup_temp_dir() -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir()
            .join("iotagen_loader_tests")
            .join(format!("{}_{}", timestamp, id));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_file(file: &Path, content: &str) {
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(file, content).unwrap();
    }

    #[test]
    fn test_load_single_package() {
        let dir = setup_temp_dir();
        write_file(
            &dir.join("matrix.go"),
            "package examples\n\nconst (\n\tUnknown MatrixType = iota\n\tOLED\n)\n",
        );
        write_file(&dir.join("extra.go"), "package examples\n");

        let unit = GoLoader::new().load(&dir).unwrap();
        assert_eq!(unit.package_name, "examples");
        assert_eq!(unit.decls.len(), 1);
    }

    #[test]
    fn test_declarations_follow_sorted_file_order() {
        let dir = setup_temp_dir();
        write_file(&dir.join("b.go"), "package p\n\nconst B T = iota\n");
        write_file(&dir.join("a.go"), "package p\n\nconst A T = iota\n");

        let unit = GoLoader::new().load(&dir).unwrap();
        let heads: Vec<_> = unit
            .decls
            .iter()
            .map(|d| match d {
                Declaration::Const(block) => block.specs[0].names[0].clone(),
                Declaration::Other => unreachable!(),
            })
            .collect();
        assert_eq!(heads, vec!["A", "B"]);
    }

    #[test]
    fn test_multiple_packages_rejected() {
        let dir = setup_temp_dir();
        write_file(&dir.join("a.go"), "package one\n");
        write_file(&dir.join("b.go"), "package two\n");

        let err = GoLoader::new().load(&dir).unwrap_err();
        assert!(matches!(err, IotagenError::PackageCount { .. }));
    }

    #[test]
    fn test_empty_directory_rejected() {
        let dir = setup_temp_dir();
        let err = GoLoader::new().load(&dir).unwrap_err();
        assert!(matches!(err, IotagenError::PackageCount { found, .. } if found.is_empty()));
    }

    #[test]
    fn test_broken_file_is_fatal() {
        let dir = setup_temp_dir();
        write_file(&dir.join("a.go"), "package p\n");
        write_file(&dir.join("broken.go"), "const X = 1\n");

        let err = GoLoader::new().load(&dir).unwrap_err();
        assert!(matches!(err, IotagenError::Load { .. }));
    }

    #[test]
    fn test_test_files_ignored_for_package_check() {
        let dir = setup_temp_dir();
        write_file(&dir.join("a.go"), "package p\n");
        write_file(&dir.join("a_test.go"), "package p_test\n");

        let unit = GoLoader::new().load(&dir).unwrap();
        assert_eq!(unit.package_name, "p");
    }
}
