//! Generated-file emission, one Go source file per resolved type.
//!
//! Each type with a non-empty sequence gets a stringer-style companion
//! file: a name table in declaration order plus a `String()` method.
//! Emission fans out one rayon task per type; tasks share only the
//! emitter's read-only fields and write to distinct file names, and a
//! failure in one task never touches its siblings or the extraction
//! result. The per-iterator `collect` is the join barrier.

use rayon::prelude::*;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::error::{IotagenError, IotagenResult};
use crate::extract::EnumerationMap;

/// Suffix appended to the lower-cased type name for output files.
pub const GENERATED_SUFFIX: &str = "_iotagen.go";

/// Permissions for generated files (owner read/write).
#[cfg(unix)]
const FILE_MODE: u32 = 0o600;

/// Renders and writes companion files for resolved types.
#[derive(Debug, Clone)]
pub struct Emitter {
    /// Tool version stamped into the generated-code header
    pub app_version: String,
    /// Output directory; the scanned package directory
    pub dir: PathBuf,
    /// Package name for the generated files' package clause
    pub package_name: String,
}

/// Result of one type's emission task.
#[derive(Debug)]
pub struct EmitOutcome {
    pub type_name: String,
    pub result: IotagenResult<PathBuf>,
}

impl Emitter {
    /// Emit every resolved, non-empty type concurrently and join.
    ///
    /// Outcomes come back in request order regardless of task timing.
    pub fn emit_all(&self, map: &EnumerationMap) -> Vec<EmitOutcome> {
        let jobs: Vec<(&str, &[String])> = map.resolved().collect();

        jobs.into_par_iter()
            .map(|(type_name, members)| {
                let result = self.emit_type(type_name, members);
                match &result {
                    Ok(path) => {
                        info!(type_name, out_file = %path.display(), "generated file written")
                    }
                    Err(e) => error!(type_name, error = %e, "emission failed"),
                }
                EmitOutcome {
                    type_name: type_name.to_string(),
                    result,
                }
            })
            .collect()
    }

    /// Render one type's companion source.
    pub fn render(&self, type_name: &str, members: &[String]) -> String {
        let mut src = String::with_capacity(512);

        let _ = writeln!(
            src,
            "// Code generated by iotagen {}; DO NOT EDIT.",
            self.app_version
        );
        let _ = writeln!(src);
        let _ = writeln!(src, "package {}", self.package_name);
        let _ = writeln!(src);
        let _ = writeln!(src, "import \"strconv\"");
        let _ = writeln!(src);
        let _ = writeln!(src, "var _{}Names = [...]string{{", type_name);
        for member in members {
            let _ = writeln!(src, "\t\"{}\",", member);
        }
        let _ = writeln!(src, "}}");
        let _ = writeln!(src);
        let _ = writeln!(
            src,
            "// String returns the declared name of v, or a numeric fallback for"
        );
        let _ = writeln!(src, "// values outside the sequence.");
        let _ = writeln!(src, "func (v {}) String() string {{", type_name);
        let _ = writeln!(
            src,
            "\tif int(v) >= 0 && int(v) < len(_{}Names) {{",
            type_name
        );
        let _ = writeln!(src, "\t\treturn _{}Names[v]", type_name);
        let _ = writeln!(src, "\t}}");
        let _ = writeln!(
            src,
            "\treturn \"{}(\" + strconv.Itoa(int(v)) + \")\"",
            type_name
        );
        let _ = writeln!(src, "}}");

        src
    }

    /// Output path for a type: `<lowercased type name>_iotagen.go`.
    pub fn output_path(&self, type_name: &str) -> PathBuf {
        self.dir
            .join(format!("{}{}", type_name.to_lowercase(), GENERATED_SUFFIX))
    }

    fn emit_type(&self, type_name: &str, members: &[String]) -> IotagenResult<PathBuf> {
        let path = self.output_path(type_name);
        let source = self.render(type_name, members);
        write_atomic(&path, &source)?;
        Ok(path)
    }
}

/// Writes content atomically using temp file + rename, so a crash
/// mid-write never leaves a truncated generated file behind.
fn write_atomic(path: &Path, content: &str) -> IotagenResult<()> {
    let temp_path = path.with_extension("go.tmp");

    fs::write(&temp_path, content)
        .map_err(|e| IotagenError::write(&temp_path, e.to_string()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&temp_path, fs::Permissions::from_mode(FILE_MODE))
            .map_err(|e| IotagenError::write(&temp_path, e.to_string()))?;
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        IotagenError::write(path, e.to_string())
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{EnumerationMap, Extractor, SequenceState};
    use crate::tree::{BindingSpec, ConstBlock, Declaration, Expr};
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn setup_temp_dir() -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir()
            .join("iotagen_emit_tests")
            .join(format!("{}_{}", timestamp, id));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn emitter(dir: PathBuf) -> Emitter {
        Emitter {
            app_version: "0.1.0-test".into(),
            dir,
            package_name: "examples".into(),
        }
    }

    fn resolved_map(entries: &[(&str, &[&str])]) -> EnumerationMap {
        let extractor = Extractor::new(entries.iter().map(|(n, _)| *n)).unwrap();
        let decls: Vec<Declaration> = entries
            .iter()
            .map(|(name, members)| {
                let mut specs = vec![BindingSpec::new(
                    vec![members[0].into()],
                    Some((*name).into()),
                    vec![Expr::Ident("iota".into())],
                )];
                specs.extend(
                    members[1..]
                        .iter()
                        .map(|m| BindingSpec::new(vec![(*m).into()], None, vec![])),
                );
                Declaration::Const(ConstBlock { specs })
            })
            .collect();
        extractor.run(&decls).map
    }

    #[test]
    fn test_render_contains_all_members() {
        let e = emitter(PathBuf::from("/tmp"));
        let src = e.render("MatrixType", &["Unknown".into(), "OLED".into()]);

        assert!(src.starts_with("// Code generated by iotagen 0.1.0-test; DO NOT EDIT."));
        assert!(src.contains("package examples"));
        assert!(src.contains("var _MatrixTypeNames = [...]string{"));
        assert!(src.contains("\t\"Unknown\",\n\t\"OLED\",\n"));
        assert!(src.contains("func (v MatrixType) String() string {"));
    }

    #[test]
    fn test_output_path_lowercased() {
        let e = emitter(PathBuf::from("/pkg"));
        assert_eq!(
            e.output_path("MatrixType"),
            PathBuf::from("/pkg/matrixtype_iotagen.go")
        );
    }

    #[test]
    fn test_emit_all_writes_files() {
        let dir = setup_temp_dir();
        let e = emitter(dir.clone());
        let map = resolved_map(&[("MatrixType", &["Unknown", "OLED"]), ("ExtraType", &["One"])]);

        let outcomes = e.emit_all(&map);
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| o.result.is_ok()));
        assert!(dir.join("matrixtype_iotagen.go").exists());
        assert!(dir.join("extratype_iotagen.go").exists());

        let content = fs::read_to_string(dir.join("matrixtype_iotagen.go")).unwrap();
        assert!(content.contains("_MatrixTypeNames"));
    }

    #[test]
    fn test_unresolved_types_not_emitted() {
        let dir = setup_temp_dir();
        let e = emitter(dir.clone());

        let mut map = resolved_map(&[("A", &["A0"])]);
        map.set("A", SequenceState::Invalid);

        let outcomes = e.emit_all(&map);
        assert!(outcomes.is_empty());
        assert!(!dir.join("a_iotagen.go").exists());
    }

    #[test]
    fn test_write_failure_isolated() {
        // a missing output directory fails the task, not the call
        let e = emitter(setup_temp_dir().join("does-not-exist"));
        let map = resolved_map(&[("A", &["A0"])]);

        let outcomes = e.emit_all(&map);
        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_generated_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = setup_temp_dir();
        let e = emitter(dir.clone());
        let map = resolved_map(&[("A", &["A0"])]);

        e.emit_all(&map);
        let mode = fs::metadata(dir.join("a_iotagen.go"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
