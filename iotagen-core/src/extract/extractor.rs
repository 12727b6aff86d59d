//! The enumeration extraction engine.
//!
//! A single deterministic pass over the loader's declaration sequence.
//! A constant block claims a requested type only through its head spec's
//! bare type annotation; the head qualifies when it declares exactly one
//! name and is initialized to exactly `iota`. Subsequent bare specs
//! extend the sequence until the first spec that re-declares a type or
//! an initializer.
//!
//! Only the first declared name of a multi-name spec is consulted;
//! extra names on one line are dropped from the sequence without a
//! finding. Downstream consumers rely on that (possibly truncated)
//! output, so the behavior is kept as-is.

use crate::error::{IotagenError, IotagenResult};
use crate::tree::{ConstBlock, Declaration, Expr};

use super::result::{EnumerationMap, Issue, SequenceState};

/// The builtin whose value is zero for the first spec of a block and
/// increments for each spec after it.
const SENTINEL: &str = "iota";

/// Extracts iota enumeration sequences for a fixed set of type names.
#[derive(Debug, Clone)]
pub struct Extractor {
    map: EnumerationMap,
    issues: Vec<Issue>,
}

/// The frozen outcome of one extraction pass.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Every requested type's final state
    pub map: EnumerationMap,
    /// Recoverable findings, in walk order
    pub issues: Vec<Issue>,
}

impl Extractor {
    /// Validate the request set and seed the state map.
    ///
    /// Blank and repeated names are rejected here, before any walk;
    /// nothing else about the names is checked.
    pub fn new<I>(type_names: I) -> IotagenResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        for name in type_names {
            let name = name.into();
            if name.is_empty() {
                return Err(IotagenError::EmptyTypeName);
            }
            if names.contains(&name) {
                return Err(IotagenError::DuplicateTypeName { name });
            }
            names.push(name);
        }

        Ok(Self {
            map: EnumerationMap::seed(names),
            issues: Vec::new(),
        })
    }

    /// The pre-seeded state map; every entry is `NeverSeen` until
    /// [`Extractor::run`] consumes the extractor.
    pub fn map(&self) -> &EnumerationMap {
        &self.map
    }

    /// Walk the declarations once and freeze the outcome.
    ///
    /// Never aborts early: every block is visited and every finding is
    /// collected. Consuming `self` makes re-running on a stale state
    /// map impossible.
    pub fn run(mut self, decls: &[Declaration]) -> Extraction {
        for decl in decls {
            if let Declaration::Const(block) = decl {
                self.visit_block(block);
            }
        }

        Extraction {
            map: self.map,
            issues: self.issues,
        }
    }

    fn visit_block(&mut self, block: &ConstBlock) {
        // Claiming is via the head spec's bare annotation; blocks with
        // no head, no annotation, or an unrequested type are skipped
        // without a finding.
        let Some(head) = block.specs.first() else {
            return;
        };
        let Some(type_name) = head.type_annotation.as_deref() else {
            return;
        };

        let head_qualifies = head.names.len() == 1
            && head.initializers.len() == 1
            && is_sentinel(&head.initializers[0]);

        match (self.map.get(type_name), head_qualifies) {
            (None, _) => {}
            (Some(SequenceState::NeverSeen), true) => {
                let members = collect_members(block);
                self.map
                    .set(type_name, SequenceState::Resolved(members));
            }
            (Some(SequenceState::NeverSeen), false) => {
                self.issues.push(Issue::pattern_mismatch(type_name));
                self.map.set(type_name, SequenceState::Invalid);
            }
            (Some(SequenceState::Resolved(_)), true) => {
                self.issues.push(Issue::duplicate_sequence(type_name));
                self.map.set(type_name, SequenceState::DuplicateDiscarded);
            }
            // A malformed claiming block after resolution changes
            // nothing, and terminal states never move again.
            (Some(_), _) => {}
        }
    }
}

fn is_sentinel(expr: &Expr) -> bool {
    matches!(expr, Expr::Ident(name) if name == SENTINEL)
}

/// Collect the member sequence from a block whose head qualified.
///
/// The head contributes its single name; each following spec
/// contributes its first name while it stays bare. The first
/// non-bare spec ends the sequence without a finding.
fn collect_members(block: &ConstBlock) -> Vec<String> {
    let mut members = Vec::with_capacity(block.specs.len());
    members.push(block.specs[0].names[0].clone());

    for spec in &block.specs[1..] {
        if !spec.is_bare() {
            break;
        }
        let Some(name) = spec.names.first() else {
            break;
        };
        members.push(name.clone());
    }

    members
}
