//! Extraction result types: per-type states, the enumeration map, and
//! the issue report.

use std::collections::HashMap;
use std::fmt;

/// Lifecycle of one requested type across the walk.
///
/// Transitions are one-way: `NeverSeen` moves to `Resolved` or
/// `Invalid` on the first claiming block, `Resolved` moves to
/// `DuplicateDiscarded` on a second qualifying block, and `Invalid` and
/// `DuplicateDiscarded` are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceState {
    /// No block has claimed this type
    NeverSeen,
    /// Exactly one well-formed block resolved this ordered sequence
    Resolved(Vec<String>),
    /// The first claiming block did not start from a zero-valued iota
    Invalid,
    /// A second qualifying block appeared; the stored sequence was
    /// discarded
    DuplicateDiscarded,
}

impl SequenceState {
    /// The member sequence, present only for a resolved type.
    pub fn sequence(&self) -> Option<&[String]> {
        match self {
            Self::Resolved(members) => Some(members),
            _ => None,
        }
    }

    /// Short machine-readable label, used by the reporters.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NeverSeen => "never-seen",
            Self::Resolved(_) => "resolved",
            Self::Invalid => "invalid",
            Self::DuplicateDiscarded => "duplicate-discarded",
        }
    }
}

/// Mapping from every requested type name to its state.
///
/// Keys are seeded from the request set before any walk and never
/// change afterwards; iteration follows request order.
#[derive(Debug, Clone)]
pub struct EnumerationMap {
    order: Vec<String>,
    states: HashMap<String, SequenceState>,
}

impl EnumerationMap {
    /// Seed the map with `NeverSeen` for each requested name. The
    /// caller has already validated the names.
    pub(crate) fn seed(names: Vec<String>) -> Self {
        let states = names
            .iter()
            .map(|n| (n.clone(), SequenceState::NeverSeen))
            .collect();
        Self {
            order: names,
            states,
        }
    }

    /// State of one requested type; `None` for unrequested names.
    pub fn get(&self, name: &str) -> Option<&SequenceState> {
        self.states.get(name)
    }

    /// All entries in request order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SequenceState)> {
        self.order
            .iter()
            .filter_map(|n| self.states.get(n).map(|s| (n.as_str(), s)))
    }

    /// Types with a resolved, non-empty sequence, in request order.
    pub fn resolved(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.iter()
            .filter_map(|(name, state)| state.sequence().map(|seq| (name, seq)))
            .filter(|(_, seq)| !seq.is_empty())
    }

    /// Number of requested types.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub(crate) fn set(&mut self, name: &str, state: SequenceState) {
        if let Some(slot) = self.states.get_mut(name) {
            *slot = state;
        }
    }
}

/// Kind of a recoverable per-type finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// A claiming block whose head spec does not start from a
    /// zero-valued iota
    PatternMismatch,
    /// A second qualifying block for an already-resolved type
    DuplicateSequence,
}

impl IssueKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PatternMismatch => "pattern-mismatch",
            Self::DuplicateSequence => "duplicate-sequence",
        }
    }
}

/// One recorded finding, tagged with the offending type name.
///
/// Findings never abort the walk; they are collected in walk order and
/// returned to the caller, which decides how to log or render them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub kind: IssueKind,
    pub type_name: String,
}

impl Issue {
    pub fn pattern_mismatch(type_name: impl Into<String>) -> Self {
        Self {
            kind: IssueKind::PatternMismatch,
            type_name: type_name.into(),
        }
    }

    pub fn duplicate_sequence(type_name: impl Into<String>) -> Self {
        Self {
            kind: IssueKind::DuplicateSequence,
            type_name: type_name.into(),
        }
    }

    /// Human-readable description of the finding.
    pub fn message(&self) -> &'static str {
        match self.kind {
            IssueKind::PatternMismatch => "first spec has no zero-valued iota initializer",
            IssueKind::DuplicateSequence => "duplicated iota sequence discarded",
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.type_name, self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_map() {
        let map = EnumerationMap::seed(vec!["A".into(), "B".into()]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("A"), Some(&SequenceState::NeverSeen));
        assert_eq!(map.get("C"), None);
    }

    #[test]
    fn test_iteration_follows_request_order() {
        let map = EnumerationMap::seed(vec!["Z".into(), "A".into(), "M".into()]);
        let names: Vec<_> = map.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Z", "A", "M"]);
    }

    #[test]
    fn test_resolved_filters_other_states() {
        let mut map = EnumerationMap::seed(vec!["A".into(), "B".into(), "C".into()]);
        map.set("A", SequenceState::Resolved(vec!["A1".into()]));
        map.set("B", SequenceState::Invalid);

        let resolved: Vec<_> = map.resolved().collect();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].0, "A");
    }

    #[test]
    fn test_set_ignores_unrequested_names() {
        let mut map = EnumerationMap::seed(vec!["A".into()]);
        map.set("Ghost", SequenceState::Invalid);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("Ghost"), None);
    }

    #[test]
    fn test_issue_display() {
        let issue = Issue::duplicate_sequence("MatrixType");
        assert_eq!(
            issue.to_string(),
            "MatrixType: duplicated iota sequence discarded"
        );
    }
}
