//
// Name resolution: free-text candidate name -> NodeId within one cohort.
//
// The relation fields hold display names, not identifiers, so this module
// is the single place that decides what a typed name refers to:
// - match rule: case-insensitive equality on the trimmed display name
// - the issuing entry never matches itself
// - duplicate display names are settled by an explicit tie policy
//
// The index is built once per cohort and queried for every candidate.

use std::collections::HashMap;

use crate::roster::build::NodeId;
use crate::roster::types::RosterEntry;

/// What to do when a candidate name matches more than one roster entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TiePolicy {
    /// Resolve to the first match in snapshot order. This is what the
    /// legacy dashboards did, so it is the default.
    #[default]
    FirstMatch,
    /// Treat an ambiguous name as unresolved instead of guessing.
    RequireUnique,
}

/// Outcome of resolving one candidate name.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Exactly the node the name refers to under the active policy.
    Match(NodeId),
    /// The name only matched the issuing entry itself.
    SelfReference,
    /// No roster entry carries this display name.
    NoMatch,
    /// More than one non-issuer match under `TiePolicy::RequireUnique`.
    Ambiguous,
}

/// Lookup table from normalized display name to the nodes carrying it,
/// in snapshot order.
#[derive(Debug, Clone)]
pub struct NameIndex {
    by_name: HashMap<String, Vec<NodeId>>,
}

impl NameIndex {
    /// Build the index for a cohort snapshot. NodeIds are snapshot
    /// positions, matching the node vector the graph builder produces.
    pub fn build(entries: &[RosterEntry]) -> Self {
        let mut by_name: HashMap<String, Vec<NodeId>> = HashMap::new();
        for (i, entry) in entries.iter().enumerate() {
            let key = normalize_name(&entry.display_name);
            by_name.entry(key).or_default().push(NodeId(i));
        }
        Self { by_name }
    }

    /// Resolve one candidate name issued by `issuer`.
    ///
    /// Self matches are filtered out before the tie policy applies, so a
    /// name shared between the issuer and another entry still resolves to
    /// the other holder.
    pub fn resolve(&self, candidate: &str, issuer: NodeId, policy: TiePolicy) -> Resolution {
        let key = normalize_name(candidate);
        let Some(holders) = self.by_name.get(&key) else {
            return Resolution::NoMatch;
        };

        let mut others = holders.iter().copied().filter(|&nid| nid != issuer);
        let Some(first) = others.next() else {
            // Every holder was the issuer.
            return Resolution::SelfReference;
        };

        match policy {
            TiePolicy::FirstMatch => Resolution::Match(first),
            TiePolicy::RequireUnique => {
                if others.next().is_some() {
                    Resolution::Ambiguous
                } else {
                    Resolution::Match(first)
                }
            }
        }
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::types::RosterEntry;

    fn make_entries(names: &[&str]) -> Vec<RosterEntry> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| RosterEntry::new(format!("{}", i + 1), *name, "", ""))
            .collect()
    }

    #[test]
    fn test_resolve_case_insensitive_trimmed() {
        let entries = make_entries(&["Alice", "Bob"]);
        let index = NameIndex::build(&entries);

        assert_eq!(
            index.resolve("  aLiCe ", NodeId(1), TiePolicy::FirstMatch),
            Resolution::Match(NodeId(0))
        );
    }

    #[test]
    fn test_resolve_no_match() {
        let entries = make_entries(&["Alice", "Bob"]);
        let index = NameIndex::build(&entries);

        assert_eq!(
            index.resolve("Zoe", NodeId(0), TiePolicy::FirstMatch),
            Resolution::NoMatch
        );
    }

    #[test]
    fn test_resolve_excludes_issuer() {
        let entries = make_entries(&["Alice", "Bob"]);
        let index = NameIndex::build(&entries);

        assert_eq!(
            index.resolve("Alice", NodeId(0), TiePolicy::FirstMatch),
            Resolution::SelfReference
        );
    }

    #[test]
    fn test_duplicate_name_first_match_wins() {
        let entries = make_entries(&["Alice", "Bob", "Bob"]);
        let index = NameIndex::build(&entries);

        assert_eq!(
            index.resolve("Bob", NodeId(0), TiePolicy::FirstMatch),
            Resolution::Match(NodeId(1))
        );
    }

    #[test]
    fn test_duplicate_name_skips_issuer_before_tie_break() {
        let entries = make_entries(&["Alice", "Bob", "Bob"]);
        let index = NameIndex::build(&entries);

        // The first "Bob" listing "Bob" resolves to the second holder.
        assert_eq!(
            index.resolve("Bob", NodeId(1), TiePolicy::FirstMatch),
            Resolution::Match(NodeId(2))
        );
    }

    #[test]
    fn test_require_unique_reports_ambiguity() {
        let entries = make_entries(&["Alice", "Bob", "Bob"]);
        let index = NameIndex::build(&entries);

        assert_eq!(
            index.resolve("Bob", NodeId(0), TiePolicy::RequireUnique),
            Resolution::Ambiguous
        );
        // A single non-issuer holder is still unique.
        assert_eq!(
            index.resolve("Bob", NodeId(1), TiePolicy::RequireUnique),
            Resolution::Match(NodeId(2))
        );
    }
}
