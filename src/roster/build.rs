//
// Graph builder: one cohort snapshot in, one relationship graph out.
//
// Build runs in two phases over the snapshot:
// 1. every entry becomes a node, in snapshot order, isolates included
// 2. every relation field is tokenized and resolved against the name
//    index, producing directed typed edges
//
// Self references are dropped, repeated mentions collapse to a single
// edge per (source, target, kind), and names that do not resolve are
// collected as diagnostics instead of being silently discarded.
//
// Malformed snapshots (duplicate ids, blank display names) are caller
// bugs and fail the whole build.

use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::roster::normalize::split_name_list;
use crate::roster::resolve::{NameIndex, Resolution, TiePolicy};
use crate::roster::types::{Cohort, EntryId, RosterEntry};

/// Index of a node in the graph's node vector. Stable for the lifetime
/// of one built graph; not meaningful across snapshots.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two relation kinds a roster entry can declare.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Friend,
    Disrespect,
}

/// A member of the cohort, isolated or not.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub nid: NodeId,
    pub id: EntryId,
    pub display_name: String,
}

/// A directed, typed relation between two distinct nodes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GraphEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub kind: EdgeKind,
}

/// Why a candidate name produced no edge.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnresolvedReason {
    NoMatch,
    Ambiguous,
}

/// A relation mention that could not be turned into an edge.
#[derive(Debug, Clone, PartialEq)]
pub struct UnresolvedReference {
    pub source: NodeId,
    pub name: String,
    pub kind: EdgeKind,
    pub reason: UnresolvedReason,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BuildError {
    pub msg: String,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "build error: {}", self.msg)
    }
}

impl Error for BuildError {}

/// Knobs for the build. Only name-collision handling is configurable;
/// everything else about the build is fixed by the data model.
#[derive(Debug, Copy, Clone, Default)]
pub struct BuildOptions {
    pub tie_policy: TiePolicy,
}

/// The built relationship graph for one cohort snapshot.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub unresolved: Vec<UnresolvedReference>,
}

impl Graph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Snapshot index of the node carrying this external id.
    pub fn node_index(&self, id: &EntryId) -> Option<NodeId> {
        self.nodes.iter().position(|n| &n.id == id).map(NodeId)
    }
}

pub fn build_graph(cohort: &Cohort) -> Result<Graph, BuildError> {
    build_graph_with(cohort, BuildOptions::default())
}

pub fn build_graph_with(cohort: &Cohort, options: BuildOptions) -> Result<Graph, BuildError> {
    validate_entries(&cohort.entries)?;

    let mut ctx = BuildCtx::new(&cohort.entries, options);
    ctx.add_nodes();
    ctx.add_edges();
    Ok(ctx.finish())
}

fn validate_entries(entries: &[RosterEntry]) -> Result<(), BuildError> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (i, entry) in entries.iter().enumerate() {
        if entry.display_name.trim().is_empty() {
            return Err(BuildError {
                msg: format!("entry '{}' has an empty display name", entry.id),
            });
        }
        if let Some(first) = seen.insert(entry.id.0.as_str(), i) {
            return Err(BuildError {
                msg: format!(
                    "duplicate entry id '{}' at positions {} and {}",
                    entry.id, first, i
                ),
            });
        }
    }
    Ok(())
}

struct BuildCtx<'a> {
    entries: &'a [RosterEntry],
    options: BuildOptions,
    index: NameIndex,
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    unresolved: Vec<UnresolvedReference>,
    seen_edges: HashSet<(NodeId, NodeId, EdgeKind)>,
}

impl<'a> BuildCtx<'a> {
    fn new(entries: &'a [RosterEntry], options: BuildOptions) -> Self {
        Self {
            entries,
            options,
            index: NameIndex::build(entries),
            nodes: Vec::with_capacity(entries.len()),
            edges: Vec::new(),
            unresolved: Vec::new(),
            seen_edges: HashSet::new(),
        }
    }

    fn add_nodes(&mut self) {
        for (i, entry) in self.entries.iter().enumerate() {
            self.nodes.push(GraphNode {
                nid: NodeId(i),
                id: entry.id.clone(),
                display_name: entry.display_name.clone(),
            });
        }
    }

    fn add_edges(&mut self) {
        for (i, entry) in self.entries.iter().enumerate() {
            let source = NodeId(i);
            self.add_relation_edges(source, &entry.friends_raw, EdgeKind::Friend);
            self.add_relation_edges(source, &entry.disrespect_raw, EdgeKind::Disrespect);
        }
    }

    fn add_relation_edges(&mut self, source: NodeId, raw: &str, kind: EdgeKind) {
        for candidate in split_name_list(raw) {
            match self.index.resolve(candidate, source, self.options.tie_policy) {
                Resolution::Match(target) => {
                    if self.seen_edges.insert((source, target, kind)) {
                        self.edges.push(GraphEdge { source, target, kind });
                    }
                }
                // Listing yourself is noise, not a diagnostic.
                Resolution::SelfReference => {}
                Resolution::NoMatch => self.push_unresolved(
                    source,
                    candidate,
                    kind,
                    UnresolvedReason::NoMatch,
                ),
                Resolution::Ambiguous => self.push_unresolved(
                    source,
                    candidate,
                    kind,
                    UnresolvedReason::Ambiguous,
                ),
            }
        }
    }

    fn push_unresolved(
        &mut self,
        source: NodeId,
        name: &str,
        kind: EdgeKind,
        reason: UnresolvedReason,
    ) {
        self.unresolved.push(UnresolvedReference {
            source,
            name: name.to_string(),
            kind,
            reason,
        });
    }

    fn finish(self) -> Graph {
        Graph {
            nodes: self.nodes,
            edges: self.edges,
            unresolved: self.unresolved,
        }
    }
}
