//! Output types for frontend consumption.
//!
//! These structs are serialized to JSON and handed across the wasm
//! boundary, so field names follow the JavaScript camelCase convention
//! and node references use external entry ids rather than internal
//! indices.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::layout::{Position, PositionMap};
use crate::metrics::{compute_metrics, CohortMetrics};
use crate::roster::{EdgeKind, Graph, NodeId, UnresolvedReason};

/// A graph node ready for rendering.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeOutput {
    pub id: String,
    pub display_name: String,
}

/// A directed edge between two nodes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeOutput {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
}

/// A relation mention that produced no edge, reported so the frontend
/// can surface typos instead of dropping them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnresolvedOutput {
    pub source: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
    pub reason: UnresolvedReason,
}

/// Error information for the frontend error banner.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub message: String,
}

/// The combined graph payload sent across the boundary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortGraphOutput {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cohort_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<NodeOutput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<EdgeOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<CohortMetrics>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unresolved_references: Vec<UnresolvedOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl CohortGraphOutput {
    pub fn from_graph(cohort_id: &str, graph: &Graph) -> Self {
        let nodes = graph
            .nodes
            .iter()
            .map(|node| NodeOutput {
                id: node.id.0.clone(),
                display_name: node.display_name.clone(),
            })
            .collect();
        let edges = graph
            .edges
            .iter()
            .map(|edge| EdgeOutput {
                source: external_id(graph, edge.source),
                target: external_id(graph, edge.target),
                kind: edge.kind,
            })
            .collect();
        let unresolved_references = graph
            .unresolved
            .iter()
            .map(|unresolved| UnresolvedOutput {
                source: external_id(graph, unresolved.source),
                name: unresolved.name.clone(),
                kind: unresolved.kind,
                reason: unresolved.reason,
            })
            .collect();

        Self {
            cohort_id: cohort_id.to_string(),
            nodes,
            edges,
            metrics: Some(compute_metrics(graph)),
            unresolved_references,
            error: None,
        }
    }

    pub fn from_error(cohort_id: &str, message: String) -> Self {
        Self {
            cohort_id: cohort_id.to_string(),
            nodes: Vec::new(),
            edges: Vec::new(),
            metrics: None,
            unresolved_references: Vec::new(),
            error: Some(ErrorInfo { message }),
        }
    }
}

/// Positions for one layout run, keyed by external entry id. A BTreeMap
/// keeps the serialized form stable.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOutput {
    pub positions: BTreeMap<String, Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl LayoutOutput {
    pub fn from_positions(graph: &Graph, positions: &PositionMap) -> Self {
        let positions = positions
            .iter()
            .map(|(&nid, &position)| (external_id(graph, nid), position))
            .collect();
        Self {
            positions,
            error: None,
        }
    }

    pub fn from_error(message: String) -> Self {
        Self {
            positions: BTreeMap::new(),
            error: Some(ErrorInfo { message }),
        }
    }
}

fn external_id(graph: &Graph, nid: NodeId) -> String {
    graph.nodes[nid.0].id.0.clone()
}
