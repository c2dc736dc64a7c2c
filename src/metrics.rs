//! Relationship metrics over a built graph.
//!
//! All counts are out-degrees: what an entry declared, not what others
//! declared about it. Percentages are stored as fractions of the
//! possible peer count (n - 1); presentation layers decide how to round
//! and scale them. Every function here tolerates empty and single-node
//! graphs without special casing by the caller.

use serde::{Deserialize, Serialize};

use crate::roster::{EdgeKind, EntryId, Graph, NodeId};

/// Balance of declared relations, classified against a symmetric
/// threshold: at least as many friends as disrespects reads as good.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BalanceLabel {
    GoodBalance,
    NeedsBalance,
}

impl BalanceLabel {
    fn classify(friend_count: usize, disrespect_count: usize) -> Self {
        if friend_count >= disrespect_count {
            BalanceLabel::GoodBalance
        } else {
            BalanceLabel::NeedsBalance
        }
    }
}

/// Declared-relation metrics for one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeMetrics {
    pub id: EntryId,
    pub friend_count: usize,
    pub disrespect_count: usize,
    /// Fraction of possible peers declared as friends, 0.0 when the
    /// cohort has no peers.
    pub friend_percentage: f64,
    /// Fraction of possible peers declared as disrespected.
    pub disrespect_percentage: f64,
    pub balance: BalanceLabel,
}

/// Cohort-level aggregates alongside the per-node table. The table is in
/// snapshot order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortMetrics {
    pub per_node: Vec<NodeMetrics>,
    pub total_nodes: usize,
    pub average_friend_count: f64,
    pub average_disrespect_count: f64,
}

/// Scoring weights shared with the external allocation service. The
/// engine only consumes the relation weights; the rest ride along so
/// both sides agree on one wire shape.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriorityWeights {
    pub academic_weight: f64,
    pub wellbeing_weight: f64,
    pub activities_weight: f64,
    pub friends_weight: f64,
    pub disrespect_weight: f64,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            academic_weight: 1.0,
            wellbeing_weight: 1.0,
            activities_weight: 1.0,
            friends_weight: 1.0,
            disrespect_weight: 1.0,
        }
    }
}

pub fn compute_metrics(graph: &Graph) -> CohortMetrics {
    let n = graph.node_count();
    let counts = count_out_degrees(graph);

    let possible_peers = n.saturating_sub(1);
    let per_node = graph
        .nodes
        .iter()
        .zip(&counts)
        .map(|(node, &(friend_count, disrespect_count))| NodeMetrics {
            id: node.id.clone(),
            friend_count,
            disrespect_count,
            friend_percentage: peer_fraction(friend_count, possible_peers),
            disrespect_percentage: peer_fraction(disrespect_count, possible_peers),
            balance: BalanceLabel::classify(friend_count, disrespect_count),
        })
        .collect();

    let total_friends: usize = counts.iter().map(|&(f, _)| f).sum();
    let total_disrespect: usize = counts.iter().map(|&(_, d)| d).sum();

    CohortMetrics {
        per_node,
        total_nodes: n,
        average_friend_count: average(total_friends, n),
        average_disrespect_count: average(total_disrespect, n),
    }
}

/// Rank nodes by weighted declared relations, highest score first. Ties
/// keep snapshot order, so the result is deterministic.
pub fn priority_ranking(graph: &Graph, weights: &PriorityWeights) -> Vec<(NodeId, f64)> {
    let counts = count_out_degrees(graph);
    let mut ranked: Vec<(NodeId, f64)> = graph
        .nodes
        .iter()
        .zip(&counts)
        .map(|(node, &(friend_count, disrespect_count))| {
            let score = friend_count as f64 * weights.friends_weight
                - disrespect_count as f64 * weights.disrespect_weight;
            (node.nid, score)
        })
        .collect();

    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked
}

fn count_out_degrees(graph: &Graph) -> Vec<(usize, usize)> {
    let mut counts = vec![(0usize, 0usize); graph.node_count()];
    for edge in &graph.edges {
        match edge.kind {
            EdgeKind::Friend => counts[edge.source.0].0 += 1,
            EdgeKind::Disrespect => counts[edge.source.0].1 += 1,
        }
    }
    counts
}

fn peer_fraction(count: usize, possible_peers: usize) -> f64 {
    if possible_peers > 0 {
        count as f64 / possible_peers as f64
    } else {
        0.0
    }
}

fn average(total: usize, n: usize) -> f64 {
    if n > 0 {
        total as f64 / n as f64
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{build_graph, Cohort, RosterEntry};

    fn make_graph(entries: Vec<RosterEntry>) -> Graph {
        build_graph(&Cohort {
            id: "c".to_string(),
            entries,
        })
        .unwrap()
    }

    fn make_four_member_graph() -> Graph {
        make_graph(vec![
            RosterEntry::new("1", "Alice", "Bob, Charlie", "Eve"),
            RosterEntry::new("2", "Bob", "Alice", ""),
            RosterEntry::new("3", "Charlie", "", "Alice"),
            RosterEntry::new("4", "Eve", "", ""),
        ])
    }

    #[test]
    fn test_four_member_counts_and_fractions() {
        let metrics = compute_metrics(&make_four_member_graph());

        let alice = &metrics.per_node[0];
        assert_eq!(alice.friend_count, 2);
        assert_eq!(alice.disrespect_count, 1);
        assert!((alice.friend_percentage - 2.0 / 3.0).abs() < 1e-9);
        assert!((alice.disrespect_percentage - 1.0 / 3.0).abs() < 1e-9);

        let eve = &metrics.per_node[3];
        assert_eq!(eve.friend_count, 0);
        assert_eq!(eve.disrespect_count, 0);
        assert_eq!(eve.friend_percentage, 0.0);

        assert_eq!(metrics.total_nodes, 4);
        assert!((metrics.average_friend_count - 0.75).abs() < 1e-9);
        assert!((metrics.average_disrespect_count - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_balance_classification() {
        let metrics = compute_metrics(&make_four_member_graph());

        // Alice: 2 friends vs 1 disrespect.
        assert_eq!(metrics.per_node[0].balance, BalanceLabel::GoodBalance);
        // Charlie: 0 friends vs 1 disrespect.
        assert_eq!(metrics.per_node[2].balance, BalanceLabel::NeedsBalance);
        // Eve: nothing declared counts as balanced.
        assert_eq!(metrics.per_node[3].balance, BalanceLabel::GoodBalance);
    }

    #[test]
    fn test_empty_cohort() {
        let metrics = compute_metrics(&make_graph(vec![]));

        assert!(metrics.per_node.is_empty());
        assert_eq!(metrics.total_nodes, 0);
        assert_eq!(metrics.average_friend_count, 0.0);
        assert_eq!(metrics.average_disrespect_count, 0.0);
    }

    #[test]
    fn test_single_node_has_zero_fractions() {
        let metrics = compute_metrics(&make_graph(vec![RosterEntry::new(
            "1", "Alice", "", "",
        )]));

        let alice = &metrics.per_node[0];
        assert_eq!(alice.friend_percentage, 0.0);
        assert_eq!(alice.disrespect_percentage, 0.0);
        assert_eq!(alice.balance, BalanceLabel::GoodBalance);
    }

    #[test]
    fn test_priority_ranking_default_weights() {
        let ranked = priority_ranking(&make_four_member_graph(), &PriorityWeights::default());

        // Alice 2-1=1, Bob 1-0=1, Eve 0, Charlie -1; the Alice/Bob tie
        // keeps snapshot order.
        let order: Vec<usize> = ranked.iter().map(|(nid, _)| nid.0).collect();
        assert_eq!(order, vec![0, 1, 3, 2]);
        assert!((ranked[0].1 - 1.0).abs() < 1e-9);
        assert!((ranked[3].1 + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_priority_ranking_custom_weights() {
        let weights = PriorityWeights {
            friends_weight: 2.0,
            disrespect_weight: 0.5,
            ..PriorityWeights::default()
        };
        let ranked = priority_ranking(&make_four_member_graph(), &weights);

        // Alice: 2*2.0 - 1*0.5 = 3.5.
        assert_eq!(ranked[0].0.0, 0);
        assert!((ranked[0].1 - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_balance_label_wire_format() {
        assert_eq!(
            serde_json::to_string(&BalanceLabel::GoodBalance).unwrap(),
            "\"good-balance\""
        );
        assert_eq!(
            serde_json::to_string(&BalanceLabel::NeedsBalance).unwrap(),
            "\"needs-balance\""
        );
    }
}
