//! Hover/selection state and the edge highlight rule: a selected node
//! wins over a hovered one, and only edges touching the active node
//! light up.

use std::collections::HashSet;

use crate::roster::{Graph, NodeId};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    hovered: Option<NodeId>,
    selected: Option<NodeId>,
}

impl SelectionState {
    pub fn set_hovered(&mut self, node: Option<NodeId>) {
        self.hovered = node;
    }

    pub fn set_selected(&mut self, node: Option<NodeId>) {
        self.selected = node;
    }

    pub fn clear(&mut self) {
        self.hovered = None;
        self.selected = None;
    }

    /// The node highlights follow: selection first, hover as fallback.
    pub fn active_node(&self) -> Option<NodeId> {
        self.selected.or(self.hovered)
    }

    /// Indices into `graph.edges` of every edge touching the active
    /// node. Empty when nothing is active or the node has no edges.
    pub fn highlighted_edges(&self, graph: &Graph) -> HashSet<usize> {
        let Some(active) = self.active_node() else {
            return HashSet::new();
        };
        graph
            .edges
            .iter()
            .enumerate()
            .filter(|(_, edge)| edge.source == active || edge.target == active)
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{build_graph, Cohort, RosterEntry};

    fn make_four_member_graph() -> Graph {
        build_graph(&Cohort {
            id: "c".to_string(),
            entries: vec![
                RosterEntry::new("1", "Alice", "Bob, Charlie", "Eve"),
                RosterEntry::new("2", "Bob", "Alice", ""),
                RosterEntry::new("3", "Charlie", "", "Alice"),
                RosterEntry::new("4", "Eve", "", ""),
            ],
        })
        .unwrap()
    }

    #[test]
    fn test_nothing_active_highlights_nothing() {
        let graph = make_four_member_graph();
        let state = SelectionState::default();

        assert_eq!(state.active_node(), None);
        assert!(state.highlighted_edges(&graph).is_empty());
    }

    #[test]
    fn test_selection_wins_over_hover() {
        let mut state = SelectionState::default();
        state.set_hovered(Some(NodeId(3)));
        state.set_selected(Some(NodeId(0)));

        assert_eq!(state.active_node(), Some(NodeId(0)));
    }

    #[test]
    fn test_hover_is_the_fallback() {
        let graph = make_four_member_graph();
        let mut state = SelectionState::default();
        state.set_hovered(Some(NodeId(3)));

        // Eve only appears in Alice's disrespect edge, at index 2.
        assert_eq!(state.highlighted_edges(&graph), HashSet::from([2]));
    }

    #[test]
    fn test_highlights_both_directions() {
        let graph = make_four_member_graph();
        let mut state = SelectionState::default();
        state.set_selected(Some(NodeId(0)));

        // Every edge in this graph touches Alice.
        assert_eq!(
            state.highlighted_edges(&graph),
            HashSet::from([0, 1, 2, 3, 4])
        );
    }

    #[test]
    fn test_clear_resets_both() {
        let graph = make_four_member_graph();
        let mut state = SelectionState::default();
        state.set_hovered(Some(NodeId(1)));
        state.set_selected(Some(NodeId(2)));
        state.clear();

        assert_eq!(state.active_node(), None);
        assert!(state.highlighted_edges(&graph).is_empty());
    }
}
