//! Evenly spaced ring layout.
//!
//! Nodes are placed on a circle around the canvas center in snapshot
//! order: node i of n sits at angle 2π·i/n. Edges play no part, so the
//! result depends only on node count and config. A single node sits at
//! the center rather than on a degenerate ring.

use std::f64::consts::TAU;

use crate::layout::{LayoutConfig, LayoutEngine, Position, PositionMap};
use crate::roster::Graph;

/// Ring layout implementation. The default mode.
pub struct CircularLayout;

impl LayoutEngine for CircularLayout {
    fn layout(&self, graph: &Graph, cfg: &LayoutConfig) -> PositionMap {
        layout_circular(graph, cfg)
    }
}

/// Place every node on a ring around the canvas center.
pub fn layout_circular(graph: &Graph, cfg: &LayoutConfig) -> PositionMap {
    let n = graph.node_count();
    let center = cfg.canvas_bounds.center();
    let radius = cfg.ring_radius();

    let mut positions = PositionMap::with_capacity(n);
    if n == 1 {
        positions.insert(graph.nodes[0].nid, center);
        return positions;
    }

    for (i, node) in graph.nodes.iter().enumerate() {
        let angle = TAU * (i as f64) / (n as f64);
        positions.insert(
            node.nid,
            Position::xy(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            ),
        );
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{build_graph, Cohort, NodeId, RosterEntry};

    fn make_graph(count: usize) -> Graph {
        let entries = (0..count)
            .map(|i| RosterEntry::new(format!("{}", i + 1), format!("Member {i}"), "", ""))
            .collect();
        build_graph(&Cohort {
            id: "c".to_string(),
            entries,
        })
        .unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_four_nodes_quarter_turns() {
        // 600x400 canvas: center (300, 200), radius 140.
        let positions = layout_circular(&make_graph(4), &LayoutConfig::default());

        let p0 = positions[&NodeId(0)];
        assert_close(p0.x, 440.0);
        assert_close(p0.y, 200.0);

        let p1 = positions[&NodeId(1)];
        assert_close(p1.x, 300.0);
        assert_close(p1.y, 340.0);

        let p2 = positions[&NodeId(2)];
        assert_close(p2.x, 160.0);
        assert_close(p2.y, 200.0);

        let p3 = positions[&NodeId(3)];
        assert_close(p3.x, 300.0);
        assert_close(p3.y, 60.0);
    }

    #[test]
    fn test_all_nodes_on_radius() {
        let cfg = LayoutConfig::default();
        let positions = layout_circular(&make_graph(7), &cfg);
        let center = cfg.canvas_bounds.center();

        assert_eq!(positions.len(), 7);
        for position in positions.values() {
            assert_close(position.distance_to(&center), cfg.ring_radius());
            assert_close(position.z, 0.0);
        }
    }

    #[test]
    fn test_single_node_at_center() {
        let positions = layout_circular(&make_graph(1), &LayoutConfig::default());

        let p = positions[&NodeId(0)];
        assert_close(p.x, 300.0);
        assert_close(p.y, 200.0);
    }

    #[test]
    fn test_empty_graph() {
        let positions = layout_circular(&make_graph(0), &LayoutConfig::default());
        assert!(positions.is_empty());
    }

    #[test]
    fn test_radius_override() {
        let cfg = LayoutConfig {
            radius: Some(10.0),
            ..LayoutConfig::default()
        };
        let positions = layout_circular(&make_graph(2), &cfg);

        let p0 = positions[&NodeId(0)];
        assert_close(p0.x, 310.0);
        assert_close(p0.y, 200.0);
    }
}
