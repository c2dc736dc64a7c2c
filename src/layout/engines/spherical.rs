//! Golden-angle sphere layout.
//!
//! Nodes are spread over a sphere around the origin using the Fibonacci
//! lattice: point i of n sits at latitude band (i + 0.5)/n and longitude
//! i times the golden angle. Near-uniform coverage without randomness,
//! and each position is a pure function of (index, count).

use std::f64::consts::TAU;

use crate::layout::{LayoutConfig, LayoutEngine, Position, PositionMap};
use crate::roster::Graph;

/// Sphere layout implementation for 3D consumers.
pub struct SphericalLayout;

impl LayoutEngine for SphericalLayout {
    fn layout(&self, graph: &Graph, cfg: &LayoutConfig) -> PositionMap {
        layout_spherical(graph, cfg)
    }
}

/// Place every node on a sphere of `cfg.ring_radius()` around the origin.
/// A single node sits at the origin itself.
pub fn layout_spherical(graph: &Graph, cfg: &LayoutConfig) -> PositionMap {
    let n = graph.node_count();
    let radius = cfg.ring_radius();

    let mut positions = PositionMap::with_capacity(n);
    if n == 1 {
        positions.insert(graph.nodes[0].nid, Position::default());
        return positions;
    }

    for (i, node) in graph.nodes.iter().enumerate() {
        let unit = sphere_point(i, n);
        positions.insert(
            node.nid,
            Position {
                x: unit.x * radius,
                y: unit.y * radius,
                z: unit.z * radius,
            },
        );
    }
    positions
}

/// Point i of n on the unit sphere. y runs from the north pole down to
/// the south pole as i grows.
pub fn sphere_point(index: usize, count: usize) -> Position {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let golden_angle = TAU * (1.0 - 1.0 / phi);

    let t = (index as f64 + 0.5) / (count as f64);
    let y = 1.0 - 2.0 * t;
    let ring = (1.0 - y * y).sqrt();
    let theta = golden_angle * (index as f64);

    Position {
        x: ring * theta.cos(),
        y,
        z: ring * theta.sin(),
    }
}
