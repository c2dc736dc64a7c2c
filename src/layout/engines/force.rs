//! Spring/repulsion force layout.
//!
//! Planar simulation over discrete ticks. Every node pair repels with an
//! inverse-square force, every edge acts as a spring toward its rest
//! length (friend springs short, disrespect springs long), and a weak
//! centering force keeps the graph over the canvas center. Velocities
//! are damped each tick so the system settles; `run_to_convergence`
//! stops once the largest per-tick movement drops below the configured
//! epsilon.
//!
//! The simulation is a plain value: no timers, no threads. Callers that
//! want continuous motion own the tick loop and cancel or drop the
//! simulation to stop it.

use super::circular::layout_circular;
use crate::layout::{LayoutConfig, LayoutEngine, Position, PositionMap};
use crate::roster::{EdgeKind, Graph, NodeId};

const K_REPULSION: f64 = 8000.0;
const K_SPRING: f64 = 0.05;
const K_CENTERING: f64 = 0.02;
const DAMPING: f64 = 0.85;
const MIN_DISTANCE: f64 = 1.0;
const MAX_REPULSION_DISTANCE: f64 = 600.0;
const MAX_STEP: f64 = 30.0;

/// Hard cap on convergence ticks so a tight epsilon cannot spin forever.
pub const MAX_TICKS: usize = 600;

struct Spring {
    a: usize,
    b: usize,
    rest: f64,
}

/// Tick-driven force simulation over one graph snapshot.
///
/// Node order follows the snapshot, so index i is `NodeId(i)`. Positions
/// stay planar (z = 0) throughout.
pub struct ForceSimulation {
    positions: Vec<Position>,
    velocities: Vec<(f64, f64)>,
    springs: Vec<Spring>,
    center: Position,
    epsilon: f64,
    cancelled: bool,
}

impl ForceSimulation {
    /// Build a simulation seeded from the ring layout. The ring start is
    /// deterministic and overlap-free, so no randomness is needed.
    ///
    /// `cfg` is assumed validated; entry points validate before this.
    pub fn new(graph: &Graph, cfg: &LayoutConfig) -> Self {
        let seeded = layout_circular(graph, cfg);
        let positions: Vec<Position> =
            graph.nodes.iter().map(|node| seeded[&node.nid]).collect();
        let springs = graph
            .edges
            .iter()
            .map(|edge| Spring {
                a: edge.source.0,
                b: edge.target.0,
                rest: match edge.kind {
                    EdgeKind::Friend => cfg.friend_edge_target_distance,
                    EdgeKind::Disrespect => cfg.disrespect_edge_target_distance,
                },
            })
            .collect();

        Self {
            velocities: vec![(0.0, 0.0); positions.len()],
            positions,
            springs,
            center: cfg.canvas_bounds.center(),
            epsilon: cfg.convergence_epsilon,
            cancelled: false,
        }
    }

    /// Advance the simulation by one tick and return the largest distance
    /// any node moved. A cancelled or empty simulation moves nothing and
    /// returns 0.0.
    pub fn tick(&mut self) -> f64 {
        let n = self.positions.len();
        if self.cancelled || n == 0 {
            return 0.0;
        }

        let mut forces = vec![(0.0_f64, 0.0_f64); n];

        // Pairwise repulsion, floored in distance and capped in range.
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = self.positions[j].x - self.positions[i].x;
                let dy = self.positions[j].y - self.positions[i].y;
                let dist = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
                if dist > MAX_REPULSION_DISTANCE {
                    continue;
                }
                let f = K_REPULSION / (dist * dist);
                let fx = dx / dist * f;
                let fy = dy / dist * f;
                forces[i].0 -= fx;
                forces[i].1 -= fy;
                forces[j].0 += fx;
                forces[j].1 += fy;
            }
        }

        // Each spring drives its endpoints toward the rest length.
        for spring in &self.springs {
            let dx = self.positions[spring.b].x - self.positions[spring.a].x;
            let dy = self.positions[spring.b].y - self.positions[spring.a].y;
            let dist = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
            let f = K_SPRING * (dist - spring.rest);
            let fx = dx / dist * f;
            let fy = dy / dist * f;
            forces[spring.a].0 += fx;
            forces[spring.a].1 += fy;
            forces[spring.b].0 -= fx;
            forces[spring.b].1 -= fy;
        }

        // Weak pull toward the canvas center keeps disconnected parts
        // from drifting off.
        for (i, position) in self.positions.iter().enumerate() {
            forces[i].0 += (self.center.x - position.x) * K_CENTERING;
            forces[i].1 += (self.center.y - position.y) * K_CENTERING;
        }

        // Damped velocity integration with a per-tick step clamp.
        let mut max_step = 0.0_f64;
        for i in 0..n {
            let (vx, vy) = self.velocities[i];
            let mut vx = (vx + forces[i].0) * DAMPING;
            let mut vy = (vy + forces[i].1) * DAMPING;

            let speed = (vx * vx + vy * vy).sqrt();
            if speed > MAX_STEP {
                let scale = MAX_STEP / speed;
                vx *= scale;
                vy *= scale;
            }
            self.velocities[i] = (vx, vy);
            self.positions[i].x += vx;
            self.positions[i].y += vy;
            max_step = max_step.max(speed.min(MAX_STEP));
        }
        max_step
    }

    /// Tick until movement drops to epsilon or the tick cap is hit,
    /// returning the number of ticks run.
    pub fn run_to_convergence(&mut self) -> usize {
        for tick in 1..=MAX_TICKS {
            if self.tick() <= self.epsilon {
                return tick;
            }
        }
        MAX_TICKS
    }

    /// Stop the simulation for good: every later `tick` is a no-op.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Current frame as a node-id keyed position table.
    pub fn positions(&self) -> PositionMap {
        self.positions
            .iter()
            .enumerate()
            .map(|(i, &position)| (NodeId(i), position))
            .collect()
    }
}

/// Run-to-convergence force layout for the one-shot layout API.
pub struct ForceLayout;

impl LayoutEngine for ForceLayout {
    fn layout(&self, graph: &Graph, cfg: &LayoutConfig) -> PositionMap {
        let mut sim = ForceSimulation::new(graph, cfg);
        sim.run_to_convergence();
        sim.positions()
    }
}
