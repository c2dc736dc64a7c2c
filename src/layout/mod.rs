// layout/mod.rs
//
// Deterministic layouters for the relationship graph.
//
// Goals:
// - Deterministic: same snapshot and config, same positions
// - Mode-agnostic callers: every engine maps the same graph to the same
//   shape of output, a node-id keyed position table
// - Isolates included: every node gets a position, edges only matter to
//   the force engine
//
// Submodules:
// - engines::circular: evenly spaced ring in canvas space
// - engines::spherical: golden-angle point distribution on a sphere
// - engines::force: iterative spring/repulsion simulation
//
// Output:
// - PositionMap from NodeId to Position (z stays 0.0 outside spherical).

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::roster::{Graph, NodeId};

mod engines;

pub use engines::{
    layout_circular,
    layout_spherical,
    CircularLayout,
    ForceLayout,
    ForceSimulation,
    SphericalLayout,
    MAX_TICKS,
};

/// A point in layout space. Planar engines leave z at 0.0.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn xy(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

pub type PositionMap = HashMap<NodeId, Position>;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Circular,
    Spherical,
    Force,
}

/// Drawing area the planar engines place into.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasBounds {
    pub width: f64,
    pub height: f64,
}

impl CanvasBounds {
    pub fn center(&self) -> Position {
        Position::xy(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    pub layout_mode: LayoutMode,
    pub canvas_bounds: CanvasBounds,
    /// Ring radius for the circular engine. None picks one from the
    /// canvas bounds.
    pub radius: Option<f64>,
    /// Rest length of friend springs.
    pub friend_edge_target_distance: f64,
    /// Rest length of disrespect springs. Kept well above the friend
    /// distance so the two relation kinds read differently on screen.
    pub disrespect_edge_target_distance: f64,
    /// The force engine stops once no node moves farther than this in
    /// one tick.
    pub convergence_epsilon: f64,
    /// Run the force engine as an open-ended simulation instead of to
    /// convergence. Only honored by the simulation handle.
    pub continuous: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            layout_mode: LayoutMode::Circular,
            canvas_bounds: CanvasBounds::default(),
            radius: None,
            friend_edge_target_distance: 80.0,
            disrespect_edge_target_distance: 240.0,
            convergence_epsilon: 0.5,
            continuous: false,
        }
    }
}

impl LayoutConfig {
    /// Ring radius to use: the explicit override, or 35% of the shorter
    /// canvas side.
    pub fn ring_radius(&self) -> f64 {
        self.radius
            .unwrap_or(0.35 * self.canvas_bounds.width.min(self.canvas_bounds.height))
    }

    /// Reject configs the engines cannot run with. Bad config is a
    /// caller bug, so this fails instead of clamping.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("canvasBounds.width", self.canvas_bounds.width)?;
        check_positive("canvasBounds.height", self.canvas_bounds.height)?;
        if let Some(r) = self.radius {
            check_positive("radius", r)?;
        }
        check_positive(
            "friendEdgeTargetDistance",
            self.friend_edge_target_distance,
        )?;
        check_positive(
            "disrespectEdgeTargetDistance",
            self.disrespect_edge_target_distance,
        )?;
        check_positive("convergenceEpsilon", self.convergence_epsilon)?;
        Ok(())
    }
}

fn check_positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError {
            msg: format!("{field} must be a positive finite number, got {value}"),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub msg: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}", self.msg)
    }
}

impl Error for ConfigError {}

/// One layout engine. Engines are interchangeable: same inputs, same
/// output shape, caller picks by `LayoutMode`.
pub trait LayoutEngine {
    fn layout(&self, graph: &Graph, cfg: &LayoutConfig) -> PositionMap;
}

/// Run the engine selected by `cfg.layout_mode` once, to completion.
///
/// A continuous force config has no single final frame to return, so it
/// is rejected here; drive a `ForceSimulation` directly for that.
pub fn layout_graph(graph: &Graph, cfg: &LayoutConfig) -> Result<PositionMap, ConfigError> {
    cfg.validate()?;
    if cfg.layout_mode == LayoutMode::Force && cfg.continuous {
        return Err(ConfigError {
            msg: "continuous force layout has no final positions; drive a simulation instead"
                .to_string(),
        });
    }

    let engine: &dyn LayoutEngine = match cfg.layout_mode {
        LayoutMode::Circular => &CircularLayout,
        LayoutMode::Spherical => &SphericalLayout,
        LayoutMode::Force => &ForceLayout,
    };
    Ok(engine.layout(graph, cfg))
}
