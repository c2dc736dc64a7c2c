//! Layout engines for the relationship graph.
//!
//! Every engine maps the same graph to a node-id keyed position table:
//! - `circular`: evenly spaced ring, the default
//! - `spherical`: golden-angle distribution on a sphere around the origin
//! - `force`: spring/repulsion simulation, tick-driven and cancelable

mod circular;
mod force;
mod spherical;

pub use circular::{layout_circular, CircularLayout};
pub use force::{ForceLayout, ForceSimulation, MAX_TICKS};
pub use spherical::{layout_spherical, SphericalLayout};
