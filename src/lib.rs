//! Core engine for the sociogram frontend: turns cohort roster snapshots
//! into a typed relationship graph, lays the graph out, and computes
//! relationship metrics. Compiled to WASM; the `wasm` module is the JSON
//! boundary, everything else is plain Rust.

pub mod interaction;
pub mod layout;
pub mod metrics;
pub mod output;
pub mod roster;
pub mod wasm;

pub use interaction::SelectionState;
pub use layout::{
    layout_circular,
    layout_graph,
    layout_spherical,
    CanvasBounds,
    CircularLayout,
    ConfigError,
    ForceLayout,
    ForceSimulation,
    LayoutConfig,
    LayoutEngine,
    LayoutMode,
    Position,
    PositionMap,
    SphericalLayout,
    MAX_TICKS,
};
pub use metrics::{
    compute_metrics,
    priority_ranking,
    BalanceLabel,
    CohortMetrics,
    NodeMetrics,
    PriorityWeights,
};
pub use output::{
    CohortGraphOutput,
    EdgeOutput,
    ErrorInfo,
    LayoutOutput,
    NodeOutput,
    UnresolvedOutput,
};
pub use roster::{
    build_graph,
    build_graph_with,
    split_name_list,
    BuildError,
    BuildOptions,
    Cohort,
    EdgeKind,
    EntryId,
    Graph,
    GraphEdge,
    GraphNode,
    NodeId,
    RosterEntry,
    TiePolicy,
    UnresolvedReason,
    UnresolvedReference,
};
