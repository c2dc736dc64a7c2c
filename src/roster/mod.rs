pub mod build;
mod normalize;
mod resolve;
mod types;

pub use build::{
    build_graph,
    build_graph_with,
    BuildError,
    BuildOptions,
    EdgeKind,
    Graph,
    GraphEdge,
    GraphNode,
    NodeId,
    UnresolvedReason,
    UnresolvedReference,
};
pub use normalize::split_name_list;
pub use resolve::{NameIndex, Resolution, TiePolicy};
pub use types::{Cohort, EntryId, RosterEntry};
