// Tag co-occurrence graph.
// Counts tag pairs across bookmarks and exports them as an edge list.

pub mod edges;
pub mod export;

pub use edges::{EdgeMap, EdgeRecord, EdgeType};
pub use export::{build_edges, write_edges};
