/// Maze carving executor and injectable random source
pub mod executor;
/// Disjoint-set merging of grid components
pub mod merge;
/// Cancellable paced generation on a background worker
pub mod pacing;
