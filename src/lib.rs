mod equality;
mod error;
mod grid;
mod heap;
mod search;

#[cfg(feature = "node")]
mod binding;

pub use equality::{deep_equal, StructuralEq};
pub use error::GridError;
pub use grid::{Connectivity, Grid, Point};
pub use heap::{HeapEntry, MinHeap};
pub use search::{shortest_path, SearchOptions};
